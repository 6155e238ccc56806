use std::time::Duration;

use clap::Parser;

use paramedit::app::App;
use paramedit::cli::Cli;
use paramedit::config::Config;
use paramedit::renderers::RendererRegistry;
use paramedit::state::Fixture;
use paramedit::ui::{InputSource, RatatuiBackend};

fn main() -> paramedit::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with(Some(path.as_path()))?,
        None => Config::load()?,
    };
    let level = cli.log_level.as_deref().unwrap_or(config.log_level());
    let _log_guard = paramedit::logging::init(level, &config.log_file())?;
    config.report();

    let fixture = match &cli.input {
        Some(path) => Fixture::from_path(path)?,
        None => Fixture::demo()?,
    };
    tracing::info!(
        params = fixture.params.len(),
        source = ?cli.input,
        "starting editor"
    );

    let mut app = App::new(fixture, cli.input.clone(), RendererRegistry::new(), config.editor());

    let mut backend = RatatuiBackend::new()?;
    backend.start()?;
    let result = run(&mut backend, &mut app);
    backend.stop()?;
    result?;

    if cli.dump_model {
        if let Some(model) = app.current_model() {
            println!("{}", serde_json::to_string_pretty(&model)?);
        }
    }

    Ok(())
}

fn run(backend: &mut RatatuiBackend, app: &mut App) -> std::io::Result<()> {
    loop {
        if let Some(event) = backend.poll_event(Duration::from_millis(16)) {
            if app.handle_event(event) {
                break;
            }
        }

        backend.draw(|g| app.render(g))?;
    }
    tracing::info!("editor closed");
    Ok(())
}
