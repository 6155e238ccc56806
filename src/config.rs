use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    editor: EditorConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Deserialize, Default)]
struct EditorConfig {
    title: Option<String>,
    empty_message: Option<String>,
    placeholder: Option<String>,
    width: Option<u16>,
}

#[derive(Deserialize, Default)]
struct LoggingConfig {
    level: Option<String>,
    file: Option<PathBuf>,
}

/// Presentation settings for the editor pane
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub title: String,
    pub empty_message: String,
    /// `{name}` is replaced with the parameter name
    pub placeholder: String,
    pub width: u16,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            title: "Product parameters".to_string(),
            empty_message: "No parameters to display".to_string(),
            placeholder: "Enter a value for {name}".to_string(),
            width: 60,
        }
    }
}

impl EditorSettings {
    pub fn placeholder_for(&self, param_name: &str) -> String {
        self.placeholder.replace("{name}", param_name)
    }
}

pub struct Config {
    editor: EditorConfig,
    logging: LoggingConfig,
    /// User file merged over the defaults, if one was read
    source: Option<PathBuf>,
    /// Problems met while loading. Config is read before logging exists, so
    /// the caller reports these once a subscriber is installed.
    warnings: Vec<String>,
}

impl Config {
    /// Embedded defaults merged with the user's config file, if any
    pub fn load() -> Result<Self> {
        Self::load_with(user_config_path().as_deref())
    }

    /// Embedded defaults merged with `path` (missing or malformed files are skipped)
    pub fn load_with(path: Option<&Path>) -> Result<Self> {
        let mut base: ConfigFile = toml::from_str(DEFAULT_CONFIG)?;
        let mut source = None;
        let mut warnings = Vec::new();

        if let Some(path) = path.filter(|p| p.exists()) {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                    Ok(user) => {
                        merge_editor(&mut base.editor, user.editor);
                        merge_logging(&mut base.logging, user.logging);
                        source = Some(path.to_path_buf());
                    }
                    Err(e) => warnings.push(format!("Failed to parse {}: {}", path.display(), e)),
                },
                Err(e) => warnings.push(format!("Failed to read {}: {}", path.display(), e)),
            }
        }

        Ok(Config {
            editor: base.editor,
            logging: base.logging,
            source,
            warnings,
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Skipped-file diagnostics from `load_with`
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Emit what `load_with` collected. Call after `logging::init`.
    pub fn report(&self) {
        match &self.source {
            Some(path) => tracing::debug!("Loaded config from {}", path.display()),
            None => tracing::debug!("Using built-in config"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }

    pub fn editor(&self) -> EditorSettings {
        let fallback = EditorSettings::default();
        EditorSettings {
            title: self.editor.title.clone().unwrap_or(fallback.title),
            empty_message: self
                .editor
                .empty_message
                .clone()
                .unwrap_or(fallback.empty_message),
            placeholder: self
                .editor
                .placeholder
                .clone()
                .unwrap_or(fallback.placeholder),
            width: self.editor.width.filter(|w| *w >= 20).unwrap_or(fallback.width),
        }
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }

    /// Where the log file goes: the configured path or `<cache>/paramedit/paramedit.log`
    pub fn log_file(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("paramedit")
                .join("paramedit.log")
        })
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("paramedit").join("config.toml"))
}

fn merge_editor(base: &mut EditorConfig, user: EditorConfig) {
    if user.title.is_some() {
        base.title = user.title;
    }
    if user.empty_message.is_some() {
        base.empty_message = user.empty_message;
    }
    if user.placeholder.is_some() {
        base.placeholder = user.placeholder;
    }
    if user.width.is_some() {
        base.width = user.width;
    }
}

fn merge_logging(base: &mut LoggingConfig, user: LoggingConfig) {
    if user.level.is_some() {
        base.level = user.level;
    }
    if user.file.is_some() {
        base.file = user.file;
    }
}
