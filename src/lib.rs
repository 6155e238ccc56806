//! Terminal form widget for editing a product's descriptive parameters.
//!
//! [`ParamEditor`](state::ParamEditor) holds the edit state and the
//! snapshot/reset contract, [`RendererRegistry`](renderers::RendererRegistry)
//! maps parameter types to field renderers, and
//! [`ParamEditPane`](panes::ParamEditPane) puts both on screen.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod panes;
pub mod renderers;
pub mod state;
pub mod ui;

pub use error::{Error, Result};
