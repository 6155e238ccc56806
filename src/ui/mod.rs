pub mod canvas;
pub mod frame;
pub mod graphics;
pub mod input;
pub mod keymap;
pub mod pane;
pub mod ratatui_impl;
pub mod style;
pub mod widgets;

pub use canvas::TextCanvas;
pub use frame::Frame;
pub use graphics::{Graphics, Rect, Viewport};
pub use input::{InputEvent, InputSource, KeyCode, Modifiers};
pub use keymap::Keymap;
pub use pane::{Action, Pane, PaneManager};
pub use ratatui_impl::RatatuiBackend;
pub use style::{Color, Style};
