pub mod select_list;
pub mod text_input;

pub use select_list::{cycle_option, ChoiceField};
pub use text_input::{edit_text, TextField};
