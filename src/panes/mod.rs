mod help_pane;
mod param_edit_pane;

pub use help_pane::HelpPane;
pub use param_edit_pane::{FieldSlot, ParamEditPane};
