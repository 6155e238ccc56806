pub mod editor;
pub mod model;
pub mod param;

pub use editor::{EditorProps, ParamEditor, ResetCallback};
pub use model::{Fixture, Model, ProductColor};
pub use param::{Param, ParamId, ParamType, ParamValue};
