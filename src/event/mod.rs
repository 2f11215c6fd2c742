//! Event system: host input, key bindings, click dispatch.

pub mod binding;
pub mod dispatch;
pub mod input;

pub use binding::{BindingAction, KeyBindingRegistry};
pub use dispatch::{Capability, DispatchTable, Trigger};
pub use input::{InputEvent, Key, KeyEvent, Modifiers};
