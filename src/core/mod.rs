pub mod action;
pub mod command;
pub mod module;
pub mod selector;

pub use action::{Action, ExportFormat, NotifyLevel};
pub use command::{parse_command, Command};
pub use module::Module;
pub use selector::{View, ViewSelector};
