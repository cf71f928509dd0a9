mod workflow;
mod selection;
mod init;
mod manager;
mod scope;

pub use self::workflow::{Workflow, Workflows};
pub use self::selection::DirectoryTarget;
pub use self::manager::LocationManager;
pub use self::scope::WorkflowScope;
