mod registry;
mod memory_registry;
mod db_registry;

pub use self::registry::{LocationRegistry, PerspectiveId};
pub use self::memory_registry::MemoryRegistry;
pub use self::db_registry::DbRegistry;
