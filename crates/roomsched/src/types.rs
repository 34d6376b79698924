use crate::config::ConflictPolicy;
use crate::db::RoomDbManager;
use crate::scheduling::ScheduleCatalog;

/// Shared state handed to every request handler.
pub struct RoomState {
    /// Catalog all class timings are validated against
    pub catalog: ScheduleCatalog,
    pub room_db: RoomDbManager,
    pub conflict_policy: ConflictPolicy,
}
