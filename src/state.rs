use crate::database::Directory;
use crate::services::activities_service::CapacityPolicy;

/// State handed to every handler through axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    pub directory: Directory,
    pub capacity: CapacityPolicy,
}

impl AppState {
    pub fn new(directory: Directory, capacity: CapacityPolicy) -> Self {
        Self {
            directory,
            capacity,
        }
    }

    pub fn seeded(capacity: CapacityPolicy) -> Self {
        Self::new(Directory::seeded(), capacity)
    }
}
