use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::SignupError;
use crate::models::Activity;

/// In-memory activity directory shared by all handlers.
///
/// Cloning is cheap and yields a handle to the same roster data. Every
/// mutation runs under the write lock, so a membership check and the insert or
/// removal that depends on it are never interleaved with another request.
#[derive(Debug, Clone)]
pub struct Directory {
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl Directory {
    /// Builds a directory from `activities`. Later entries with a name that is
    /// already present are dropped so names stay unique.
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut unique: Vec<Activity> = Vec::with_capacity(activities.len());
        for a in activities {
            if !unique.iter().any(|u| u.name == a.name) {
                unique.push(a);
            }
        }
        Self {
            activities: Arc::new(RwLock::new(unique)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn list(&self) -> Vec<Activity> {
        self.activities.read().await.clone()
    }

    #[cfg(test)]
    pub async fn find(&self, name: &str) -> Option<Activity> {
        self.activities
            .read()
            .await
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    /// Runs `f` against the named activity while holding the write lock.
    pub async fn update_activity<T, F>(&self, name: &str, f: F) -> Result<T, SignupError>
    where
        F: FnOnce(&mut Activity) -> Result<T, SignupError>,
    {
        let mut activities = self.activities.write().await;
        let activity = activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(SignupError::ActivityNotFound)?;
        f(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_drops_duplicate_names() {
        let dir = Directory::new(vec![
            Activity::new("Chess Club", "first", "Fridays", 12),
            Activity::new("Chess Club", "second", "Mondays", 4),
        ]);
        let all = dir.list().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "first");
    }

    #[tokio::test]
    async fn update_unknown_activity_is_not_found() {
        let dir = Directory::seeded();
        let before = dir.list().await;
        let res = dir
            .update_activity("Nonexistent Club", |a| {
                a.participants.clear();
                Ok(())
            })
            .await;
        assert_eq!(res, Err(SignupError::ActivityNotFound));
        assert_eq!(dir.list().await, before);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let dir = Directory::seeded();
        let other = dir.clone();
        other
            .update_activity("Art Club", |a| {
                a.participants.push("x@mergington.edu".to_string());
                Ok(())
            })
            .await
            .unwrap();
        let art = dir.find("Art Club").await.unwrap();
        assert_eq!(art.participants, vec!["x@mergington.edu"]);
    }

    #[tokio::test]
    async fn separate_directories_are_isolated() {
        let a = Directory::seeded();
        let b = Directory::seeded();
        a.update_activity("Chess Club", |act| {
            act.participants.clear();
            Ok(())
        })
        .await
        .unwrap();
        assert_eq!(b.find("Chess Club").await.unwrap().participants.len(), 2);
    }
}
