use serde::Serialize;
use tracing::{debug, info, warn};

use crate::database::Directory;
use crate::error::SignupError;
use crate::models::{ActivityCatalog, ParticipantEmail};

/// Whether `max_participants` blocks new signups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    #[default]
    Advisory,
    Enforced,
}

impl CapacityPolicy {
    pub fn from_enforce_flag(enforce: bool) -> Self {
        if enforce {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Advisory
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReceipt {
    pub message: String,
}

pub async fn list_activities(directory: &Directory) -> ActivityCatalog {
    let activities = directory.list().await;
    debug!(count = activities.len(), "listing activities");
    ActivityCatalog(activities)
}

pub async fn signup_for_activity(
    directory: &Directory,
    policy: CapacityPolicy,
    activity_name: &str,
    email: &ParticipantEmail,
) -> Result<CommandReceipt, SignupError> {
    let result = directory
        .update_activity(activity_name, |activity| {
            if activity.has_participant(email) {
                return Err(SignupError::AlreadyRegistered);
            }
            if policy == CapacityPolicy::Enforced && activity.is_full() {
                return Err(SignupError::ActivityFull);
            }
            activity.add_participant(email);
            Ok(activity.participants.len())
        })
        .await;

    match result {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "signed up");
            Ok(CommandReceipt {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn unregister_from_activity(
    directory: &Directory,
    activity_name: &str,
    email: &ParticipantEmail,
) -> Result<CommandReceipt, SignupError> {
    let result = directory
        .update_activity(activity_name, |activity| {
            if !activity.remove_participant(email) {
                return Err(SignupError::NotRegistered);
            }
            Ok(activity.participants.len())
        })
        .await;

    match result {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "unregistered");
            Ok(CommandReceipt {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}
