pub mod activity;
pub mod participant;

pub use activity::{Activity, ActivityCatalog};
pub use participant::ParticipantEmail;
