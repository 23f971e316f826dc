use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::warn;

use crate::error::SignupError;
use crate::models::{ActivityCatalog, ParticipantEmail};
use crate::services::activities_service::{self, CommandReceipt};
use crate::state::AppState;

type QueryPairs = Vec<(String, String)>;

// A name that cannot be decoded never matches a directory key.
fn activity_from_path(path: Result<Path<String>, PathRejection>) -> Result<String, SignupError> {
    path.map(|Path(name)| name).map_err(|rejection| {
        warn!("activity path rejected: {}", rejection.body_text());
        SignupError::ActivityNotFound
    })
}

// Repeated `email` parameters resolve to the last one.
fn participant_from_query(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<ParticipantEmail, SignupError> {
    let Query(pairs) = query.map_err(|rejection| SignupError::InvalidQuery(rejection.body_text()))?;
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| ParticipantEmail::from(value))
        .ok_or_else(|| SignupError::InvalidQuery("missing query parameter `email`".to_string()))
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(activities_service::list_activities(&state.directory).await)
}

pub async fn signup_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<CommandReceipt>, SignupError> {
    let activity_name = activity_from_path(path)?;
    let email = participant_from_query(query)?;
    activities_service::signup_for_activity(
        &state.directory,
        state.capacity,
        &activity_name,
        &email,
    )
    .await
    .map(Json)
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<CommandReceipt>, SignupError> {
    let activity_name = activity_from_path(path)?;
    let email = participant_from_query(query)?;
    activities_service::unregister_from_activity(&state.directory, &activity_name, &email)
        .await
        .map(Json)
}
