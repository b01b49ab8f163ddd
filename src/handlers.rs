use axum::Json;
use axum::extract::State;
use tracing::debug;
use crate::AppState;
use crate::error::QueryError;
use crate::models::User;

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, QueryError> {

    let users = state.users.fetch_users().await?;

    debug!(count = users.len(), "fetched users");

    Ok(Json(users))

}
