use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::user::User;
use crate::validation::id::{is_valid_id, parse_id};
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;
use tracing::debug;

/// Look up a user by id
///
/// GET /about/{id}
///
/// Malformed ids are rejected with 400 before the store is consulted; an
/// empty lookup result is a 404. A valid id with no readable integer, or one
/// too large for the key column, cannot match a row and is a 404 as well.
pub async fn about_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    if !is_valid_id(&raw_id) {
        debug!(raw_id = %raw_id, "Rejected malformed user id");
        return Err(ApiError::InvalidId);
    }

    let users = match parse_id(&raw_id) {
        Some(id) => state.users.find_by_id(id).await,
        None => {
            debug!(raw_id = %raw_id, "User id has no representable key");
            Vec::new()
        }
    };

    match users.into_iter().next() {
        Some(user) => Ok(Json(user)),
        None => {
            debug!(raw_id = %raw_id, "User lookup returned no rows");
            Err(ApiError::UserNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_state, sample_user, RecordingRepository};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn repository() -> Arc<RecordingRepository> {
        Arc::new(RecordingRepository::with_users(vec![
            sample_user(1, "Alice"),
            sample_user(2, "Bob"),
        ]))
    }

    async fn call(repository: &Arc<RecordingRepository>, raw: &str) -> Result<Json<User>, ApiError> {
        let state = create_test_state(Arc::clone(repository));
        about_handler(State(state), Path(raw.to_string())).await
    }

    #[tokio::test]
    async fn test_existing_user() {
        let repository = repository();

        let Json(user) = call(&repository, "1").await.unwrap();

        assert_eq!(user, sample_user(1, "Alice"));
        assert_eq!(repository.lookups(), vec![1]);
    }

    #[tokio::test]
    async fn test_missing_user() {
        let repository = repository();

        let err = call(&repository, "999").await.unwrap_err();

        assert_eq!(err, ApiError::UserNotFound);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(repository.lookups(), vec![999]);
    }

    #[tokio::test]
    async fn test_non_numeric_id_skips_repository() {
        let repository = repository();

        let err = call(&repository, "abc").await.unwrap_err();

        assert_eq!(err, ApiError::InvalidId);
        assert!(repository.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_fractional_id_skips_repository() {
        let repository = repository();

        let err = call(&repository, "1.5").await.unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert!(repository.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_decimal_form_resolves_to_integer() {
        let repository = repository();

        let Json(user) = call(&repository, "2.0").await.unwrap();

        assert_eq!(user.name, "Bob");
        assert_eq!(repository.lookups(), vec![2]);
    }

    #[tokio::test]
    async fn test_negative_id_is_looked_up() {
        let repository = repository();

        let err = call(&repository, "-1").await.unwrap_err();

        assert_eq!(err, ApiError::UserNotFound);
        assert_eq!(repository.lookups(), vec![-1]);
    }

    #[tokio::test]
    async fn test_exponent_form_reads_leading_digits() {
        let repository = repository();

        let Json(user) = call(&repository, "1e3").await.unwrap();

        assert_eq!(user.name, "Alice");
        assert_eq!(repository.lookups(), vec![1]);
    }

    #[tokio::test]
    async fn test_oversized_id_is_not_found() {
        let repository = repository();

        let err = call(&repository, "12345678901234567890").await.unwrap_err();

        assert_eq!(err, ApiError::UserNotFound);
        assert!(repository.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_large_exponent_id_is_looked_up() {
        let repository = repository();

        let Json(user) = call(&repository, "1e30").await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(repository.lookups(), vec![1]);
    }
}
