use crate::models::responses::ReverseResponse;
use crate::utils::strings::reverse_string;
use axum::{extract::Path, response::Json};

/// Reverse a path segment
///
/// GET /reverse/{str}
pub async fn reverse_handler(Path(original): Path<String>) -> Json<ReverseResponse> {
    let reversed = reverse_string(&original);

    Json(ReverseResponse { original, reversed })
}
