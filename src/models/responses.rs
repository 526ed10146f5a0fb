use serde::{Deserialize, Serialize};

/// Body of every user-visible failure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReverseResponse {
    pub original: String,
    pub reversed: String,
}
