use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table.
///
/// Rows are created and mutated by the store only; the service reads them.
#[derive(Clone, Debug, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned primary key
    pub id: i64,
    pub name: String,
    /// Unique when present
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_serializes_plain_fields() {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let user = User {
            id: 1,
            name: "Alice".to_string(),
            email: None,
            created_at: stamp,
            updated_at: stamp,
        };

        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Alice",
                "email": null,
                "created_at": "2024-03-01T12:00:00Z",
                "updated_at": "2024-03-01T12:00:00Z",
            })
        );
    }
}
