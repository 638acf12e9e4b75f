use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

/// Account role, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Standard,
}

/// User record as persisted in the backing file. Unlike API responses
/// (see `PublicUser`), this keeps `password_hash` serializable because the
/// store itself round-trips through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: String,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

/// Wall-clock timestamp in the store's `YYYY-MM-DD HH:MM:SS` format.
pub(crate) fn now_stamp() -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&fmt)
        .expect("formatting current time")
}

/// Timestamp-derived record id, e.g. `USR20260823141503`.
pub(crate) fn new_user_id() -> String {
    let fmt = format_description!("[year][month][day][hour][minute][second]");
    let stamp = OffsetDateTime::now_utc()
        .format(&fmt)
        .expect("formatting current time");
    format!("USR{stamp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Standard).unwrap(),
            "\"standard\""
        );
    }

    #[test]
    fn user_id_has_timestamp_shape() {
        let id = new_user_id();
        assert!(id.starts_with("USR"));
        assert_eq!(id.len(), "USR".len() + 14);
        assert!(id["USR".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn record_tolerates_missing_last_login() {
        let json = r#"{
            "id": "USR20250101120000",
            "name": "Ana",
            "email": "ana@x.com",
            "password_hash": "00",
            "role": "standard",
            "created_at": "2025-01-01 12:00:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.last_login_at, None);
        assert_eq!(user.role, Role::Standard);
    }
}
