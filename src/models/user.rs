use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An account as stored in the `User` collection. `password` is carried as
/// submitted; this layer performs no hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    pub const COLLECTION: &'static str = "User";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Suspended,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_enums_lowercase() {
        let user = User {
            id: None,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Editor,
            status: Status::Suspended,
            join_date: Some("2025-11-02".to_string()),
            password: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "editor");
        assert_eq!(value["status"], "suspended");
        assert_eq!(value["joinDate"], "2025-11-02");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_user_without_join_date_deserializes() {
        // The admin UI creates users without a joinDate field.
        let value = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "role": "admin",
            "status": "active"
        });

        let user: User = serde_json::from_value(value).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.status, Status::Active);
        assert!(user.join_date.is_none());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(serde_json::from_value::<Role>(json!("owner")).is_err());
    }
}
