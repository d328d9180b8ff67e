use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

pub const ROLES: [(&str, &str); 4] = [
    ("ADMIN", "Администратор"),
    ("MANAGER", "Менеджер"),
    ("STOREKEEPER", "Кладовщик"),
    ("OPERATOR", "Оператор"),
];

pub const STATUSES: [(&str, &str); 2] = [("ACTIVE", "Активен"), ("BLOCKED", "Заблокирован")];

fn label_of(table: &[(&'static str, &'static str)], code: &str) -> String {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub login: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub branch_id: Option<EntityId>,
}

impl User {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.login.clone())
    }

    pub fn role_label(&self) -> String {
        label_of(&ROLES, &self.role)
    }

    pub fn status_label(&self) -> String {
        label_of(&STATUSES, &self.status)
    }

    pub fn is_active(&self) -> bool {
        self.status == "ACTIVE"
    }
}

impl Resource for User {
    fn resource_index() -> &'static str {
        "sys_users"
    }

    fn endpoint() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "Пользователь"
    }

    fn list_name() -> &'static str {
        "Пользователи"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.display_name()
    }
}

/// Body of POST `/users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub login: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: String,
    pub branch_id: Option<EntityId>,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.login.trim().is_empty() {
            return Err("Логин не может быть пустым".into());
        }
        if self.password.len() < 6 {
            return Err("Пароль должен содержать не менее 6 символов".into());
        }
        if self.role.is_empty() {
            return Err("Выберите роль".into());
        }
        Ok(())
    }
}

/// Body of PUT `/users/{id}`. An empty password keeps the current one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub full_name: Option<String>,
    pub role: String,
    pub status: String,
    pub branch_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fall_back_to_code() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"login":"ivan","fullName":"","role":"ADMIN","status":"GHOST"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "ivan");
        assert_eq!(user.role_label(), "Администратор");
        assert_eq!(user.status_label(), "GHOST");
        assert!(!user.is_active());
    }

    #[test]
    fn update_without_password_omits_it() {
        let dto = UpdateUserDto {
            role: "MANAGER".into(),
            status: "ACTIVE".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("password").is_none());
    }
}
