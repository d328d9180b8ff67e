//! Session data left in `localStorage` by the login page.

use crate::domain::common::EntityId;

pub mod keys {
    pub const SELECTED_FILTERS: &str = "selectedFilters";
    pub const SEARCH_TERM: &str = "searchTerm";
    pub const CURRENT_CLIENT_TYPE_ID: &str = "currentClientTypeId";
    pub const AUTHORITIES: &str = "authorities";
    pub const FULL_NAME: &str = "fullName";
    pub const USER_ID: &str = "userId";
}

/// Grants every `*_VIEW` right.
pub const ADMINISTRATION: &str = "ADMINISTRATION";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<EntityId>,
    pub full_name: Option<String>,
    /// `None` when the login page stored no authorities.
    pub authorities: Option<Vec<String>>,
}

impl Session {
    /// Read the session through a storage getter.
    pub fn load(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            user_id: get(keys::USER_ID).and_then(|v| v.trim().parse().ok()),
            full_name: get(keys::FULL_NAME).filter(|v| !v.trim().is_empty()),
            authorities: get(keys::AUTHORITIES).map(|raw| parse_authorities(&raw)),
        }
    }

    /// Whether a menu item guarded by `authority` is shown.
    ///
    /// Without stored authorities every item is shown; the backend still
    /// rejects forbidden requests.
    pub fn can(&self, authority: &str) -> bool {
        match &self.authorities {
            None => true,
            Some(list) => list.iter().any(|a| a == authority || a == ADMINISTRATION),
        }
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Пользователь")
    }
}

/// JSON array (`["CLIENT_VIEW"]`) or comma-separated list.
fn parse_authorities(raw: &str) -> Vec<String> {
    if let Ok(list) = serde_json::from_str::<Vec<String>>(raw) {
        return list;
    }
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn storage(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn loads_session_and_checks_authorities() {
        let store = storage(&[
            ("userId", "7"),
            ("fullName", "Иван Петров"),
            ("authorities", r#"["CLIENT_VIEW","WAREHOUSE_VIEW"]"#),
        ]);
        let session = Session::load(|k| store.get(k).cloned());
        assert_eq!(session.user_id, Some(7));
        assert_eq!(session.display_name(), "Иван Петров");
        assert!(session.can("CLIENT_VIEW"));
        assert!(!session.can("FINANCE_VIEW"));
    }

    #[test]
    fn administration_and_missing_authorities() {
        let store = storage(&[("authorities", "ADMINISTRATION, CLIENT_VIEW")]);
        let admin = Session::load(|k| store.get(k).cloned());
        assert!(admin.can("FINANCE_VIEW"));

        let anonymous = Session::load(|_| None);
        assert!(anonymous.can("FINANCE_VIEW"));
        assert_eq!(anonymous.display_name(), "Пользователь");
    }
}
