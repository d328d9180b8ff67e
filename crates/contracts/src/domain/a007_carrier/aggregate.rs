use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub id: EntityId,
    pub company_name: String,
    #[serde(default)]
    pub registration_address: Option<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
}

impl Resource for Carrier {
    fn resource_index() -> &'static str {
        "a007"
    }

    fn endpoint() -> &'static str {
        "carrier"
    }

    fn element_name() -> &'static str {
        "Перевозчик"
    }

    fn list_name() -> &'static str {
        "Перевозчики"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.company_name.clone()
    }
}
