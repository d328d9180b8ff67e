use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// PURCHASE, SALE or BOTH
    #[serde(default)]
    pub usage: Option<String>,
}

impl Resource for Product {
    fn resource_index() -> &'static str {
        "a004"
    }

    fn endpoint() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Товары"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}
