use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// Company branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Branch {
    fn resource_index() -> &'static str {
        "a008"
    }

    fn endpoint() -> &'static str {
        "branch"
    }

    fn element_name() -> &'static str {
        "Филиал"
    }

    fn list_name() -> &'static str {
        "Филиалы"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}
