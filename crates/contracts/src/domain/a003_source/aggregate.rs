use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// Where a client came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: EntityId,
    pub name: String,
}

impl Resource for Source {
    fn resource_index() -> &'static str {
        "a003"
    }

    fn endpoint() -> &'static str {
        "source"
    }

    fn element_name() -> &'static str {
        "Источник"
    }

    fn list_name() -> &'static str {
        "Источники"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}
