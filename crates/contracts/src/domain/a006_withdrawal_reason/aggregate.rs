use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalReason {
    pub id: EntityId,
    pub name: String,
    /// REMOVING, ADDING or BOTH
    #[serde(default)]
    pub purpose: Option<String>,
}

impl WithdrawalReason {
    /// Reasons offered on the withdrawal form.
    pub fn is_for_removing(&self) -> bool {
        matches!(self.purpose.as_deref(), Some("REMOVING" | "BOTH") | None)
    }

    /// Reasons offered on the transfer form.
    pub fn is_for_adding(&self) -> bool {
        matches!(self.purpose.as_deref(), Some("ADDING" | "BOTH") | None)
    }
}

impl Resource for WithdrawalReason {
    fn resource_index() -> &'static str {
        "a006"
    }

    fn endpoint() -> &'static str {
        "withdrawal-reason"
    }

    fn element_name() -> &'static str {
        "Причина списания"
    }

    fn list_name() -> &'static str {
        "Причины списания"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_filters() {
        let reason = |purpose: Option<&str>| WithdrawalReason {
            id: 1,
            name: "Брак".into(),
            purpose: purpose.map(str::to_string),
        };
        assert!(reason(Some("REMOVING")).is_for_removing());
        assert!(!reason(Some("REMOVING")).is_for_adding());
        assert!(reason(Some("BOTH")).is_for_adding());
        assert!(reason(None).is_for_removing());
    }
}
