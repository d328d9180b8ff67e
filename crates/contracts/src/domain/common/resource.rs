use super::EntityId;
use std::collections::HashMap;

/// Static metadata and identity of a REST resource.
pub trait Resource {
    /// Resource index in the system (e.g. "a003")
    fn resource_index() -> &'static str;

    /// Endpoint path under `/api/v1` (e.g. "source")
    fn endpoint() -> &'static str;

    /// Element name for UI (singular)
    fn element_name() -> &'static str;

    /// List name for UI (plural)
    fn list_name() -> &'static str;

    fn id(&self) -> EntityId;

    /// Text shown wherever the record is referenced by id.
    fn title(&self) -> String;
}

/// id → display name map used by table renderers.
pub type NameLookup = HashMap<EntityId, String>;

pub fn name_lookup<T: Resource>(items: &[T]) -> NameLookup {
    items.iter().map(|item| (item.id(), item.title())).collect()
}

/// Name for `id`, `#id` when the record is unknown, a dash when unset.
pub fn lookup_name(lookup: &NameLookup, id: Option<EntityId>) -> String {
    match id {
        Some(id) => lookup
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("#{}", id)),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_missing_ids() {
        let mut lookup = NameLookup::new();
        lookup.insert(1, "Склад 1".to_string());
        assert_eq!(lookup_name(&lookup, Some(1)), "Склад 1");
        assert_eq!(lookup_name(&lookup, Some(7)), "#7");
        assert_eq!(lookup_name(&lookup, None), "—");
    }
}
