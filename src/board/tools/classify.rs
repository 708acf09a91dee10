use crate::board::tools::model::ItemType;

/// Classification applied when a checklist name is not in the table.
pub const DEFAULT_ITEM_TYPE: ItemType = ItemType::Task;

/// Known checklist display names and the classification they carry. Lookup
/// is exact and case-sensitive; no trimming or normalization is applied.
const CHECKLIST_TYPES: &[(&str, ItemType)] = &[
    ("Tasks", ItemType::Task),
    ("Features", ItemType::Story),
    ("User stories", ItemType::Story),
    ("Use cases", ItemType::Story),
    ("Libraries", ItemType::Research),
    ("Tools", ItemType::Research),
];

/// Maps a checklist's display name to the item type applied to every check
/// item inside it, falling back to [`DEFAULT_ITEM_TYPE`] for unknown names.
pub fn classify_checklist(name: &str) -> ItemType {
    CHECKLIST_TYPES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, item_type)| *item_type)
        .unwrap_or(DEFAULT_ITEM_TYPE)
}
