use serde::{Deserialize, Serialize};

/// Top-level shape of an exported board dataset. Only the fields consumed by
/// the transform are modelled; the export format carries many more, all of
/// which are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardData {
    /// Top-level groupings ("Theme" in the report).
    pub lists: Vec<ListRecord>,
    /// Second-level groupings ("Epic" in the report), each referencing one
    /// list and zero or more checklists by id.
    pub cards: Vec<CardRecord>,
    /// Named groups of work items attached to cards.
    pub checklists: Vec<ChecklistRecord>,
}

/// A list as it appears in the denormalized export.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRecord {
    pub id: String,
    pub name: String,
}

/// A card as it appears in the denormalized export. `id_list` must resolve
/// to a list and `id_checklists` entries to checklists; unresolved
/// references are reported as orphans during hierarchy reconstruction.
#[derive(Debug, Clone, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "idList")]
    pub id_list: String,
    #[serde(rename = "idChecklists", default)]
    pub id_checklists: Vec<String>,
}

/// A checklist as it appears in the denormalized export.
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "checkItems", default)]
    pub check_items: Vec<CheckItemRecord>,
}

/// A single entry of a checklist. Its identity is not needed downstream,
/// only the name survives into the normalized tree.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckItemRecord {
    pub name: String,
}

/// Root of the normalized tree: lists in their original insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hierarchy {
    pub lists: Vec<ListNode>,
}

/// A list in the normalized tree. The original id is dropped; cards appear
/// in card-lookup iteration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListNode {
    pub name: String,
    pub cards: Vec<CardNode>,
}

/// A card in the normalized tree with its flattened checklist membership.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardNode {
    pub name: String,
    pub items: Vec<Item>,
}

/// A leaf unit of work: a check item name plus the classification derived
/// from the name of the checklist it belonged to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// Semantic classification of an item, derived from its checklist's display
/// name. Serializes to the lowercase tag used in the report artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Task,
    Story,
    Research,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemType::Task => write!(f, "task"),
            ItemType::Story => write!(f, "story"),
            ItemType::Research => write!(f, "research"),
        }
    }
}
