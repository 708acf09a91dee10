use std::collections::HashMap;

use crate::board::tools::classify::classify_checklist;
use crate::board::tools::lookup::IdMap;
use crate::board::tools::model::{BoardData, CardNode, Hierarchy, Item, ListNode};

/// Result of reconstructing the tree: the (possibly partial) hierarchy plus
/// one report per unresolved reference encountered on the way.
#[derive(Debug)]
pub struct HierarchyBuild {
    pub hierarchy: Hierarchy,
    pub orphans: Vec<Orphan>,
}

/// A dangling foreign-key reference found during reconstruction. Orphans are
/// diagnostics, never failures: the affected card or checklist reference is
/// skipped and the build always completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Orphan {
    /// A card whose `idList` did not resolve; the card is dropped entirely.
    Card {
        card_id: String,
        card_name: String,
        list_id: String,
    },
    /// A card checklist reference that did not resolve; only that single
    /// reference is skipped.
    ChecklistRef {
        card_id: String,
        card_name: String,
        checklist_id: String,
    },
}

impl std::fmt::Display for Orphan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orphan::Card {
                card_id,
                card_name,
                list_id,
            } => write!(
                f,
                "Card#{card_id} cannot find parent List#{list_id} ({card_name})"
            ),
            Orphan::ChecklistRef {
                card_id,
                card_name,
                checklist_id,
            } => write!(
                f,
                "Card#{card_id} cannot find child Checklist#{checklist_id} ({card_name})"
            ),
        }
    }
}

/// Reconstructs the list → card → item tree from the denormalized records.
///
/// Lists appear in list-lookup insertion order. Cards are resolved in
/// card-lookup order and appended to their parent list as they resolve, so
/// card order within a list follows the card lookup rather than any
/// per-list grouping. Items keep the card's `idChecklists` order and, within
/// each checklist, the `checkItems` order.
pub fn build_hierarchy(board: &BoardData) -> HierarchyBuild {
    let lists = IdMap::from_records(&board.lists);
    let cards = IdMap::from_records(&board.cards);
    let checklists = IdMap::from_records(&board.checklists);

    let mut shells: Vec<ListNode> = Vec::with_capacity(lists.len());
    let mut shell_index: HashMap<&str, usize> = HashMap::with_capacity(lists.len());
    for (list_id, list) in lists.iter() {
        shell_index.insert(list_id, shells.len());
        shells.push(ListNode {
            name: list.name.clone(),
            cards: Vec::new(),
        });
    }

    let mut orphans = Vec::new();

    for (card_id, card) in cards.iter() {
        let Some(&slot) = shell_index.get(card.id_list.as_str()) else {
            orphans.push(Orphan::Card {
                card_id: card_id.to_string(),
                card_name: card.name.clone(),
                list_id: card.id_list.clone(),
            });
            continue;
        };

        let mut items = Vec::new();
        for checklist_id in &card.id_checklists {
            let Some(checklist) = checklists.get(checklist_id) else {
                orphans.push(Orphan::ChecklistRef {
                    card_id: card_id.to_string(),
                    card_name: card.name.clone(),
                    checklist_id: checklist_id.clone(),
                });
                continue;
            };
            let item_type = classify_checklist(&checklist.name);
            for check_item in &checklist.check_items {
                items.push(Item {
                    name: check_item.name.clone(),
                    item_type,
                });
            }
        }

        shells[slot].cards.push(CardNode {
            name: card.name.clone(),
            items,
        });
    }

    HierarchyBuild {
        hierarchy: Hierarchy { lists: shells },
        orphans,
    }
}
