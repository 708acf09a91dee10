use serde::Serialize;

use crate::board::tools::model::{Hierarchy, ItemType};

/// One line of the flat report: theme label, epic label, item name, item
/// type, and the manual estimate placeholder (always 0). A tuple struct so
/// that serde emits the 5-element array form used by the table artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row(pub String, pub String, pub String, pub ItemType, pub u32);

/// Controls how repeated parent labels are detected for suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Compare the current list and card names against the previous row's
    /// raw names, each independently. This is the historical behaviour and
    /// carries its known quirk: two adjacent sibling cards that happen to
    /// share a name are treated as one, blanking the second card label.
    #[default]
    Legacy,
    /// Compare by originating tree node, so a label is only suppressed when
    /// the row really continues the same list or card.
    Strict,
}

/// Walks the hierarchy depth-first and produces one row per item, in
/// document order: lists outer, cards middle, items inner. The list and
/// card labels of a row are blanked when they repeat the previous row's,
/// producing the stepped grouping of hierarchical reports; the first row
/// always shows both labels in full.
pub fn flatten_hierarchy(hierarchy: &Hierarchy, mode: LabelMode) -> Vec<Row> {
    let mut rows = Vec::new();
    // (list index, card index) of the previously emitted row.
    let mut previous: Option<(usize, usize)> = None;

    for (list_idx, list) in hierarchy.lists.iter().enumerate() {
        for (card_idx, card) in list.cards.iter().enumerate() {
            for item in &card.items {
                let (repeat_list, repeat_card) = match previous {
                    None => (false, false),
                    Some((prev_list, prev_card)) => match mode {
                        LabelMode::Legacy => {
                            let prev = &hierarchy.lists[prev_list];
                            (
                                prev.name == list.name,
                                prev.cards[prev_card].name == card.name,
                            )
                        }
                        LabelMode::Strict => (
                            prev_list == list_idx,
                            (prev_list, prev_card) == (list_idx, card_idx),
                        ),
                    },
                };

                let list_label = if repeat_list {
                    String::new()
                } else {
                    list.name.clone()
                };
                let card_label = if repeat_card {
                    String::new()
                } else {
                    card.name.clone()
                };

                rows.push(Row(
                    list_label,
                    card_label,
                    item.name.clone(),
                    item.item_type,
                    0,
                ));
                previous = Some((list_idx, card_idx));
            }
        }
    }

    rows
}
