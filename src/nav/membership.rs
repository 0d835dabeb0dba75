use crate::model::tree::{Item, TreeModel};

/// Section id holding the document tree.
pub const DOCUMENTS_SECTION_ID: &str = "documents";
/// Prefix of every per-milestone work-item section id.
pub const WORK_ITEMS_SECTION_PREFIX: &str = "work-items-section-";
/// Prefix of synthetic work-item ids produced by reverse route mapping.
pub const WORK_ITEM_PREFIX: &str = "work-item-";

/// Logical classification used by the route decision tables for ids not
/// covered by the static mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Documents,
    WorkItems,
}

/// Whether `id` belongs to the given group.
///
/// Documents: depth-first search of the section literally named
/// `documents`. Work items: depth-first search of every section whose
/// id starts with `work-items-section-`, plus a fast path for ids that
/// carry the `work-item-` prefix (synthesized by reverse route mapping,
/// no tree needed). No loaded tree means `false` for everything.
pub fn is_in_group(tree: Option<&TreeModel>, id: &str, group: Group) -> bool {
    if group == Group::WorkItems && id.starts_with(WORK_ITEM_PREFIX) {
        return true;
    }
    let Some(tree) = tree else {
        return false;
    };
    match group {
        Group::Documents => tree
            .sections
            .iter()
            .filter(|s| s.id == DOCUMENTS_SECTION_ID)
            .any(|s| contains_at_any_depth(&s.items, id)),
        Group::WorkItems => tree
            .sections
            .iter()
            .filter(|s| s.id.starts_with(WORK_ITEMS_SECTION_PREFIX))
            .any(|s| contains_at_any_depth(&s.items, id)),
    }
}

fn contains_at_any_depth(items: &[Item], id: &str) -> bool {
    items.iter().any(|item| item.contains(id))
}
