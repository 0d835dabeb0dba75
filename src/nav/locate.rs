use crate::model::tree::{Item, TreeModel};

/// The id of the first section (in render order) whose item subtree
/// contains `id`, or `None` if no section holds it. Section ids
/// themselves are not located — sections have no enclosing section.
pub fn section_for<'a>(tree: &'a TreeModel, id: &str) -> Option<&'a str> {
    tree.sections
        .iter()
        .find(|s| s.items.iter().any(|item| item.contains(id)))
        .map(|s| s.id.as_str())
}

/// The ordered chain of item ids above `id`, root-most first, excluding
/// `id` itself and the enclosing section. Empty when `id` is a section
/// id (sections are always visible) or is not in the tree.
pub fn ancestors_of(tree: &TreeModel, id: &str) -> Vec<String> {
    if tree.is_section_id(id) {
        return Vec::new();
    }
    let mut path = Vec::new();
    for section in &tree.sections {
        if collect_path(&section.items, id, &mut path) {
            return path;
        }
        path.clear();
    }
    Vec::new()
}

/// Depth-first walk accumulating the item-id path; true once `id` is
/// found, leaving the ancestors (not `id`) in `path`.
fn collect_path(items: &[Item], id: &str, path: &mut Vec<String>) -> bool {
    for item in items {
        if item.id == id {
            return true;
        }
        path.push(item.id.clone());
        if collect_path(&item.children, id, path) {
            return true;
        }
        path.pop();
    }
    false
}
