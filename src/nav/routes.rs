use crate::model::tree::{Item, TreeModel};
use crate::nav::membership::{
    Group, WORK_ITEM_PREFIX, WORK_ITEMS_SECTION_PREFIX, is_in_group,
};

/// Static id → route pairs, tried before any prefix or membership rule.
const STATIC_ROUTES: &[(&str, &str)] = &[
    ("overview", "/"),
    ("doc-tree", "/document/new/edit"),
    ("documents", "/document/new/edit"),
    ("work_items", "/work-items/list"),
    ("conversations", "/conversations"),
    ("direct-messages", "/conversations/dms"),
];

/// Static route → id pairs for the reverse mapping.
const STATIC_IDS: &[(&str, &str)] = &[
    ("/", "overview"),
    ("/conversations", "conversations"),
    ("/conversations/dms", "direct-messages"),
    ("/work-items/list", "work_items"),
    ("/document/new/edit", "doc-tree"),
];

/// Forward mapping: the route a tree node navigates to, or `None` for
/// nodes that are not independently navigable (pure organizational
/// folders). Ordered decision table, first match wins.
pub fn route_for_id(tree: Option<&TreeModel>, id: &str) -> Option<String> {
    if let Some((_, route)) = STATIC_ROUTES.iter().find(|(key, _)| *key == id) {
        return Some((*route).to_string());
    }
    if id.starts_with(WORK_ITEMS_SECTION_PREFIX) {
        return Some("/work-items/list".to_string());
    }
    if id.starts_with("conv-") {
        return Some(format!("/conversations/{id}"));
    }
    if is_in_group(tree, id, Group::Documents) {
        return Some(format!("/document/{id}"));
    }
    if is_in_group(tree, id, Group::WorkItems) {
        return Some(format!("/work-items/{id}"));
    }
    None
}

/// Reverse mapping: the tree node id a route highlights, or `None` for
/// unrecognized routes. Deliberately more permissive than the forward
/// mapping: a deep-linked work item absent from the loaded tree still
/// resolves to a synthesized `work-item-{x}` id so the UI can mark it
/// active.
pub fn id_for_route(tree: Option<&TreeModel>, path: &str) -> Option<String> {
    let path = strip_query_and_fragment(path);

    if let Some((_, id)) = STATIC_IDS.iter().find(|(route, _)| *route == path) {
        return Some((*id).to_string());
    }

    if let Some(x) = single_segment(path, "/work-items/") {
        if let Some(found) = find_work_item_node(tree, x) {
            return Some(found);
        }
        // Not in the currently loaded tree (stale/partial navigation
        // data) — synthesize so the route is still highlightable.
        if x.starts_with(WORK_ITEM_PREFIX) {
            return Some(x.to_string());
        }
        return Some(format!("{WORK_ITEM_PREFIX}{x}"));
    }

    if let Some(x) = single_segment(path, "/document/") {
        if is_in_group(tree, x, Group::Documents) {
            return Some(x.to_string());
        }
        return None;
    }

    if let Some(x) = single_segment(path, "/conversations/") {
        return Some(format!("conv-{x}"));
    }

    None
}

/// Drop everything from the first `?` or `#` on.
fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Match `{prefix}{x}` where `x` is a single non-empty path segment.
fn single_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}

/// Search work-item sections for a node whose id is `x` or
/// `work-item-{x}`, returning the node's actual id.
fn find_work_item_node(tree: Option<&TreeModel>, x: &str) -> Option<String> {
    let tree = tree?;
    let prefixed = format!("{WORK_ITEM_PREFIX}{x}");
    for section in &tree.sections {
        if !section.id.starts_with(WORK_ITEMS_SECTION_PREFIX) {
            continue;
        }
        if let Some(item) = find_either(&section.items, x, &prefixed) {
            return Some(item.id.clone());
        }
    }
    None
}

fn find_either<'a>(items: &'a [Item], a: &str, b: &str) -> Option<&'a Item> {
    for item in items {
        if item.id == a || item.id == b {
            return Some(item);
        }
        if let Some(found) = find_either(&item.children, a, b) {
            return Some(found);
        }
    }
    None
}
