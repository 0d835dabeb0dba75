use serde::{Deserialize, Deserializer, Serialize};

/// A navigation node nested inside a section.
///
/// Items recurse into `children`, forming an unbounded-depth tree
/// (practically a handful of levels). The backend may send `children`
/// as missing or `null`; both deserialize to an empty vec so traversal
/// code never branches on presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_to_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Item>,
    #[serde(default, deserialize_with = "null_to_false")]
    pub show_hover_menu: bool,
    #[serde(default, deserialize_with = "null_to_false")]
    pub unread: bool,
    /// Human-facing identifier for work items (e.g. "M-0003"), display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequential_number: Option<String>,
}

impl Item {
    /// Create a leaf item with just an id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            label: label.into(),
            icon: None,
            children: Vec::new(),
            show_hover_menu: false,
            unread: false,
            sequential_number: None,
        }
    }

    /// Whether this item contains `id` in its subtree (including itself).
    pub fn contains(&self, id: &str) -> bool {
        self.id == id || self.children.iter().any(|c| c.contains(id))
    }
}

/// A top-level grouping node. Sections are always visible; insertion
/// order is render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "null_to_false")]
    pub spacing_before: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Section {
            id: id.into(),
            label: label.into(),
            icon: None,
            items: Vec::new(),
            spacing_before: false,
        }
    }
}

/// The full navigation hierarchy for one project.
///
/// Created wholesale when navigation data is fetched and replaced
/// wholesale on the next fetch. Every id (section or item, at any
/// depth) is globally unique within one snapshot; expansion state and
/// view-handle registries key by id alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeModel {
    pub sections: Vec<Section>,
}

impl TreeModel {
    /// Whether `id` names a top-level section.
    pub fn is_section_id(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    /// Find an item by id anywhere in the tree (document order).
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        for section in &self.sections {
            if let Some(item) = find_in(&section.items, id) {
                return Some(item);
            }
        }
        None
    }

    /// Whether `id` exists anywhere in the tree, as a section or an item.
    pub fn contains_id(&self, id: &str) -> bool {
        self.is_section_id(id) || self.find_item(id).is_some()
    }
}

fn find_in<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    for item in items {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = find_in(&item.children, id) {
            return Some(found);
        }
    }
    None
}

/// Deserialize a possibly-missing or `null` list as empty.
fn null_to_empty<'de, D>(de: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(de)?.unwrap_or_default())
}

/// Deserialize a possibly-missing or `null` flag as false.
fn null_to_false<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(de)?.unwrap_or(false))
}
