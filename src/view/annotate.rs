use std::collections::HashMap;

use crate::model::tree::{Item, Section, TreeModel};
use crate::nav::expand::ExpansionState;

/// Icon-name → renderable-icon lookup, injected by the rendering layer.
///
/// `I` is whatever the host's UI framework renders (a glyph, a widget
/// handle, an enum); the engine never looks inside it.
#[derive(Debug, Clone, Default)]
pub struct IconTable<I> {
    icons: HashMap<String, I>,
}

impl<I: Clone> IconTable<I> {
    pub fn new() -> Self {
        IconTable {
            icons: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, icon: I) {
        self.icons.insert(name.into(), icon);
    }

    pub fn resolve(&self, name: &str) -> Option<I> {
        self.icons.get(name).cloned()
    }
}

/// A section annotated for rendering.
#[derive(Debug, Clone)]
pub struct ViewSection<I> {
    pub id: String,
    pub label: String,
    pub icon: Option<I>,
    pub spacing_before: bool,
    pub is_expanded: bool,
    pub is_active: bool,
    pub items: Vec<ViewItem<I>>,
}

/// An item annotated for rendering. Children are always present; the
/// renderer decides whether to descend based on `is_expanded`.
#[derive(Debug, Clone)]
pub struct ViewItem<I> {
    pub id: String,
    pub label: String,
    pub icon: Option<I>,
    pub show_hover_menu: bool,
    pub unread: bool,
    pub sequential_number: Option<String>,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_active: bool,
    pub children: Vec<ViewItem<I>>,
}

/// Project the tree model into its read-only annotated form.
pub fn annotate<I: Clone>(
    tree: &TreeModel,
    expansion: &ExpansionState,
    active_id: Option<&str>,
    icons: &IconTable<I>,
) -> Vec<ViewSection<I>> {
    tree.sections
        .iter()
        .map(|section| annotate_section(section, expansion, active_id, icons))
        .collect()
}

fn annotate_section<I: Clone>(
    section: &Section,
    expansion: &ExpansionState,
    active_id: Option<&str>,
    icons: &IconTable<I>,
) -> ViewSection<I> {
    ViewSection {
        id: section.id.clone(),
        label: section.label.clone(),
        icon: section.icon.as_deref().and_then(|name| icons.resolve(name)),
        spacing_before: section.spacing_before,
        is_expanded: expansion.is_section_expanded(&section.id),
        is_active: active_id == Some(section.id.as_str()),
        items: section
            .items
            .iter()
            .map(|item| annotate_item(item, expansion, active_id, icons))
            .collect(),
    }
}

fn annotate_item<I: Clone>(
    item: &Item,
    expansion: &ExpansionState,
    active_id: Option<&str>,
    icons: &IconTable<I>,
) -> ViewItem<I> {
    ViewItem {
        id: item.id.clone(),
        label: item.label.clone(),
        icon: item.icon.as_deref().and_then(|name| icons.resolve(name)),
        show_hover_menu: item.show_hover_menu,
        unread: item.unread,
        sequential_number: item.sequential_number.clone(),
        has_children: !item.children.is_empty(),
        is_expanded: expansion.is_item_expanded(&item.id),
        is_active: active_id == Some(item.id.as_str()),
        children: item
            .children
            .iter()
            .map(|child| annotate_item(child, expansion, active_id, icons))
            .collect(),
    }
}
