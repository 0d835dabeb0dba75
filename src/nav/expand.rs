use std::collections::HashSet;

use crate::model::config::UiConfig;
use crate::model::tree::TreeModel;
use crate::nav::locate::{ancestors_of, section_for};

/// The sets of expanded sections and items.
///
/// Lives independently of the tree model: it survives wholesale tree
/// replacement. The automatic reveal reaction only ever adds entries;
/// explicit user toggles are the only operations allowed to remove
/// them.
#[derive(Debug, Clone)]
pub struct ExpansionState {
    expanded_sections: HashSet<String>,
    expanded_items: HashSet<String>,
}

impl ExpansionState {
    /// Seed from the configured first-run defaults so the tree is not
    /// fully collapsed before any user interaction.
    pub fn new(ui: &UiConfig) -> Self {
        ExpansionState {
            expanded_sections: ui.default_expanded_sections.iter().cloned().collect(),
            expanded_items: ui.default_expanded_items.iter().cloned().collect(),
        }
    }

    pub fn is_section_expanded(&self, id: &str) -> bool {
        self.expanded_sections.contains(id)
    }

    pub fn is_item_expanded(&self, id: &str) -> bool {
        self.expanded_items.contains(id)
    }

    /// User-initiated: add if absent, remove if present.
    pub fn toggle_section(&mut self, id: &str) {
        if !self.expanded_sections.remove(id) {
            self.expanded_sections.insert(id.to_string());
        }
    }

    /// User-initiated: add if absent, remove if present.
    pub fn toggle_item(&mut self, id: &str) {
        if !self.expanded_items.remove(id) {
            self.expanded_items.insert(id.to_string());
        }
    }

    /// Auto-expand reaction: open the path to the active node.
    ///
    /// Idempotent and monotonic — only ever inserts, so a node the user
    /// explicitly collapsed is never hidden again by this reaction
    /// (beyond the forced-open ancestors of the active node itself).
    /// Section ids need no opening; sections are always visible.
    pub fn reveal(&mut self, tree: &TreeModel, active_id: &str) {
        if tree.is_section_id(active_id) {
            return;
        }
        if let Some(section_id) = section_for(tree, active_id) {
            self.expanded_sections.insert(section_id.to_string());
        }
        for ancestor in ancestors_of(tree, active_id) {
            self.expanded_items.insert(ancestor);
        }
    }

    pub fn expanded_section_count(&self) -> usize {
        self.expanded_sections.len()
    }

    pub fn expanded_item_count(&self) -> usize {
        self.expanded_items.len()
    }
}
