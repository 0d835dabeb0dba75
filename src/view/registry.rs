use indexmap::IndexMap;

/// Maps tree-node ids to opaque view handles.
///
/// Owned by the rendering layer: entries are added when a node's widget
/// mounts and removed when it unmounts (replacing the original's
/// mutable DOM-ref maps). The engine itself only ever names nodes by
/// id. Insertion order is preserved so hosts can walk handles in mount
/// order.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry<H> {
    entries: IndexMap<String, H>,
}

impl<H> ViewRegistry<H> {
    pub fn new() -> Self {
        ViewRegistry {
            entries: IndexMap::new(),
        }
    }

    /// Register a handle for `id`, returning the displaced handle if
    /// the node remounted.
    pub fn mount(&mut self, id: impl Into<String>, handle: H) -> Option<H> {
        self.entries.insert(id.into(), handle)
    }

    /// Remove and return the handle for `id`.
    pub fn unmount(&mut self, id: &str) -> Option<H> {
        self.entries.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&H> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every handle whose id fails the predicate. Hosts call this
    /// after a wholesale tree replacement to shed handles for nodes
    /// that no longer exist.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|id, _| keep(id));
    }
}
