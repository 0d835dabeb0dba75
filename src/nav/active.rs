use crate::model::tree::TreeModel;
use crate::nav::routes::id_for_route;

/// Derives the active tree-node id from the current route.
///
/// Purely a memoized wrapper over the reverse route mapping, keyed on
/// the path string. The memo must be invalidated when the tree model is
/// replaced, since resolution consults the tree; the engine does that
/// whenever the store's navigation generation changes. Never touches
/// expansion state — that reaction belongs to the expansion manager.
#[derive(Debug, Default)]
pub struct ActiveItemTracker {
    cached: Option<(String, Option<String>)>,
}

impl ActiveItemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the active id for `path`, reusing the last result when
    /// the path is unchanged.
    pub fn resolve(&mut self, tree: Option<&TreeModel>, path: &str) -> Option<String> {
        if let Some((cached_path, cached_id)) = &self.cached
            && cached_path == path
        {
            return cached_id.clone();
        }
        let id = id_for_route(tree, path);
        self.cached = Some((path.to_string(), id.clone()));
        id
    }

    /// Drop the memo (tree model replaced).
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
