use crate::io::backend::{NavEvent, NavRequest, RequestTag};
use crate::model::project::Project;
use crate::model::tree::TreeModel;

/// State container for projects and per-project navigation data.
///
/// Pure with respect to I/O: operations that need the backend return a
/// [`NavRequest`] for the caller to submit (the engine hands them to
/// the worker; tests apply completions directly in whatever order the
/// scenario needs). Completions arrive through [`apply_event`], which
/// performs each update atomically on the UI thread.
///
/// [`apply_event`]: NavigationStore::apply_event
#[derive(Debug, Default)]
pub struct NavigationStore {
    pub projects: Vec<Project>,
    pub active_project_id: Option<String>,
    pub navigation: Option<TreeModel>,
    pub loading_projects: bool,
    pub loading_navigation: bool,
    /// Tag of the newest outstanding navigation fetch.
    pending_navigation: Option<RequestTag>,
    next_seq: u64,
    /// Bumped every time `navigation` is replaced or cleared, so the
    /// active-item memo can be invalidated.
    generation: u64,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current navigation generation; changes whenever `navigation`
    /// changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin fetching the project list.
    pub fn fetch_projects(&mut self) -> NavRequest {
        self.loading_projects = true;
        NavRequest::Projects
    }

    /// Switch the active project. `None` clears navigation immediately;
    /// a project id starts a navigation fetch for it.
    pub fn set_active_project_id(&mut self, project_id: Option<String>) -> Option<NavRequest> {
        self.active_project_id = project_id.clone();
        match project_id {
            Some(id) => Some(self.fetch_navigation(id)),
            None => {
                self.navigation = None;
                self.pending_navigation = None;
                self.loading_navigation = false;
                self.generation += 1;
                None
            }
        }
    }

    /// Begin fetching the navigation tree for `project_id`, superseding
    /// any fetch still in flight.
    pub fn fetch_navigation(&mut self, project_id: String) -> NavRequest {
        self.next_seq += 1;
        let tag = RequestTag {
            seq: self.next_seq,
            project_id,
        };
        self.pending_navigation = Some(tag.clone());
        self.loading_navigation = true;
        NavRequest::Navigation { tag }
    }

    /// Re-fetch navigation for the current active project, if any.
    pub fn refresh_navigation(&mut self) -> Option<NavRequest> {
        let id = self.active_project_id.clone()?;
        Some(self.fetch_navigation(id))
    }

    /// Apply a backend completion. May produce a follow-up request
    /// (auto-activating the first project after the initial list load).
    pub fn apply_event(&mut self, event: NavEvent) -> Option<NavRequest> {
        match event {
            NavEvent::Projects(Ok(projects)) => {
                self.projects = projects;
                self.loading_projects = false;
                // Activate the first project if none is selected yet
                if self.active_project_id.is_none()
                    && let Some(first) = self.projects.first()
                    && let Some(id) = first.id.clone()
                {
                    return self.set_active_project_id(Some(id));
                }
                None
            }
            NavEvent::Projects(Err(err)) => {
                log::warn!("failed to fetch projects: {err}");
                self.projects = Vec::new();
                self.loading_projects = false;
                None
            }
            NavEvent::Navigation { tag, result } => {
                if !self.accepts(&tag) {
                    log::debug!(
                        "discarding stale navigation response for project {} (seq {})",
                        tag.project_id,
                        tag.seq
                    );
                    return None;
                }
                self.pending_navigation = None;
                self.loading_navigation = false;
                self.navigation = match result {
                    Ok(tree) => Some(tree),
                    Err(err) => {
                        log::warn!("failed to fetch navigation: {err}");
                        None
                    }
                };
                self.generation += 1;
                None
            }
        }
    }

    /// A navigation completion counts only if it answers the newest
    /// outstanding fetch and was issued for the currently active
    /// project.
    fn accepts(&self, tag: &RequestTag) -> bool {
        self.pending_navigation.as_ref() == Some(tag)
            && self.active_project_id.as_deref() == Some(tag.project_id.as_str())
    }
}
