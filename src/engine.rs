use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::io::backend::{NavEvent, NavigationBackend};
use crate::io::worker::NavWorker;
use crate::model::config::NavConfig;
use crate::model::project::Project;
use crate::model::tree::TreeModel;
use crate::nav::active::ActiveItemTracker;
use crate::nav::expand::ExpansionState;
use crate::nav::routes::route_for_id;
use crate::store::navigation_store::NavigationStore;
use crate::view::annotate::{IconTable, ViewSection, annotate};
use crate::view::scroll::ScrollTimer;

/// The routing collaborator: performs the actual navigation when the
/// user picks a tree node.
pub trait RouteSink {
    fn go(&mut self, route: &str);
}

/// Things the host should react to after a `poll`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSignal {
    /// The project list was replaced.
    ProjectsChanged,
    /// The navigation tree was replaced (or cleared).
    NavigationChanged,
    /// Scroll the node with this id into view (best effort; the node
    /// may not be mounted).
    ScrollIntoView(String),
}

/// Ties the store, tracker, expansion state, and scroll timer into the
/// single-threaded engine the rendering layer talks to.
///
/// All mutation happens on the UI thread: backend completions are
/// drained in `poll`, route changes arrive via `handle_route_change`,
/// and everything else is a direct user action.
pub struct NavEngine {
    store: NavigationStore,
    worker: NavWorker,
    expansion: ExpansionState,
    tracker: ActiveItemTracker,
    scroll: ScrollTimer,
    active_id: Option<String>,
    current_path: Option<String>,
    seen_generation: u64,
    panel_open: bool,
}

impl NavEngine {
    pub fn new(backend: Arc<dyn NavigationBackend>, config: &NavConfig) -> Self {
        NavEngine {
            store: NavigationStore::new(),
            worker: NavWorker::start(backend),
            expansion: ExpansionState::new(&config.ui),
            tracker: ActiveItemTracker::new(),
            scroll: ScrollTimer::new(Duration::from_millis(config.ui.scroll_delay_ms)),
            active_id: None,
            current_path: None,
            seen_generation: 0,
            panel_open: true,
        }
    }

    // --- backend-facing actions ---

    /// Kick off the initial project-list fetch.
    pub fn fetch_projects(&mut self) {
        let request = self.store.fetch_projects();
        self.worker.submit(request);
    }

    /// Switch the active project (`None` clears navigation).
    pub fn activate_project(&mut self, project_id: Option<String>) {
        if let Some(request) = self.store.set_active_project_id(project_id) {
            self.worker.submit(request);
        }
    }

    /// Re-fetch navigation for the current active project.
    pub fn refresh_navigation(&mut self) {
        if let Some(request) = self.store.refresh_navigation() {
            self.worker.submit(request);
        }
    }

    // --- user actions ---

    pub fn toggle_section(&mut self, id: &str) {
        self.expansion.toggle_section(id);
    }

    pub fn toggle_item(&mut self, id: &str) {
        self.expansion.toggle_item(id);
    }

    /// Resolve `id` to its route and navigate there through the routing
    /// collaborator. Returns the route, or `None` for nodes that are
    /// not independently navigable.
    pub fn navigate(&mut self, id: &str, sink: &mut dyn RouteSink) -> Option<String> {
        let route = route_for_id(self.store.navigation.as_ref(), id)?;
        sink.go(&route);
        Some(route)
    }

    /// The host's panel opened or closed. Closing cancels any pending
    /// scroll so it cannot act on hidden layout.
    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
        if !open {
            self.scroll.cancel();
        }
    }

    // --- reactions ---

    /// The current route changed. Derives the active id, opens the path
    /// to it, and schedules the deferred scroll.
    pub fn handle_route_change(&mut self, path: &str, now: Instant) {
        self.current_path = Some(path.to_string());
        self.recompute_active(now);
    }

    /// Drain worker completions and the scroll timer. Call once per
    /// tick of the host's event loop.
    pub fn poll(&mut self, now: Instant) -> Vec<EngineSignal> {
        let mut signals = Vec::new();

        for event in self.worker.poll() {
            let projects = matches!(event, NavEvent::Projects(_));
            if let Some(follow_up) = self.store.apply_event(event) {
                self.worker.submit(follow_up);
            }
            if projects {
                signals.push(EngineSignal::ProjectsChanged);
            }
        }

        if self.store.generation() != self.seen_generation {
            self.seen_generation = self.store.generation();
            // The memo may hold an answer from the replaced tree
            self.tracker.invalidate();
            self.recompute_active(now);
            signals.push(EngineSignal::NavigationChanged);
        }

        if let Some(target) = self.scroll.poll(now) {
            signals.push(EngineSignal::ScrollIntoView(target));
        }

        signals
    }

    /// Re-derive the active id from the current route, then run the
    /// auto-expand reaction and (re-)arm the scroll timer if the id
    /// changed.
    fn recompute_active(&mut self, now: Instant) {
        let Some(path) = self.current_path.clone() else {
            return;
        };
        let active = self.tracker.resolve(self.store.navigation.as_ref(), &path);
        let changed = active != self.active_id;
        self.active_id = active;

        if let Some(id) = self.active_id.clone() {
            if let Some(tree) = self.store.navigation.as_ref() {
                self.expansion.reveal(tree, &id);
            }
            if changed && self.panel_open {
                self.scroll.arm(id, now);
            }
        } else if changed {
            self.scroll.cancel();
        }
    }

    // --- read-only surface for the renderer ---

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn projects(&self) -> &[Project] {
        &self.store.projects
    }

    pub fn active_project_id(&self) -> Option<&str> {
        self.store.active_project_id.as_deref()
    }

    pub fn navigation(&self) -> Option<&TreeModel> {
        self.store.navigation.as_ref()
    }

    pub fn is_loading_projects(&self) -> bool {
        self.store.loading_projects
    }

    pub fn is_loading_navigation(&self) -> bool {
        self.store.loading_navigation
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// The annotated tree the renderer draws, empty while no navigation
    /// data is loaded.
    pub fn view<I: Clone>(&self, icons: &IconTable<I>) -> Vec<ViewSection<I>> {
        match self.store.navigation.as_ref() {
            Some(tree) => annotate(tree, &self.expansion, self.active_id.as_deref(), icons),
            None => Vec::new(),
        }
    }
}
