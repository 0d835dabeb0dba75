use crate::model::project::Project;
use crate::model::tree::TreeModel;

/// Error type for backend calls
#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
    #[error("backend command {command} failed: {message}")]
    Command { command: String, message: String },
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// The opaque RPC surface the engine consumes.
///
/// Implementations run on the worker thread; the UI thread only ever
/// sees completions as [`NavEvent`]s. Tests supply fakes instead of a
/// real RPC channel.
pub trait NavigationBackend: Send + Sync {
    fn fetch_projects(&self) -> Result<Vec<Project>, BackendError>;
    fn fetch_navigation(&self, project_id: &str) -> Result<TreeModel, BackendError>;
}

/// Identifies which fetch a navigation completion answers.
///
/// Every navigation fetch gets a fresh monotonically increasing `seq`
/// plus the project id it was issued for; the store discards any
/// completion whose tag is no longer the newest outstanding one for the
/// current active project. This closes the last-write-wins race on
/// rapid project switching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    pub seq: u64,
    pub project_id: String,
}

/// A request issued by the store, carried to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    Projects,
    Navigation { tag: RequestTag },
}

/// A completion delivered back to the UI thread.
#[derive(Debug, Clone)]
pub enum NavEvent {
    Projects(Result<Vec<Project>, BackendError>),
    Navigation {
        tag: RequestTag,
        result: Result<TreeModel, BackendError>,
    },
}
