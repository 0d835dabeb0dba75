//! Waypoint — navigation tree synchronization engine for a project
//! tracking client.
//!
//! The engine owns the logic the rest of such a client does not need:
//! the navigation tree model, the bidirectional mapping between tree
//! nodes and routes, derivation of the active node from the current
//! route, and expand/collapse state that opens the path to the active
//! node without ever silently collapsing user choices. Rendering,
//! forms, and the backend RPC layer stay outside; the engine talks to
//! them through the [`io::NavigationBackend`] and [`engine::RouteSink`]
//! traits and the annotated view in [`view`].

pub mod engine;
pub mod io;
pub mod model;
pub mod nav;
pub mod store;
pub mod view;
