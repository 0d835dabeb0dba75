pub mod config;
pub mod project;
pub mod tree;

pub use config::*;
pub use project::*;
pub use tree::*;
