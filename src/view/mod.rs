pub mod annotate;
pub mod registry;
pub mod scroll;

pub use annotate::*;
pub use registry::*;
pub use scroll::*;
