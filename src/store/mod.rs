pub mod navigation_store;

pub use navigation_store::*;
