pub mod backend;
pub mod worker;

pub use backend::*;
pub use worker::*;
