pub mod active;
pub mod expand;
pub mod locate;
pub mod membership;
pub mod routes;

pub use active::*;
pub use expand::*;
pub use locate::*;
pub use membership::*;
pub use routes::*;
