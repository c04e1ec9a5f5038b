mod construct;
pub use construct::*;
mod error;
pub use error::*;
mod route;
pub use route::*;
mod spatial;
pub use spatial::*;
