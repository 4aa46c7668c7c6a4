pub mod pool;
pub mod recipients;

pub use pool::*;
pub use recipients::*;
