pub mod pool_config;
pub mod reserves;

pub use pool_config::*;
pub use reserves::*;
