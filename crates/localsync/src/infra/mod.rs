pub mod logging;
pub mod seed;
