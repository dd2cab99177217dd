pub mod logging;
pub mod path;
