pub mod list;
pub mod log;
pub mod task;

pub use list::*;
pub use log::*;
pub use task::*;
