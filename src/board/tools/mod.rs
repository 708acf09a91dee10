pub mod classify;
pub mod error;
pub mod flatten;
pub mod hierarchy;
pub mod io;
pub mod lookup;
pub mod model;
pub mod sync;

pub use error::{Result, ToolError};
