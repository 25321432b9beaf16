//! General-purpose sample tools.

pub mod add;
pub mod echo;

pub use add::{AddParams, AddTool};
pub use echo::{EchoParams, EchoTool};
