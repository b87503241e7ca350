mod actions;
mod error;
pub mod menu;
mod session;
mod terminal;

#[cfg(test)]
mod testing;

pub use error::{ConsoleError, ConsoleResult};
pub use session::Session;
pub use terminal::Terminal;
