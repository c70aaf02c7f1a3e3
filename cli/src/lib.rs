//! Headless front end over the board engine and the score ledger.

pub use command::*;
pub use config::*;
pub use render::*;
pub use session::*;

mod command;
mod config;
mod render;
mod session;
