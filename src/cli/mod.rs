pub mod args;
pub mod menu;
pub mod prompt;
pub mod session;

pub use args::Args;
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use session::ShoppingSession;
