mod handlers;
mod parser;

pub use handlers::handle_command;
pub use parser::{Command, CommandResult, USAGE, parse_command};
