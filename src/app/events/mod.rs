//! Intent- und Command-Events der Anwendung.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
