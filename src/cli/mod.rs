pub mod commands;
pub mod handlers;
pub mod ui;

pub use commands::{Cli, Commands};
pub use ui::Ui;
