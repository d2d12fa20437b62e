pub mod args;
pub mod commands;
pub mod handlers;
pub mod output;

pub use args::Cli;
pub use commands::run;
