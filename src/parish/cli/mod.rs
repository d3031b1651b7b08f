mod commands;
mod prompt;
mod render;
mod setup;

pub use commands::run;
