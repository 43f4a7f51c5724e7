//! Terminal presentation layer: stdin commands in, rendered view out.
mod app;
mod effects;
mod layout;
mod logging;
mod persistence;
mod settings;
mod terminal;
mod viewport;

pub use app::run_app;
