pub mod api;
pub mod cli;
pub mod commands;
pub mod declaration;
pub mod logging;
