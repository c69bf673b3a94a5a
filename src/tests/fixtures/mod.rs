pub mod commands;
pub mod entries;
pub mod state;
