pub mod api;
pub mod card;
pub mod cli;
pub mod config;
pub mod filter;
pub mod logging;
pub mod print;
pub mod ui;
