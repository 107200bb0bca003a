pub mod args;
pub mod config;
pub mod db;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
pub mod wordlist;
