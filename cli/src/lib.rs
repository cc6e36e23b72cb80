pub mod api;
pub mod config;
pub mod output;
pub mod token_file;
