pub mod config;
pub mod error;
pub mod fetch;
pub mod process;
pub mod refresh;
pub mod render;
pub mod server;
