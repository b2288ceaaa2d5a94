pub mod utils;
pub mod pipeline;
pub mod config;
pub mod modules;
