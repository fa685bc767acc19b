pub mod analyzer;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod fetcher;
pub mod logging;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod utils;
