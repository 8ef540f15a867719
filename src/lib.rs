pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod gitlab;
pub mod menu;
pub mod render;
