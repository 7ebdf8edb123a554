pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod navigation;
pub mod render;
pub mod tmdb;
