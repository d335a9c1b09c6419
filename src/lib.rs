pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod feedback;
pub mod gateway;
pub mod model;
pub mod rules;
pub mod ui;
pub mod view_models;

pub use app::MirrorApp;
