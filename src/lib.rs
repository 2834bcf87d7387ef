pub mod app;
pub mod blanks;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scoring;
pub mod session;
pub mod timer;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
pub use config::{QuizConfig, QuizSource};
pub use error::LoadError;
