//! This crate contains the Pineappl sign-up wizard and its shared UI components.

pub mod app;
pub use app::SignUpPage;

pub mod components;
pub mod registration;
pub mod services;
pub mod utils;
