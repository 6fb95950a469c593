//! User Interface Components
//!
//! This module contains reusable Dioxus components for the sign-up wizard:
//!
//! - **forms**: one component per wizard step plus the shared select and navigation controls
//! - **display**: step indicator, loading, error and flash banners
//! - **inputs**: text and password inputs with live feedback
//!
//! Step components read a `Signal<SignUpState>` and report edits through an
//! `EventHandler<SignUpAction>`; none of them mutate state directly.

pub mod display;
pub mod forms;
pub mod inputs;
