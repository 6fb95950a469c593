//! Infrastructure Services
//!
//! This module provides the collaborators the sign-up wizard talks to:
//!
//! - **reference_data**: faculty and department lookups (static or remote)
//! - **auth**: account creation and the client-side session handoff
//! - **config**: build-time configuration
//!
//! The services are designed to be WASM-first, using async traits without
//! Send/Sync bounds for compatibility.

pub mod auth;
pub mod config;
pub mod reference_data;

use std::rc::Rc;

use auth::{AuthService, HttpAuthService, SessionStore};
use config::{AppConfig, ReferenceDataConfig};
use reference_data::{HttpReferenceData, ReferenceDataSource, StaticReferenceData};

use crate::registration::avatar::AvatarCatalog;

/// Everything the sign-up page needs from the outside world
#[derive(Clone)]
pub struct SignUpServices {
    pub reference_data: Rc<dyn ReferenceDataSource>,
    pub auth: Rc<dyn AuthService>,
    pub avatars: AvatarCatalog,
    pub sessions: SessionStore,
}

impl SignUpServices {
    pub fn from_config(config: &AppConfig) -> Self {
        let reference_data: Rc<dyn ReferenceDataSource> = match &config.reference_data {
            ReferenceDataConfig::Static => Rc::new(StaticReferenceData::new()),
            ReferenceDataConfig::Remote { base_url } => Rc::new(HttpReferenceData::new(base_url)),
        };

        Self {
            reference_data,
            auth: Rc::new(HttpAuthService::new(&config.auth.base_url)),
            avatars: AvatarCatalog::new(&config.avatar.base_path),
            sessions: SessionStore::default(),
        }
    }
}
