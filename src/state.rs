//! Shared application state for request handlers.

use std::sync::Arc;

use sysinfo::System;

use crate::config::{AppConfig, FALLBACK_HOSTNAME, SERVICE_NAME, SERVICE_VERSION};

/// Process-wide identity, captured once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub hostname: String,
    pub service: &'static str,
    pub version: &'static str,
}

impl Identity {
    /// Identity for the given hostname with the fixed service name and version.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
        }
    }

    /// Resolve the hostname: config override, then the OS, then `HOSTNAME`.
    pub fn from_config(config: &AppConfig) -> Self {
        let hostname = config
            .service
            .hostname
            .clone()
            .or_else(System::host_name)
            .filter(|h| !h.is_empty())
            .or_else(|| std::env::var("HOSTNAME").ok().filter(|h| !h.is_empty()))
            .unwrap_or_else(|| FALLBACK_HOSTNAME.to_string());
        Self::new(hostname)
    }
}

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<Identity>,
}

impl AppState {
    /// Creates a new application state from the resolved identity.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}
