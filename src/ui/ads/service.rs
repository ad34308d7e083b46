// SPDX-License-Identifier: MPL-2.0
//! Ad service seam.
//!
//! The application owns one [`AdService`], initializes it once at startup,
//! and hands it to the placeholders by reference. Rendering a slot never
//! registers anything with the service.

use crate::error::{Error, Result};
use std::fmt::Debug;

/// Client of an advertisement provider.
pub trait AdService: Debug {
    /// Registers the publisher with the provider. Calling it again once the
    /// service is ready has no effect.
    fn init(&mut self) -> Result<()>;

    /// Whether slots may render.
    fn is_ready(&self) -> bool;

    /// Publisher identifier, if one is configured.
    fn client_id(&self) -> Option<&str>;
}

/// Offline stand-in that records initialization but serves no ads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderAdService {
    enabled: bool,
    client_id: Option<String>,
    initialized: bool,
    init_calls: usize,
}

impl PlaceholderAdService {
    #[must_use]
    pub fn new(enabled: bool, client_id: Option<String>) -> Self {
        Self {
            enabled,
            client_id: client_id.filter(|id| !id.trim().is_empty()),
            initialized: false,
            init_calls: 0,
        }
    }

    /// How many times `init` actually registered with the provider.
    #[must_use]
    pub fn init_calls(&self) -> usize {
        self.init_calls
    }
}

impl AdService for PlaceholderAdService {
    fn init(&mut self) -> Result<()> {
        if !self.enabled || self.initialized {
            return Ok(());
        }
        if self.client_id.is_none() {
            return Err(Error::Config(
                "ads are enabled but no client_id is configured".to_string(),
            ));
        }
        self.initialized = true;
        self.init_calls += 1;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.enabled && self.initialized
    }

    fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }
}
