// SPDX-License-Identifier: MPL-2.0
//! Advertisement placeholders.
//!
//! Every slot on the site goes through one component, [`placeholder::view`],
//! with the same contract: an [`AdSlot`] (identifier plus [`AdFormat`]) and
//! the application's [`AdService`]. No ads are actually served.

pub mod format;
pub mod placeholder;
pub mod service;

pub use format::{AdDimensions, AdFormat};
pub use service::{AdService, PlaceholderAdService};

use crate::config::AdsConfig;
use crate::error::Result;

/// A named place on a page where an ad may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdSlot {
    pub slot_id: &'static str,
    pub format: AdFormat,
}

impl AdSlot {
    #[must_use]
    pub const fn new(slot_id: &'static str, format: AdFormat) -> Self {
        Self { slot_id, format }
    }
}

/// Slots used by the pages.
pub mod slots {
    use super::{AdFormat, AdSlot};

    pub const HOME_BANNER: AdSlot = AdSlot::new("home-banner", AdFormat::Horizontal);
    pub const JOBS_SIDEBAR: AdSlot = AdSlot::new("jobs-sidebar", AdFormat::Rectangle);
    pub const BLOG_IN_FEED: AdSlot = AdSlot::new("blog-in-feed", AdFormat::Fluid);
}

/// Builds the application's ad service from `[ads]` settings and runs its
/// one-time initialization.
///
/// The service is returned even when initialization fails. It then stays not
/// ready and every slot renders empty; the error says why.
pub fn initialize(config: &AdsConfig) -> (Box<dyn AdService>, Result<()>) {
    let mut service = PlaceholderAdService::new(config.enabled, config.client_id.clone());
    let outcome = service.init();
    (Box::new(service), outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_with_defaults_is_not_ready() {
        let (service, outcome) = initialize(&AdsConfig::default());
        assert!(outcome.is_ok());
        assert!(!service.is_ready());
    }

    #[test]
    fn initialize_enabled_with_client_is_ready() {
        let (service, outcome) = initialize(&AdsConfig {
            enabled: true,
            client_id: Some("ca-pub-42".to_string()),
        });
        assert!(outcome.is_ok());
        assert!(service.is_ready());
        assert_eq!(service.client_id(), Some("ca-pub-42"));
    }

    #[test]
    fn initialize_enabled_without_client_is_not_ready() {
        let (service, outcome) = initialize(&AdsConfig {
            enabled: true,
            client_id: None,
        });
        assert!(matches!(outcome, Err(crate::error::Error::Config(_))));
        assert!(!service.is_ready());
    }

    #[test]
    fn page_slots_have_unique_ids() {
        let ids = [
            slots::HOME_BANNER.slot_id,
            slots::JOBS_SIDEBAR.slot_id,
            slots::BLOG_IN_FEED.slot_id,
        ];
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
        }
    }
}
