// SPDX-License-Identifier: MPL-2.0
//! Page enumeration and the static path table used for navigation.

/// Pages the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Jobs,
    Blog,
    About,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Jobs, Page::Blog, Page::About];

    /// Maps a site path to a page. Unknown paths land on the home page.
    ///
    /// Trailing slashes, query strings and fragments are ignored, so
    /// `/jobs/?q=rust#top` resolves to [`Page::Jobs`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::try_from_path(path).unwrap_or_default()
    }

    /// Like [`Page::from_path`], but reports unknown paths.
    #[must_use]
    pub fn try_from_path(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/');

        match path.to_ascii_lowercase().as_str() {
            "" | "/" | "/home" | "/index.html" => Some(Page::Home),
            "/jobs" => Some(Page::Jobs),
            "/blog" => Some(Page::Blog),
            "/about" => Some(Page::About),
            _ => None,
        }
    }

    /// Canonical path for the page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Jobs => "/jobs",
            Page::Blog => "/blog",
            Page::About => "/about",
        }
    }

    /// Translation key of the page's navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Page::Home => "nav-home",
            Page::Jobs => "nav-jobs",
            Page::Blog => "nav-blog",
            Page::About => "nav-about",
        }
    }
}

/// A navigation entry: a translated label pointing at a site path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label_key: &'static str,
    pub path: &'static str,
}

impl NavLink {
    #[must_use]
    pub const fn new(label_key: &'static str, path: &'static str) -> Self {
        Self { label_key, path }
    }

    /// Page this link resolves to.
    #[must_use]
    pub fn page(&self) -> Page {
        Page::from_path(self.path)
    }
}

/// Links shown in the header, in display order.
pub const HEADER_LINKS: [NavLink; 4] = [
    NavLink::new("nav-home", "/"),
    NavLink::new("nav-jobs", "/jobs"),
    NavLink::new("nav-blog", "/blog"),
    NavLink::new("nav-about", "/about"),
];
