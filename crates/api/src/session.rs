//! Login session and deep links
//!
//! The bearer token lives in client storage under `champa_token`. A link
//! carrying `?token=` hands a fresh token over; the parameter is stripped
//! from the link once captured.

use champa_core::{SharedStorage, ShopResult, TOKEN_KEY};
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Base used to parse app-relative links such as `/products?filter=jersey`
const LINK_BASE: &str = "champa://app/";

// ============================================================================
// Session
// ============================================================================

/// Owner of the bearer token
///
/// Storage is the only copy of the token, so every clone of the session
/// sees a login or a purge immediately.
#[derive(Clone)]
pub struct Session {
    storage: SharedStorage,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl Session {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Create a shared handle
    pub fn shared(storage: SharedStorage) -> Arc<Self> {
        Arc::new(Self::new(storage))
    }

    /// Storage backing this session
    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Store a token
    pub fn set_token(&self, token: &str) -> ShopResult<()> {
        self.storage.set(TOKEN_KEY, token)?;
        info!("Session token stored");
        Ok(())
    }

    /// Forget the token; a failed write is logged
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            warn!("Could not remove stored token: {e}");
        } else {
            debug!("Session token cleared");
        }
    }

    /// Take a `?token=` from `link`, store it, and return the link without it
    pub fn capture_from_link(&self, link: &str) -> ShopResult<String> {
        let parsed = DeepLink::parse(link);
        if let Some(token) = parsed.token.as_deref() {
            self.set_token(token)?;
        }
        Ok(parsed.stripped)
    }
}

// ============================================================================
// Deep links
// ============================================================================

/// The query conventions understood by the app
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLink {
    /// Path without leading slash (`products`, `login`, ...)
    pub path: String,
    /// `?filter=` category tab
    pub filter: Option<String>,
    /// `?search=` catalog pre-filter
    pub search: Option<String>,
    /// `?token=` one-time token hand-over
    pub token: Option<String>,
    /// `?next=` post-login target
    pub next: Option<String>,
    /// The link with the token parameter removed
    pub stripped: String,
}

impl DeepLink {
    /// Parse an absolute URL or an app-relative link
    ///
    /// Unparseable input yields an empty link pointing nowhere.
    pub fn parse(link: &str) -> Self {
        let url = Url::parse(link).or_else(|_| {
            Url::parse(LINK_BASE).and_then(|base| base.join(link.trim_start_matches('/')))
        });
        let Ok(url) = url else {
            warn!("Ignoring malformed link {link:?}");
            return Self::default();
        };

        let mut out = Self {
            path: url.path().trim_matches('/').to_string(),
            ..Self::default()
        };
        let mut kept: Vec<(String, String)> = Vec::new();
        for (key, value) in url.query_pairs() {
            let value = value.into_owned();
            match key.as_ref() {
                "token" => {
                    out.token = Some(value).filter(|v| !v.is_empty());
                    continue;
                }
                "filter" => out.filter = Some(value.clone()),
                "search" => out.search = Some(value.clone()),
                "next" => out.next = Some(value.clone()),
                _ => {}
            }
            kept.push((key.into_owned(), value));
        }

        let mut stripped = url.clone();
        if kept.is_empty() {
            stripped.set_query(None);
        } else {
            stripped.query_pairs_mut().clear().extend_pairs(kept);
        }
        out.stripped = if link.contains("://") {
            stripped.to_string()
        } else {
            relative(&stripped)
        };
        out
    }

    /// Link to the login page that comes back to `next` afterwards
    pub fn login_for(next: &str) -> String {
        let mut url = match Url::parse(LINK_BASE).and_then(|b| b.join("login")) {
            Ok(url) => url,
            Err(_) => return "/login".to_string(),
        };
        url.query_pairs_mut().append_pair("next", next);
        relative(&url)
    }
}

fn relative(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
