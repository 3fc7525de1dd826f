//! In-memory storage for the Amadeus bearer token

use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Tokens are treated as expired this long before their reported expiry
pub const SAFETY_MARGIN: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
struct CachedCredential {
    token: String,
    expires_at: Instant,
}

impl CachedCredential {
    fn is_usable_at(&self, now: Instant) -> bool {
        match now.checked_add(SAFETY_MARGIN) {
            Some(deadline) => deadline < self.expires_at,
            None => false,
        }
    }
}

/// Holds at most one access token together with its absolute expiry.
///
/// Every write replaces the whole entry, so readers observe either the previous
/// token or the new one, never a token paired with the wrong expiry.
#[derive(Debug, Default)]
pub struct CredentialCache {
    slot: RwLock<Option<CachedCredential>>,
}

impl CredentialCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token if it is still usable right now
    pub async fn read(&self) -> Option<String> {
        self.read_at(Instant::now()).await
    }

    /// Returns the cached token if it is usable at `now`
    pub async fn read_at(&self, now: Instant) -> Option<String> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|credential| credential.is_usable_at(now))
            .map(|credential| credential.token.clone())
    }

    /// Stores a token that stays valid for `ttl` from now
    pub async fn write(&self, token: String, ttl: Duration) {
        self.write_at(token, ttl, Instant::now()).await
    }

    /// Stores a token that stays valid for `ttl` from `now`
    pub async fn write_at(&self, token: String, ttl: Duration, now: Instant) {
        // Lifetimes that overflow the clock are treated as already expired
        let expires_at = now.checked_add(ttl).unwrap_or(now);
        let mut slot = self.slot.write().await;
        *slot = Some(CachedCredential { token, expires_at });
    }

    /// Pulls the expiry of the cached token back to the current instant
    #[cfg(test)]
    pub(crate) async fn expire(&self) {
        if let Some(credential) = self.slot.write().await.as_mut() {
            credential.expires_at = Instant::now();
        }
    }
}
