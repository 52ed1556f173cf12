use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// Tokens expire this long after issuance.
const TOKEN_TTL_HOURS: i64 = 24;

struct TokenEntry {
    user_id: u64,
    issued_at: DateTime<Utc>,
}

/// Opaque bearer tokens mapped to user ids.
///
/// Expired entries are dropped lazily on their next lookup.
// TODO: periodic sweep so tokens that are never presented again get freed.
pub struct TokenStore {
    tokens: DashMap<String, TokenEntry>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
        }
    }

    /// Issue a fresh token for a user. Every login gets its own token;
    /// earlier tokens stay valid until they expire.
    pub fn issue(&self, user_id: u64) -> String {
        self.issue_with_timestamp(user_id, Utc::now())
    }

    pub(crate) fn issue_with_timestamp(&self, user_id: u64, issued_at: DateTime<Utc>) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens
            .insert(token.clone(), TokenEntry { user_id, issued_at });
        token
    }

    /// Resolve a token to its user id, or `None` for unknown and expired
    /// tokens.
    pub fn resolve(&self, token: &str) -> Option<u64> {
        let user_id = {
            let entry = self.tokens.get(token)?;
            if Utc::now() - entry.issued_at > Duration::hours(TOKEN_TTL_HOURS) {
                None
            } else {
                Some(entry.user_id)
            }
        };

        if user_id.is_none() {
            self.tokens.remove(token);
        }
        user_id
    }

    pub fn count(&self) -> usize {
        self.tokens.len()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
