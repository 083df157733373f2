use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Self-contained: the subject, a snapshot of the subject's role at issuance
/// time, and the issued-at/expiry pair. Validity is a pure function of the
/// signature and `exp`; there is no server-side token state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Role name at issuance time
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a freshly authenticated user.
    ///
    /// # Arguments
    /// * `subject` - Username the token asserts
    /// * `role` - The user's role at issuance time
    /// * `ttl_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with sub, role, iat, and exp set
    pub fn for_user(subject: impl Into<String>, role: impl Into<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            sub: subject.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user_sets_ttl() {
        let claims = Claims::for_user("alice", "standard", 1);

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "standard");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "alice".to_string(),
            role: "standard".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
