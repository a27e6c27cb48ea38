//! Credential validation for protected routes.
//!
//! The middleware in [`crate::api::middleware`] hands the raw
//! `Authorization` header to a [`CredentialValidator`]. The shipped
//! implementation compares it against a single configured bearer token.

use subtle::ConstantTimeEq;

/// Decides whether a request's credentials grant access.
pub trait CredentialValidator: Send + Sync + std::fmt::Debug {
    /// Returns `true` if the `Authorization` header value is acceptable.
    /// `None` means the header was absent or not valid UTF-8.
    fn validate(&self, authorization: Option<&str>) -> bool;
}

/// Accepts exactly `Bearer <token>` for one configured token.
pub struct StaticBearerToken {
    expected: String,
}

impl StaticBearerToken {
    /// Creates a validator for the given token (without the `Bearer ` prefix).
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            expected: format!("Bearer {}", token.as_ref()),
        }
    }
}

impl std::fmt::Debug for StaticBearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticBearerToken").finish_non_exhaustive()
    }
}

impl CredentialValidator for StaticBearerToken {
    fn validate(&self, authorization: Option<&str>) -> bool {
        authorization.is_some_and(|value| {
            bool::from(value.as_bytes().ct_eq(self.expected.as_bytes()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_header() {
        let validator = StaticBearerToken::new("s3cret");
        assert!(validator.validate(Some("Bearer s3cret")));
    }

    #[test]
    fn rejects_everything_else() {
        let validator = StaticBearerToken::new("s3cret");
        assert!(!validator.validate(None));
        assert!(!validator.validate(Some("")));
        assert!(!validator.validate(Some("s3cret")));
        assert!(!validator.validate(Some("bearer s3cret")));
        assert!(!validator.validate(Some("Bearer s3cret ")));
        assert!(!validator.validate(Some("Bearer s3cre")));
        assert!(!validator.validate(Some("Basic czNjcmV0")));
    }

    #[test]
    fn debug_hides_token() {
        let validator = StaticBearerToken::new("s3cret");
        assert!(!format!("{validator:?}").contains("s3cret"));
    }
}
