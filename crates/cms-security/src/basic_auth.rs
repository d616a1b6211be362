//! HTTP Basic authentication against one configured account

use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BasicAuthError {
    #[error("Missing credentials")]
    Missing,
    #[error("Malformed authorization header")]
    Malformed,
    #[error("Invalid credentials")]
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parses the value of an `Authorization` header (`Basic <base64>`).
    pub fn parse(header: &str) -> Result<Self, BasicAuthError> {
        let (scheme, encoded) = header
            .trim()
            .split_once(' ')
            .ok_or(BasicAuthError::Malformed)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(BasicAuthError::Malformed);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| BasicAuthError::Malformed)?;
        let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::Malformed)?;

        // The password may itself contain ':'
        let (username, password) = decoded.split_once(':').ok_or(BasicAuthError::Malformed)?;
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn to_header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// Holds digests of the expected username and password and compares
/// candidates digest to digest, so the secrets' lengths do not leak.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username_digest: [u8; 32],
    password_digest: [u8; 32],
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator").finish_non_exhaustive()
    }
}

impl BasicAuthenticator {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username_digest: digest(username),
            password_digest: digest(password),
        }
    }

    pub fn verify(&self, credentials: &BasicCredentials) -> bool {
        let user_ok = digests_match(&digest(&credentials.username), &self.username_digest);
        let pass_ok = digests_match(&digest(&credentials.password), &self.password_digest);
        user_ok & pass_ok
    }

    /// Full check of an optional `Authorization` header value.
    pub fn authenticate(&self, header: Option<&str>) -> Result<BasicCredentials, BasicAuthError> {
        let header = header.ok_or(BasicAuthError::Missing)?;
        let credentials = BasicCredentials::parse(header)?;
        if self.verify(&credentials) {
            Ok(credentials)
        } else {
            Err(BasicAuthError::Invalid)
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn digests_match(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(user: &str, pass: &str) -> String {
        BasicCredentials {
            username: user.to_string(),
            password: pass.to_string(),
        }
        .to_header_value()
    }

    #[test]
    fn test_parse_roundtrip_with_colon_in_password() {
        let parsed = BasicCredentials::parse(&header("admin", "p:ss")).unwrap();
        assert_eq!(parsed.username, "admin");
        assert_eq!(parsed.password, "p:ss");
    }

    #[test]
    fn test_parse_known_value() {
        // "admin:secret"
        let parsed = BasicCredentials::parse("Basic YWRtaW46c2VjcmV0").unwrap();
        assert_eq!(parsed.password, "secret");
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            BasicCredentials::parse("Bearer abc"),
            Err(BasicAuthError::Malformed)
        );
        assert_eq!(
            BasicCredentials::parse("Basic !!!"),
            Err(BasicAuthError::Malformed)
        );
    }

    #[test]
    fn test_authenticate() {
        let auth = BasicAuthenticator::new("admin", "secret");

        assert!(auth.authenticate(Some(&header("admin", "secret"))).is_ok());
        assert_eq!(
            auth.authenticate(Some(&header("admin", "wrong"))),
            Err(BasicAuthError::Invalid)
        );
        assert_eq!(
            auth.authenticate(Some(&header("root", "secret"))),
            Err(BasicAuthError::Invalid)
        );
        assert_eq!(auth.authenticate(None), Err(BasicAuthError::Missing));
    }
}
