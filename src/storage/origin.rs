//! Origin scoping for persistent storage using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Derive the storage origin for an API host.
///
/// Scheme and host are lowercased and a trailing slash is ignored, so the
/// same server always maps to the same slot. Different servers never share
/// stored values.
pub fn origin_key(api_host: &str) -> String {
    let normalized = api_host.trim().trim_end_matches('/').to_ascii_lowercase();

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_key_deterministic() {
        assert_eq!(
            origin_key("http://localhost:8888"),
            origin_key("http://localhost:8888")
        );
    }

    #[test]
    fn test_origin_key_normalizes_case_and_slash() {
        assert_eq!(
            origin_key("HTTP://LocalHost:8888/"),
            origin_key("http://localhost:8888")
        );
    }

    #[test]
    fn test_origin_key_differs_per_host() {
        assert_ne!(
            origin_key("http://localhost:8888"),
            origin_key("https://recruit.example.com")
        );
    }
}
