use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("UrlMissingScheme: {url}")]
    UrlMissingScheme { url: String },

    #[error("UrlMissingDomain: {url}")]
    UrlMissingDomain { url: String },
}

/// Extract the bare registrable domain from an absolute url: the scheme,
/// an optional `www.` prefix, and everything from the first path separator
/// on are stripped. Repeated slashes in the path collapse into the same
/// separator, so they never leak into the domain.
pub fn extract_domain(url: &str) -> Result<String, DomainError> {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| DomainError::UrlMissingScheme {
            url: url.to_string(),
        })?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let domain = host.split('/').next().unwrap_or_default();
    if domain.is_empty() {
        return Err(DomainError::UrlMissingDomain {
            url: url.to_string(),
        });
    }

    Ok(domain.to_string())
}

/// A domain is only accepted in canonical bare form: no scheme, no `www.`
/// prefix, no path. Anything url-shaped has to go through
/// [`extract_domain`] first.
pub fn validate_domain(domain: &str) -> bool {
    !domain.is_empty()
        && !domain.contains("://")
        && !domain.starts_with("www.")
        && !domain.contains('/')
}

/// Derived key for verification records. Records are indexed by the hash
/// rather than the raw domain string.
pub fn domain_hash(domain: &str) -> String {
    hex::encode(Sha256::digest(domain.as_bytes()))
}
