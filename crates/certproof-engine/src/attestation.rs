//! DNS TXT attestation of an issuer key.
//!
//! An issuer is attested when any TXT record at its `location` contains its
//! `key`. Lookup failures are not distinguished from a missing record.

use certproof_dns::TxtResolver;
use tracing::debug;

/// Strip one pair of surrounding double quotes, if both are present.
#[must_use]
pub fn strip_quotes(answer: &str) -> &str {
    answer
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(answer)
}

/// Does a single TXT answer contain `key`?
#[must_use]
pub fn txt_attests(answer: &str, key: &str) -> bool {
    strip_quotes(answer).contains(key)
}

/// Query `location` and check whether any TXT answer attests `key`.
///
/// Returns `false` on any lookup error or empty answer set.
pub async fn attest_key<R>(resolver: &R, location: &str, key: &str) -> bool
where
    R: TxtResolver + ?Sized,
{
    match resolver.lookup_txt(location).await {
        Ok(answers) => {
            let attested = answers.iter().any(|a| txt_attests(a, key));
            debug!(location, answers = answers.len(), attested, "TXT attestation");
            attested
        }
        Err(e) => {
            debug!(location, error = %e, "TXT lookup failed; issuer not attested");
            false
        }
    }
}
