use std::time::{Duration, Instant};
use once_cell::sync::Lazy;
use rand::RngExt;
use regex::Regex;
use sha1::{Digest, Sha1};

pub const PASSWORD_HASH_ITERATIONS: u32 = 4096;
pub const PASSWORD_SALT_BYTES: usize = 16;
pub const MAX_NODE_NAME_LENGTH: usize = 32;
pub const MAX_FIELD_NAME_LENGTH: usize = 64;
pub const MIN_API_KEY_LENGTH: usize = 32;
pub const API_KEY_ENTROPY_BYTES: usize = 32;

static NODE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{4,32}$").unwrap()
});

static FIELD_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]{1,64}$").unwrap()
});

pub fn generate_secure_api_key() -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..API_KEY_ENTROPY_BYTES).map(|_| rng.random()).collect();
    use base64::prelude::*;
    BASE64_URL_SAFE_NO_PAD.encode(&bytes)
}

pub fn validate_api_key_strength(api_key: &str) -> bool {
    if api_key.len() < MIN_API_KEY_LENGTH {
        return false;
    }
    let has_lower = api_key.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = api_key.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = api_key.chars().any(|c| c.is_ascii_digit());
    let has_special = api_key.chars().any(|c| !c.is_alphanumeric());
    let variety_count = [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&x| x)
        .count();
    variety_count >= 2
}

pub fn validate_node_name(name: &str) -> bool {
    NODE_NAME_RE.is_match(name)
}

/// Field names end up inside SQL expressions, so anything outside the strict
/// identifier alphabet is rejected long before the database layer.
pub fn validate_field_name(field: &str) -> bool {
    FIELD_NAME_RE.is_match(field)
}

/// Hashes a password into `salt$digest` with an iterated SHA-1 chain.
pub fn create_password(password: &str) -> String {
    let mut rng = rand::rng();
    let salt: Vec<u8> = (0..PASSWORD_SALT_BYTES).map(|_| rng.random()).collect();
    let digest = digest_password(&salt, password);
    format!("{}${}", hex::encode(salt), hex::encode(digest))
}

/// Verifies a password against a stored `salt$digest` value in constant
/// time with respect to the digest contents.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let digest = digest_password(&salt, password);
    constant_time_eq(&hex::encode(digest), digest_hex)
}

fn digest_password(salt: &[u8], password: &str) -> Vec<u8> {
    let mut chained: Vec<u8> = Vec::with_capacity(salt.len() + password.len());
    chained.extend_from_slice(salt);
    chained.extend_from_slice(password.as_bytes());
    for _ in 0..PASSWORD_HASH_ITERATIONS {
        let mut hasher = Sha1::new();
        hasher.update(&chained);
        chained = hasher.finalize().to_vec();
    }
    chained
}

pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Stretches an authentication attempt to at least `minimum`, measured from
/// `started`. Rejected logins for unknown accounts take as long as failed
/// password checks, so timing does not reveal account existence.
pub async fn imitate_encryption_delay(started: Instant, minimum: Duration) {
    let elapsed = started.elapsed();
    if elapsed < minimum {
        tokio::time::sleep(minimum - elapsed).await;
    }
}
