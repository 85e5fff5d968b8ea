use ring::hmac;

const KEY_PREFIX: &str = "email_";

/// Derive the cache key for `address`: `email_` followed by the
/// lowercase hex HMAC-SHA256 of the address under the installation
/// secret.
///
/// Keying by HMAC keeps plaintext addresses out of the cache and makes
/// keys unguessable without the secret. Same (address, secret) always
/// yields the same key; changing the secret invalidates every key.
pub fn derive(address: &str, secret: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    let tag = hmac::sign(&key, address.as_bytes());
    let digest: String = tag
        .as_ref()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect();
    format!("{KEY_PREFIX}{digest}")
}
