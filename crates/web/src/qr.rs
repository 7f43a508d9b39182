//! Signed QR payloads: `"{registration_id}|{hash}"` where the hash is the
//! first 16 hex characters of `sha256(registration_id + secret)`. Any decoder
//! that resolves a scanned string back to a registration id can replace this.

use sha2::{Digest, Sha256};
use uuid::Uuid;

const HASH_PREFIX_LEN: usize = 16;

fn verification_hash(registration_id: Uuid, secret: &str) -> String {
    let digest = Sha256::digest(format!("{registration_id}{secret}").as_bytes());
    hex::encode(digest)[..HASH_PREFIX_LEN].to_string()
}

/// Build the payload embedded in a rider's QR code.
pub fn issue(registration_id: Uuid, secret: &str) -> String {
    format!(
        "{registration_id}|{}",
        verification_hash(registration_id, secret)
    )
}

/// Resolve a scanned payload to a registration id. Malformed or tampered
/// payloads yield `None`.
pub fn resolve(qr_data: &str, secret: &str) -> Option<Uuid> {
    let (id_part, provided_hash) = qr_data.split_once('|')?;
    let registration_id = Uuid::parse_str(id_part).ok()?;

    if provided_hash == verification_hash(registration_id, secret) {
        Some(registration_id)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_payloads_resolve_back() {
        let id = Uuid::new_v4();
        let payload = issue(id, "secret");

        assert_eq!(resolve(&payload, "secret"), Some(id));
    }

    #[test]
    fn tampered_payloads_are_rejected() {
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let payload = issue(id, "secret");
        let (_, hash) = payload.split_once('|').unwrap();

        assert_eq!(resolve(&format!("{other}|{hash}"), "secret"), None);
        assert_eq!(resolve(&payload, "wrong-secret"), None);
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        assert_eq!(resolve("", "secret"), None);
        assert_eq!(resolve("no-separator", "secret"), None);
        assert_eq!(resolve("not-a-uuid|abcdef0123456789", "secret"), None);
    }
}
