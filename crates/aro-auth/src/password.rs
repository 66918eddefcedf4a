//! Argon2id password hashing for member credentials.
//!
//! Hashes are stored as PHC strings, so the parameters below only bind new
//! hashes; older hashes verify under whatever parameters they recorded.
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::Version;
use argon2::password_hash::SaltString;

/// Memory cost in KiB.
const MEMORY_KIB: u32 = 19 * 1024;
/// Passes over memory.
const ITERATIONS: u32 = 2;
const LANES: u32 = 1;
const SALT_BYTES: usize = 16;

fn hasher() -> anyhow::Result<Argon2<'static>> {
    let params = Params::new(MEMORY_KIB, ITERATIONS, LANES, None)
        .map_err(|e| anyhow::anyhow!("argon2 params: {}", e))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn salt() -> anyhow::Result<SaltString> {
    use rand::Rng;
    let mut bytes = [0u8; SALT_BYTES];
    rand::rng().fill(&mut bytes);
    SaltString::encode_b64(&bytes).map_err(|e| anyhow::anyhow!("salt: {}", e))
}

/// PHC-encoded hash of `password` under a fresh salt.
pub fn hash(password: &str) -> anyhow::Result<String> {
    let salt = salt()?;
    hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| anyhow::anyhow!("hash password: {}", e))
}

/// Any unparseable stored hash counts as a mismatch.
pub fn verify(password: &str, hashword: &str) -> bool {
    let Ok(stored) = PasswordHash::new(hashword) else {
        return false;
    };
    hasher()
        .map(|argon| argon.verify_password(password.as_bytes(), &stored).is_ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_original() {
        let hashword = hash("first-aid-kit").unwrap();
        assert!(verify("first-aid-kit", &hashword));
    }

    #[test]
    fn rejects_other() {
        let hashword = hash("first-aid-kit").unwrap();
        assert!(!verify("first-aid-kits", &hashword));
    }

    #[test]
    fn records_named_params() {
        let hashword = hash("pulse-oximeter").unwrap();
        assert!(hashword.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
    }

    #[test]
    fn salts_differ() {
        assert!(hash("same").unwrap() != hash("same").unwrap());
    }

    #[test]
    fn garbage_hash_fails_closed() {
        assert!(!verify("anything", "not-a-phc-string"));
    }
}
