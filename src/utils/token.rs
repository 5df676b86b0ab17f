use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

pub fn encrypt(token: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(token.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(token: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(token.as_bytes(), &parsed).is_ok())
}

/// Hashes a password, returning the PHC string and the salt it embeds.
pub fn hash_password(password: &str) -> Result<(String, String), argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok((hash.to_string(), salt.as_str().to_string()))
}

/// Bearer credential handed to clients: base64 of `<session_id>.<secret>`.
pub fn construct_token(session_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{session_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    if secret.is_empty() {
        return None;
    }
    Some((Uuid::parse_str(id).ok()?, secret.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_parts_round_trip() {
        let id = new_id();
        let secret = new_token();
        let token = construct_token(&id, &secret);
        assert_eq!(extract_token_parts(&token), Some((id, secret)));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(extract_token_parts("not base64 at all!"), None);
        assert_eq!(extract_token_parts(&BASE64_STANDARD.encode("no-separator")), None);
        assert_eq!(extract_token_parts(&BASE64_STANDARD.encode("not-a-uuid.secret")), None);
        let id = new_id();
        assert_eq!(extract_token_parts(&BASE64_STANDARD.encode(format!("{id}."))), None);
    }

    #[test]
    fn secrets_are_random_and_prefixed() {
        let a = new_token();
        let b = new_token();
        assert!(a.starts_with("tok_"));
        assert_ne!(a, b);
    }

    #[test]
    fn password_hash_verifies_and_exposes_salt() {
        let (hash, salt) = hash_password("hunter2").unwrap();
        assert!(hash.contains(&salt));
        assert!(verify("hunter2", &hash).unwrap());
        assert!(!verify("hunter3", &hash).unwrap());
    }

    #[test]
    fn encrypted_secret_verifies() {
        let secret = new_token();
        let hash = encrypt(&secret).unwrap();
        assert!(verify(&secret, &hash).unwrap());
        assert!(!verify("tok_other", &hash).unwrap());
    }
}
