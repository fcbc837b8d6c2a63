//! Password hashing
//!
//! Passwords are stored as argon2id PHC strings (``$argon2id$v=19$...``).
//! The string contains the salt and the parameters.
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;

lazy_static! {
    static ref ARGON2: Argon2<'static> = Argon2::default();
}

/// Hash ``password`` with a freshly generated salt
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);
    Ok(ARGON2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Returns ``Ok(false)`` if the password does not match. Errors only on a malformed ``hash``
pub fn verify(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let hash = PasswordHash::new(hash)?;
    match ARGON2.verify_password(password.as_bytes(), &hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
