//! Cryptographic operations.
//!
//! Encrypts secrets under a repository's RSA public key. The CI decryptor
//! fixes the whole pipeline: PKCS#1 v1.5 padding and standard base64 with
//! padding, so there is nothing to configure here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};

use crate::core::types::Ciphertext;
use crate::error::CryptoError;

/// Parse a PEM public key.
///
/// The key endpoint historically served both SPKI (`BEGIN PUBLIC KEY`) and
/// PKCS#1 (`BEGIN RSA PUBLIC KEY`) encodings, so both are accepted.
///
/// # Errors
///
/// Returns `CryptoError::InvalidPublicKey` if neither encoding parses.
pub fn parse_public_key(pem: &str) -> Result<RsaPublicKey, CryptoError> {
    if let Ok(key) = RsaPublicKey::from_public_key_pem(pem) {
        return Ok(key);
    }
    RsaPublicKey::from_pkcs1_pem(pem).map_err(|e| CryptoError::InvalidPublicKey(format!("{}", e)))
}

/// Encrypt plaintext under a PEM public key.
///
/// # Returns
///
/// The ciphertext as standard base64, ready to embed in `.travis.yml`.
///
/// # Errors
///
/// Returns `CryptoError` if the key does not parse or the plaintext is too
/// long for the key's modulus.
pub fn encrypt(pem: &str, plaintext: &[u8]) -> Result<Ciphertext, CryptoError> {
    let key = parse_public_key(pem)?;
    let encrypted = key
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(format!("{}", e)))?;

    Ok(STANDARD.encode(encrypted))
}
