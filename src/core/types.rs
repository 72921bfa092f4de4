//! Semantic aliases for the strings passed between components.

/// A base64-encoded RSA ciphertext, as embedded in `.travis.yml`.
///
/// Standard alphabet with padding, the encoding the CI decryptor expects.
pub type Ciphertext = String;

/// A PEM-encoded RSA public key.
///
/// Either SPKI (`BEGIN PUBLIC KEY`) or PKCS#1 (`BEGIN RSA PUBLIC KEY`) form.
pub type Pem = String;

/// An environment variable name from a dotenv file (e.g., DATABASE_URL).
pub type VarName = String;
