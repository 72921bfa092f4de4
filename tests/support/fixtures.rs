//! Test fixtures and document inspection helpers.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};

use travis_encrypt::core::document::{Mapping, Node};
use travis_encrypt::core::yaml;

/// Sample .env file content for env-file tests.
pub const SAMPLE_ENV: &str = "API_KEY=one\nSECRET=two\n";

/// Path to the fixture public key (SPKI PEM).
pub fn public_key_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/repo_key.pem")
}

/// Path to the matching private key (PKCS#8 PEM).
pub fn private_key_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/repo_key_private.pem")
}

/// Decrypt a base64 ciphertext produced against the fixture public key.
pub fn decrypt_fixture(ciphertext: &str) -> String {
    let pem =
        std::fs::read_to_string(private_key_fixture()).expect("failed to read fixture private key");
    let key = RsaPrivateKey::from_pkcs8_pem(&pem).expect("fixture private key should parse");
    let raw = STANDARD.decode(ciphertext.trim()).expect("valid base64");
    let plaintext = key
        .decrypt(Pkcs1v15Encrypt, &raw)
        .expect("decryption should succeed");
    String::from_utf8(plaintext).expect("utf8 plaintext")
}

/// Decode YAML text into the ordered document model.
pub fn decode(text: &str) -> Mapping {
    yaml::decode(text).expect("valid yaml")
}

/// Top-level keys of a document, in order.
pub fn top_keys(document: &Mapping) -> Vec<String> {
    document.keys().map(str::to_string).collect()
}

/// Walk a dotted path of mapping keys.
pub fn lookup<'a>(document: &'a Mapping, path: &[&str]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let mut node = document.get(first)?;
    for part in rest {
        node = node.as_mapping()?.get(part)?;
    }
    Some(node)
}

/// The `secure` string at a dotted mapping path, panicking when absent.
pub fn secure_at(document: &Mapping, path: &[&str]) -> String {
    let mut full = path.to_vec();
    full.push("secure");
    lookup(document, &full)
        .and_then(Node::as_str)
        .unwrap_or_else(|| panic!("no secure entry at {:?}", path))
        .to_string()
}
