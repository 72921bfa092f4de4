//! Core library components.
//!
//! The ordered document model, the YAML codec, and secure-slot placement
//! live here, together with the injected collaborators around them (key
//! providers, the encryptor, the clipboard sink).

pub mod clipboard;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod document;
pub mod dotenv;
pub mod keys;
pub mod placement;
pub mod types;
pub mod yaml;
