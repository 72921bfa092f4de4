//! Secure-slot placement.
//!
//! Locates (or builds) the nested structure a ciphertext belongs in and
//! installs the `secure` entry without disturbing sibling keys. All four
//! destinations the CI config knows about are covered: the login password,
//! the deploy password, and the two shapes of `env.global`.

use tracing::debug;

use crate::core::constants::SECURE_KEY;
use crate::core::document::{Mapping, Node};
use crate::core::types::{Ciphertext, VarName};
use crate::error::ConflictError;

/// Where ciphertexts are installed in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// Root-level `password.secure`.
    Password(Ciphertext),
    /// `deploy.password.secure`, read by deployment providers.
    DeployPassword(Ciphertext),
    /// A single secure entry under `env.global`.
    GlobalEnv(Ciphertext),
    /// One `env.global.<NAME>.secure` entry per dotenv variable.
    GlobalEnvVars(Vec<(VarName, Ciphertext)>),
}

impl Placement {
    /// Dotted path family this placement writes to.
    pub fn destination(&self) -> &'static str {
        match self {
            Placement::Password(_) => "password",
            Placement::DeployPassword(_) => "deploy.password",
            Placement::GlobalEnv(_) | Placement::GlobalEnvVars(_) => "env.global",
        }
    }

    /// Apply this placement to a document, creating intermediate mappings
    /// as needed.
    ///
    /// On conflict the in-memory document may already hold a created
    /// intermediate mapping, but nothing has been rendered or written;
    /// callers abort before any output.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError`] when a slot on the path is occupied by a
    /// shape the placement cannot edit.
    pub fn apply(&self, document: &mut Mapping) -> Result<(), ConflictError> {
        debug!(destination = self.destination(), "placing secure entry");

        match self {
            Placement::Password(ciphertext) => {
                let password = ensure_mapping(document, "password", "password")?;
                set_secure(password, ciphertext);
            }
            Placement::DeployPassword(ciphertext) => {
                let deploy = ensure_mapping(document, "deploy", "deploy")?;
                let password = ensure_mapping(deploy, "password", "deploy.password")?;
                set_secure(password, ciphertext);
            }
            Placement::GlobalEnv(ciphertext) => {
                let env = ensure_mapping(document, "env", "env")?;
                place_global(env, ciphertext)?;
            }
            Placement::GlobalEnvVars(vars) => {
                let env = ensure_mapping(document, "env", "env")?;
                let global = ensure_mapping(env, "global", "env.global")?;
                for (name, ciphertext) in vars {
                    let path = format!("env.global.{name}");
                    let slot = ensure_mapping(global, name, &path)?;
                    set_secure(slot, ciphertext);
                }
            }
        }
        Ok(())
    }
}

/// Get `parent[key]` as a mapping, inserting an empty one if the key is
/// absent. `path` is the dotted location reported on conflict.
fn ensure_mapping<'a>(
    parent: &'a mut Mapping,
    key: &str,
    path: &str,
) -> Result<&'a mut Mapping, ConflictError> {
    if !parent.contains_key(key) {
        parent.insert(key, Mapping::new());
    }
    match parent.get_mut(key) {
        Some(Node::Mapping(mapping)) => Ok(mapping),
        Some(other) => Err(ConflictError {
            path: path.to_string(),
            expected: "a mapping",
            found: other.kind(),
        }),
        None => unreachable!("key was inserted above"),
    }
}

/// Install a ciphertext under `env.global`, which may be a mapping or a
/// sequence mixing plain `NAME=value` scalars with secure mappings.
///
/// In the sequence form every mapping entry holding a `secure` key is
/// overwritten in place; plain scalars keep their positions. If no entry
/// holds one, a fresh `secure` mapping is appended.
fn place_global(env: &mut Mapping, ciphertext: &Ciphertext) -> Result<(), ConflictError> {
    match env.get_mut("global") {
        None => {
            let mut global = Mapping::new();
            set_secure(&mut global, ciphertext);
            env.insert("global", global);
            Ok(())
        }
        Some(Node::Mapping(global)) => {
            set_secure(global, ciphertext);
            Ok(())
        }
        Some(Node::Sequence(items)) => {
            let mut replaced = false;
            for item in items.iter_mut() {
                if let Node::Mapping(entry) = item {
                    if entry.contains_key(SECURE_KEY) {
                        set_secure(entry, ciphertext);
                        replaced = true;
                    }
                }
            }
            if !replaced {
                let mut entry = Mapping::new();
                set_secure(&mut entry, ciphertext);
                items.push(Node::Mapping(entry));
            }
            Ok(())
        }
        Some(other) => Err(ConflictError {
            path: "env.global".to_string(),
            expected: "a mapping or a sequence",
            found: other.kind(),
        }),
    }
}

fn set_secure(slot: &mut Mapping, ciphertext: &Ciphertext) {
    slot.insert(SECURE_KEY, Node::string(ciphertext.clone()));
}
