//! Travis-encrypt - encrypt secrets into `.travis.yml` without disturbing
//! the rest of the file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # The command body: fetch key, encrypt, place
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── document      # Ordered mapping/sequence/scalar tree
//!     ├── yaml          # Text <-> document codec
//!     ├── placement     # Secure-slot resolution and insertion
//!     ├── config        # .travis.yml load/place/save orchestration
//!     ├── keys          # Public key providers (API fetch, local PEM)
//!     ├── crypto        # RSA PKCS#1 v1.5 encryption + base64
//!     ├── dotenv        # Ordered NAME=value parsing for --env-file
//!     └── clipboard     # System clipboard sink
//! ```
//!
//! # Features
//!
//! - Insertion-order-preserving YAML merge: existing keys never move
//! - password, deploy.password, and both shapes of env.global placements
//! - Multi-variable encryption from dotenv files
//! - Clipboard and snippet output for file-less workflows

pub mod cli;
pub mod core;
pub mod error;
