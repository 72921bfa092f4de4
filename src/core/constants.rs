//! Shared constants: endpoint, well-known key names, timeouts.

use std::time::Duration;

/// Default API endpoint serving repository public keys.
pub const DEFAULT_API_URL: &str = "https://api.travis-ci.com";

/// Mapping key that carries an encrypted value (`secure: <base64>`).
pub const SECURE_KEY: &str = "secure";

/// Conventional name of the file this tool edits.
pub const TRAVIS_FILE: &str = ".travis.yml";

/// Overall timeout for the key fetch request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);
