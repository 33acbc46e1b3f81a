//! CLI configuration, populated from environment variables.

use agora_client::DEFAULT_BASE_URL;

/// Variables consulted for the login name, in priority order.
const USER_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Runtime configuration for the `agora` CLI.
///
/// Read once at startup and handed to the transport and the synopsis
/// editor; nothing downstream consults the environment directly.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `AGORA_URL` | `https://agora-ci.broadinstitute.org` | Base URL of the repository |
/// | `EDITOR` | `vim` | Editor opened to capture a push synopsis |
/// | `LOGNAME`, `USER`, `LNAME`, `USERNAME` | (absent) | Default namespace for `push`; first one set wins |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Scheme and host of the repository, e.g. `"https://agora.example.org"`.
    pub base_url: String,

    /// Editor command line. May include arguments (`"code --wait"`).
    pub editor: String,

    /// Login name of the invoking user, if known.
    pub user: Option<String>,
}

impl CliConfig {
    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: get("AGORA_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            editor: get("EDITOR").unwrap_or_else(|| "vim".into()),
            user: USER_VARS.iter().find_map(|key| get(key)),
        }
    }
}
