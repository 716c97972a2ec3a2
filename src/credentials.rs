//! Provider credential loading and well-formedness checks.
//!
//! Credentials come from the process environment and, when present, from
//! `~/.wayfarer/.env` (permission-checked, `0600`). The engine never
//! stores keys; it only needs to decide whether a provider is usable
//! before attempting a network call.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

/// Environment variable holding the primary-provider API key.
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the secondary-provider API key.
pub const DASHSCOPE_KEY_VAR: &str = "DASHSCOPE_API_KEY";

/// Substring that marks a key as a template placeholder, e.g.
/// `sk-your-key-here` copied from documentation.
const PLACEHOLDER_MARKER: &str = "your-";

/// Loaded credential values, keyed by variable name.
#[derive(Clone, Default)]
pub struct Credentials {
    vars: BTreeMap<String, String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .field("values", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Build credentials from a key-value map.
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Collect the known provider variables from the process environment.
    pub fn from_env() -> Self {
        let mut vars = BTreeMap::new();
        for key in [OPENAI_KEY_VAR, DASHSCOPE_KEY_VAR] {
            if let Ok(value) = std::env::var(key) {
                vars.insert(key.to_owned(), value);
            }
        }
        Self { vars }
    }

    /// Returns a credential value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Merge `other` over `self`: values in `other` win.
    pub fn overridden_by(mut self, other: Self) -> Self {
        self.vars.extend(other.vars);
        self
    }
}

// ---------------------------------------------------------------------------
// Well-formedness
// ---------------------------------------------------------------------------

/// Returns the primary-provider key when it looks usable: non-empty,
/// `sk-` prefixed, and not a documentation placeholder.
pub fn resolve_openai_key(credentials: &Credentials) -> Option<String> {
    let key = credentials.get(OPENAI_KEY_VAR)?.trim();
    let usable = !key.is_empty() && key.starts_with("sk-") && !key.contains(PLACEHOLDER_MARKER);
    if usable {
        debug!("using {OPENAI_KEY_VAR}");
        Some(key.to_owned())
    } else {
        None
    }
}

/// Returns the secondary-provider key when it looks usable. DashScope
/// keys additionally carry a minimum length.
pub fn resolve_dashscope_key(credentials: &Credentials) -> Option<String> {
    let key = credentials.get(DASHSCOPE_KEY_VAR)?.trim();
    let usable = key.len() > 20 && key.starts_with("sk-") && !key.contains(PLACEHOLDER_MARKER);
    if usable {
        debug!("using {DASHSCOPE_KEY_VAR}");
        Some(key.to_owned())
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Load credentials from a specific `.env` path.
///
/// # Errors
///
/// Returns an error if the file does not exist, permissions are too broad,
/// or parsing fails.
pub fn load_credentials(path: &Path) -> anyhow::Result<Credentials> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "credentials file does not exist: {}",
            path.display()
        ));
    }

    validate_private_permissions(path)?;

    let mut vars = BTreeMap::new();
    let iter = dotenvy::from_path_iter(path)
        .with_context(|| format!("failed to read credentials at {}", path.display()))?;

    for item in iter {
        let (key, value) = item.with_context(|| {
            format!(
                "failed to parse key-value entry in credentials file {}",
                path.display()
            )
        })?;
        vars.insert(key, value);
    }

    Ok(Credentials { vars })
}

/// Load credentials from `~/.wayfarer/.env` (when present) with process
/// environment variables taking precedence.
///
/// A missing file is not an error — demo mode runs without any
/// credentials at all.
///
/// # Errors
///
/// Returns an error when the file exists but is unreadable or has unsafe
/// permissions.
pub fn load_default_credentials() -> anyhow::Result<Credentials> {
    let from_file = match default_env_path() {
        Some(path) if path.exists() => load_credentials(&path)?,
        _ => Credentials::default(),
    };
    Ok(from_file.overridden_by(Credentials::from_env()))
}

/// Location of the optional credentials file.
fn default_env_path() -> Option<PathBuf> {
    let base_dirs = directories::BaseDirs::new()?;
    Some(base_dirs.home_dir().join(".wayfarer").join(".env"))
}

/// Ensure a file has private permissions when the platform supports it.
///
/// # Errors
///
/// Returns an error if permissions cannot be updated.
pub fn enforce_private_file_permissions(path: &Path) -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

#[cfg(unix)]
fn validate_private_permissions(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to inspect credentials file {}", path.display()))?;
    let mode = metadata.permissions().mode() & 0o777;

    if mode & 0o077 != 0 {
        return Err(anyhow::anyhow!(
            "credentials file {} must be 0600, found {:o}",
            path.display(),
            mode
        ));
    }

    Ok(())
}

#[cfg(not(unix))]
fn validate_private_permissions(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}
