//! XDG Base Directory rules for Linux and other Unix-like systems.
//!
//! Every category first looks at its `$XDG_*` variable, then falls back to the freedesktop.org
//! default. Values starting with `~/` are expanded against the home directory.

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::dirs::Resolver;
use crate::home::Home;
use crate::identity::AppIdentity;
use crate::os::user::LookupError;

/// Separator of list-valued variables like `$XDG_DATA_DIRS`.
pub const PATH_SEPARATOR: u8 = b':';

/// [`Resolver`] following the XDG Base Directory Specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xdg;

/// `$key`, tilde-expanded, if set. List-valued variables only contribute their first entry.
fn env_dir(home: &Home<'_>, key: &str, list: bool) -> Result<Option<PathBuf>, LookupError> {
    let Some(value) = home.env().non_empty(key) else {
        return Ok(None);
    };
    let value = if list {
        first_entry(&value)
    } else {
        value.as_os_str()
    };
    if value.is_empty() {
        tracing::debug!("${key} has an empty first entry, using default");
        return Ok(None);
    }
    let dir = home.expand(value)?;
    tracing::debug!(dir = %dir.display(), "using ${key}");
    Ok(Some(dir))
}

#[cfg(unix)]
fn first_entry(list: &OsStr) -> &OsStr {
    use std::os::unix::ffi::OsStrExt;

    let bytes = list.as_bytes();
    let end = bytes
        .iter()
        .position(|&byte| byte == PATH_SEPARATOR)
        .unwrap_or(bytes.len());
    OsStr::from_bytes(&bytes[..end])
}

#[cfg(not(unix))]
fn first_entry(list: &OsStr) -> &OsStr {
    match list.to_str() {
        Some(list) => OsStr::new(list.split(PATH_SEPARATOR as char).next().unwrap_or_default()),
        None => list,
    }
}

/// `$key` or `<home>/<fallback>`.
fn user_dir(home: &Home<'_>, key: &str, fallback: &str) -> Result<PathBuf, LookupError> {
    match env_dir(home, key, false)? {
        Some(dir) => Ok(dir),
        None => Ok(home.dir()?.join(fallback)),
    }
}

fn cache_home(home: &Home<'_>) -> Result<PathBuf, LookupError> {
    user_dir(home, "XDG_CACHE_HOME", ".cache")
}

impl Resolver for Xdg {
    fn user_data_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError> {
        user_dir(home, "XDG_DATA_HOME", ".local/share").map(|dir| app.suffix(dir))
    }

    fn site_data_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError> {
        let dir = match env_dir(home, "XDG_DATA_DIRS", true)? {
            Some(dir) => dir,
            // An explicit `/` prefix means the distribution's own tree.
            None => match app.prefix() {
                Some("/") => PathBuf::from("/usr/share"),
                Some(prefix) => PathBuf::from(prefix).join("share"),
                None => PathBuf::from("/usr/local/share"),
            },
        };
        Ok(app.suffix(dir))
    }

    fn user_config_dir(
        &self,
        app: &AppIdentity,
        home: &Home<'_>,
    ) -> Result<PathBuf, LookupError> {
        user_dir(home, "XDG_CONFIG_HOME", ".config").map(|dir| app.suffix(dir))
    }

    fn site_config_dir(
        &self,
        app: &AppIdentity,
        home: &Home<'_>,
    ) -> Result<PathBuf, LookupError> {
        let dir = match env_dir(home, "XDG_CONFIG_DIRS", true)? {
            Some(dir) => dir,
            None => match app.prefix() {
                Some(prefix) => PathBuf::from(prefix).join("etc"),
                None => PathBuf::from("/etc/xdg"),
            },
        };
        Ok(app.suffix(dir))
    }

    fn user_cache_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError> {
        cache_home(home).map(|dir| app.suffix(dir))
    }

    fn user_log_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError> {
        self.user_cache_dir(app, home).map(|dir| dir.join("logs"))
    }
}
