//! Appdirs - conventional data, config, cache and log directories for applications.
//!
//! Paths follow the XDG Base Directory Specification on Linux and other Unix-like systems, and
//! the `~/Library` layout on macOS. Nothing is created or checked on disk, callers decide what
//! to do with the returned paths.
//!
//! ```rust,no_run
//! use appdirs::{AppDirs, AppIdentity};
//!
//! # fn main() -> Result<(), appdirs::LookupError> {
//! let dirs = AppDirs::new(AppIdentity::new("hello-app").with_version("1.0"));
//! let config = dirs.user_config_dir()?;
//!
//! // Or, for the common case of just a name:
//! let cache = appdirs::user_cache_dir("hello-app")?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::PathBuf;

pub mod dirs;
pub mod home;
pub mod identity;
pub mod os;

pub use dirs::{AppDirs, Category, Platform, Resolver};
pub use identity::AppIdentity;
pub use os::user::LookupError;

fn app(name: &str) -> AppDirs {
    AppDirs::new(AppIdentity::new(name))
}

/// Home directory of the invoking user: `$HOME`, or the user database entry.
pub fn home_dir() -> Result<PathBuf, LookupError> {
    app("").home_dir()
}

/// Expand a leading `~/` in `dir` to [`home_dir`].
pub fn expand_dir(dir: impl AsRef<OsStr>) -> Result<PathBuf, LookupError> {
    let env = os::env::Env::new();
    home::Home::new(&env, &os::user::Passwd).expand(dir)
}

/// Shortcut for [`AppDirs::user_data_dir`] of an application called `name`.
pub fn user_data_dir(name: &str) -> Result<PathBuf, LookupError> {
    app(name).user_data_dir()
}

/// Shortcut for [`AppDirs::site_data_dir`] of an application called `name`.
pub fn site_data_dir(name: &str) -> Result<PathBuf, LookupError> {
    app(name).site_data_dir()
}

/// Shortcut for [`AppDirs::user_config_dir`] of an application called `name`.
pub fn user_config_dir(name: &str) -> Result<PathBuf, LookupError> {
    app(name).user_config_dir()
}

/// Shortcut for [`AppDirs::site_config_dir`] of an application called `name`.
pub fn site_config_dir(name: &str) -> Result<PathBuf, LookupError> {
    app(name).site_config_dir()
}

/// Shortcut for [`AppDirs::user_cache_dir`] of an application called `name`.
pub fn user_cache_dir(name: &str) -> Result<PathBuf, LookupError> {
    app(name).user_cache_dir()
}

/// Shortcut for [`AppDirs::user_log_dir`] of an application called `name`.
pub fn user_log_dir(name: &str) -> Result<PathBuf, LookupError> {
    app(name).user_log_dir()
}

/// Shortcut for [`AppDirs::all`] of an application called `name`.
pub fn all_dirs(name: &str) -> Result<BTreeMap<Category, PathBuf>, LookupError> {
    app(name).all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::tests::FixedUser;

    // The process environment is shared between tests, so only compare shortcuts against the
    // long form, never against fixed paths.
    #[test]
    fn shortcuts_match_app_dirs() {
        let dirs = AppDirs::new(AppIdentity::new("hello-app"));
        assert_eq!(user_data_dir("hello-app"), dirs.user_data_dir());
        assert_eq!(site_data_dir("hello-app"), dirs.site_data_dir());
        assert_eq!(user_config_dir("hello-app"), dirs.user_config_dir());
        assert_eq!(site_config_dir("hello-app"), dirs.site_config_dir());
        assert_eq!(user_cache_dir("hello-app"), dirs.user_cache_dir());
        assert_eq!(user_log_dir("hello-app"), dirs.user_log_dir());
        assert_eq!(all_dirs("hello-app"), dirs.all());
        assert_eq!(home_dir(), dirs.home_dir());
    }

    #[test]
    fn named_dirs_end_with_name() {
        for platform in [Platform::UnixXdg, Platform::Darwin] {
            let env: os::env::Env = [("HOME", "/home/u")].into_iter().collect();
            let dirs = AppDirs::new(AppIdentity::new("hello-app"))
                .with_platform(platform)
                .with_env(env)
                .with_user_db(FixedUser(None));
            let all = claim::assert_ok!(dirs.all());
            assert_eq!(all.len(), Category::ALL.len());
            for (category, dir) in all {
                match category {
                    Category::Home => assert_eq!(dir, PathBuf::from("/home/u")),
                    Category::Log if platform == Platform::UnixXdg => {
                        assert!(dir.ends_with("hello-app/logs"), "{dir:?}")
                    }
                    _ => assert!(dir.ends_with("hello-app"), "{category}: {dir:?}"),
                }
            }
        }
    }

    #[test]
    fn expand_absolute_is_identity() {
        assert_eq!(expand_dir("/abs/path"), Ok(PathBuf::from("/abs/path")));
        assert_eq!(expand_dir(""), Ok(PathBuf::new()));
    }
}
