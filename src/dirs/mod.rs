//! Per-platform directory resolution.
//!
//! Each [`Platform`] owns a [`Resolver`] implementing the same set of queries, and [`AppDirs`]
//! ties a platform to an [`AppIdentity`], an [`Env`] and a [`UserDb`].
//!
//! ```rust
//! # use appdirs::{AppDirs, AppIdentity, Platform};
//! # use appdirs::os::env::Env;
//! # use std::path::Path;
//! let env: Env = [("HOME", "/home/u"), ("XDG_DATA_HOME", "/tmp/xdgdata")]
//!     .into_iter()
//!     .collect();
//! let dirs = AppDirs::new(AppIdentity::new("app").with_version("1.0"))
//!     .with_platform(Platform::UnixXdg)
//!     .with_env(env);
//!
//! assert_eq!(dirs.user_data_dir()?, Path::new("/tmp/xdgdata/app/1.0"));
//! assert_eq!(dirs.user_log_dir()?, Path::new("/home/u/.cache/app/1.0/logs"));
//! # Ok::<(), appdirs::LookupError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::home::Home;
use crate::identity::AppIdentity;
use crate::os::env::Env;
use crate::os::user::{LookupError, Passwd, UserDb};

pub mod darwin;
pub mod xdg;

/// Rule set used to resolve directories.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Platform {
    /// freedesktop.org base directories, honoring `$XDG_*` overrides.
    UnixXdg,
    /// `~/Library/...` locations, no environment overrides.
    Darwin,
}

impl Platform {
    /// Platform this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Darwin
        } else {
            Self::UnixXdg
        }
    }

    /// Rule set implementing the queries for this platform.
    pub fn resolver(self) -> &'static dyn Resolver {
        match self {
            Self::UnixXdg => &xdg::Xdg,
            Self::Darwin => &darwin::Darwin,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Directory category, ordered the way [`AppDirs::all`] queries them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Home,
    Data,
    SiteData,
    Config,
    SiteConfig,
    Cache,
    Log,
}

impl Category {
    /// Every category, in query order.
    pub const ALL: [Category; 7] = [
        Self::Home,
        Self::Data,
        Self::SiteData,
        Self::Config,
        Self::SiteConfig,
        Self::Cache,
        Self::Log,
    ];

    /// Key used for this category in aggregate listings, e.g. `SiteData`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Data => "Data",
            Self::SiteData => "SiteData",
            Self::Config => "Config",
            Self::SiteConfig => "SiteConfig",
            Self::Cache => "Cache",
            Self::Log => "Log",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One query per directory category.
///
/// Returned paths are neither created nor checked for existence.
pub trait Resolver: Send + Sync {
    /// User-specific data, e.g. `~/.local/share/<name>`.
    fn user_data_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError>;

    /// Machine-wide data, e.g. `/usr/local/share/<name>`.
    fn site_data_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError>;

    /// User-specific configuration, e.g. `~/.config/<name>`.
    fn user_config_dir(&self, app: &AppIdentity, home: &Home<'_>)
    -> Result<PathBuf, LookupError>;

    /// Machine-wide configuration, e.g. `/etc/xdg/<name>`.
    fn site_config_dir(&self, app: &AppIdentity, home: &Home<'_>)
    -> Result<PathBuf, LookupError>;

    /// User-specific cache, e.g. `~/.cache/<name>`.
    fn user_cache_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError>;

    /// User-specific logs, e.g. `~/.cache/<name>/logs`.
    fn user_log_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError>;
}

/// Directories of one application on one platform.
#[derive(Debug)]
pub struct AppDirs {
    identity: AppIdentity,
    platform: Platform,
    env: Env,
    users: Box<dyn UserDb>,
}

impl AppDirs {
    /// Directories for `identity` on [`Platform::current`], reading the process environment and
    /// the system user database.
    pub fn new(identity: AppIdentity) -> Self {
        Self {
            identity,
            platform: Platform::current(),
            env: Env::new(),
            users: Box::new(Passwd),
        }
    }

    /// Use the rules of `platform` instead of the compiled-in one.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Read environmental variables from `env`.
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    /// Ask `users` for the home directory when `$HOME` is unset.
    pub fn with_user_db(mut self, users: impl UserDb + 'static) -> Self {
        self.users = Box::new(users);
        self
    }

    /// Application these directories belong to.
    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    /// Rule set in use.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    fn home(&self) -> Home<'_> {
        Home::new(&self.env, self.users.as_ref())
    }

    fn resolve(
        &self,
        category: Category,
        query: fn(&dyn Resolver, &AppIdentity, &Home<'_>) -> Result<PathBuf, LookupError>,
    ) -> Result<PathBuf, LookupError> {
        let dir = query(self.platform.resolver(), &self.identity, &self.home())?;
        tracing::trace!(platform = ?self.platform, %category, dir = %dir.display(), "resolved");
        Ok(dir)
    }

    /// Home directory of the invoking user.
    pub fn home_dir(&self) -> Result<PathBuf, LookupError> {
        self.home().dir()
    }

    /// See [`Resolver::user_data_dir`].
    pub fn user_data_dir(&self) -> Result<PathBuf, LookupError> {
        self.resolve(Category::Data, |r, app, home| r.user_data_dir(app, home))
    }

    /// See [`Resolver::site_data_dir`].
    pub fn site_data_dir(&self) -> Result<PathBuf, LookupError> {
        self.resolve(Category::SiteData, |r, app, home| {
            r.site_data_dir(app, home)
        })
    }

    /// See [`Resolver::user_config_dir`].
    pub fn user_config_dir(&self) -> Result<PathBuf, LookupError> {
        self.resolve(Category::Config, |r, app, home| r.user_config_dir(app, home))
    }

    /// See [`Resolver::site_config_dir`].
    pub fn site_config_dir(&self) -> Result<PathBuf, LookupError> {
        self.resolve(Category::SiteConfig, |r, app, home| {
            r.site_config_dir(app, home)
        })
    }

    /// See [`Resolver::user_cache_dir`].
    pub fn user_cache_dir(&self) -> Result<PathBuf, LookupError> {
        self.resolve(Category::Cache, |r, app, home| r.user_cache_dir(app, home))
    }

    /// See [`Resolver::user_log_dir`].
    pub fn user_log_dir(&self) -> Result<PathBuf, LookupError> {
        self.resolve(Category::Log, |r, app, home| r.user_log_dir(app, home))
    }

    /// Directory for a single `category`.
    pub fn get(&self, category: Category) -> Result<PathBuf, LookupError> {
        match category {
            Category::Home => self.home_dir(),
            Category::Data => self.user_data_dir(),
            Category::SiteData => self.site_data_dir(),
            Category::Config => self.user_config_dir(),
            Category::SiteConfig => self.site_config_dir(),
            Category::Cache => self.user_cache_dir(),
            Category::Log => self.user_log_dir(),
        }
    }

    /// Every category at once, stopping at the first failure.
    pub fn all(&self) -> Result<BTreeMap<Category, PathBuf>, LookupError> {
        Category::ALL
            .into_iter()
            .map(|category| self.get(category).map(|dir| (category, dir)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::tests::FixedUser;
    use claim::{assert_err, assert_ok};
    use std::path::Path;

    fn dirs(platform: Platform, env: &[(&str, &str)]) -> AppDirs {
        AppDirs::new(AppIdentity::new("app").with_version("1.0"))
            .with_platform(platform)
            .with_env(env.iter().copied().collect())
            .with_user_db(FixedUser(None))
    }

    #[test]
    fn current_platform() {
        if cfg!(target_os = "macos") {
            assert_eq!(Platform::current(), Platform::Darwin);
        } else {
            assert_eq!(Platform::current(), Platform::UnixXdg);
        }
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Category::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            ["Home", "Data", "SiteData", "Config", "SiteConfig", "Cache", "Log"]
        );
    }

    #[test]
    fn all_returns_every_category() {
        for platform in [Platform::UnixXdg, Platform::Darwin] {
            let all = assert_ok!(dirs(platform, &[("HOME", "/home/u")]).all());
            assert_eq!(all.keys().copied().collect::<Vec<_>>(), Category::ALL);
            assert_eq!(all[&Category::Home], Path::new("/home/u"));
            for (category, dir) in &all {
                if *category != Category::Home && *category != Category::Log {
                    assert!(dir.ends_with("app/1.0"), "{category}: {dir:?}");
                }
            }
        }
    }

    #[test]
    fn all_fails_without_home() {
        assert_eq!(
            dirs(Platform::UnixXdg, &[]).all(),
            Err(LookupError::NoSuchUser { uid: 4242 })
        );
        assert_err!(dirs(Platform::Darwin, &[]).all());
    }

    #[test]
    fn site_dirs_dont_need_home() {
        let dirs = dirs(Platform::UnixXdg, &[]);
        assert_ok!(dirs.site_data_dir());
        assert_ok!(dirs.site_config_dir());
        assert_err!(dirs.user_data_dir());
    }

    #[test]
    fn get_matches_queries() {
        let dirs = dirs(Platform::UnixXdg, &[("HOME", "/home/u")]);
        assert_eq!(dirs.get(Category::Cache), dirs.user_cache_dir());
        assert_eq!(dirs.get(Category::SiteConfig), dirs.site_config_dir());
    }

    #[test]
    fn queries_create_nothing() {
        let tmp = tempfile::tempdir().expect("needed for tests");
        let home = tmp.path().to_str().expect("utf-8 tempdir");
        for platform in [Platform::UnixXdg, Platform::Darwin] {
            assert_ok!(dirs(platform, &[("HOME", home)]).all());
        }
        let entries = std::fs::read_dir(tmp.path()).expect("readable tempdir");
        assert_eq!(entries.count(), 0);
    }
}
