//! Home directory lookup and `~/` expansion.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::os::env::Env;
use crate::os::user::{LookupError, UserDb};

/// Home directory resolution over an [`Env`] and a [`UserDb`].
///
/// `$HOME` wins when it is set and non-empty, otherwise the user database is asked.
#[derive(Debug, Clone, Copy)]
pub struct Home<'a> {
    env: &'a Env,
    users: &'a dyn UserDb,
}

impl<'a> Home<'a> {
    /// Lookup reading `$HOME` from `env` and falling back to `users`.
    pub fn new(env: &'a Env, users: &'a dyn UserDb) -> Self {
        Self { env, users }
    }

    /// Environment this lookup reads from.
    pub fn env(&self) -> &'a Env {
        self.env
    }

    /// Home directory of the invoking user.
    ///
    /// # Errors
    /// Whatever [`UserDb::home_dir`] reports, when `$HOME` is unset or empty.
    pub fn dir(&self) -> Result<PathBuf, LookupError> {
        match self.env.non_empty("HOME") {
            Some(home) => Ok(PathBuf::from(home)),
            None => self.users.home_dir(),
        }
    }

    /// Replace leading `~/` in `dir` with [`Home::dir`].
    ///
    /// Anything else, including an empty string and a bare `~`, is returned unchanged. An empty
    /// result means "not set", never "current directory".
    ///
    /// # Examples
    /// ```rust
    /// use appdirs::home::Home;
    /// use appdirs::os::{env::Env, user::Passwd};
    /// use std::path::Path;
    ///
    /// let env: Env = [("HOME", "/home/u")].into_iter().collect();
    /// let home = Home::new(&env, &Passwd);
    /// assert_eq!(home.expand("~/.foo")?, Path::new("/home/u/.foo"));
    /// assert_eq!(home.expand("/abs/path")?, Path::new("/abs/path"));
    /// assert_eq!(home.expand("")?, Path::new(""));
    /// # Ok::<(), appdirs::LookupError>(())
    /// ```
    pub fn expand(&self, dir: impl AsRef<OsStr>) -> Result<PathBuf, LookupError> {
        let dir = dir.as_ref();
        let Some(rest) = strip_tilde(dir) else {
            return Ok(PathBuf::from(dir));
        };
        let mut home = self.dir()?;
        push_relative(&mut home, rest);
        Ok(home)
    }
}

#[cfg(unix)]
fn strip_tilde(dir: &OsStr) -> Option<&OsStr> {
    use std::os::unix::ffi::OsStrExt;

    dir.as_bytes().strip_prefix(b"~/").map(OsStr::from_bytes)
}

#[cfg(not(unix))]
fn strip_tilde(dir: &OsStr) -> Option<&OsStr> {
    dir.to_str()?.strip_prefix("~/").map(OsStr::new)
}

/// Append `piece` to `base` without letting a leading separator replace `base`.
///
/// Repeated and trailing separators are dropped along the way.
pub(crate) fn push_relative(base: &mut PathBuf, piece: impl AsRef<Path>) {
    base.extend(
        piece
            .as_ref()
            .components()
            .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_))),
    );
}
