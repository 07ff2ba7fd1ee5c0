use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Source of environmental variables used while resolving directories.
///
/// [`Env::new`] reads the live process environment on every lookup, while [`Env::new_from`]
/// pins a fixed set of variables, which is handy for tests and for embedding.
#[derive(Debug, Clone, Default)]
pub struct Env {
    keys: Option<HashMap<OsString, OsString>>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvStrError {
    /// This variant indicates, that variable `Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Create [`Env`] backed by the process environment.
    pub fn new() -> Self {
        Self { keys: None }
    }

    /// Create new [`Env`] using `keys` as existing environmental variables.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self { keys: Some(env) }
    }

    /// Replace environmental variables with `env`.
    pub fn reload_from(&mut self, env: HashMap<OsString, OsString>) {
        self.keys = Some(env);
    }

    /// Go back to reading the process environment.
    pub fn reload(&mut self) {
        self.keys = None;
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use appdirs::os::env::Env;
    ///
    /// let env = Env::new();
    /// println!("$FOO = {:?}", env.get_os("FOO"));
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<OsString> {
        let key = key.as_ref();
        match &self.keys {
            Some(keys) => keys.get(key).cloned(),
            None => std::env::var_os(key),
        }
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Ok` variant indicates existing UTF-8 variable, `Err` indicates some kind of error. See
    /// [`EnvStrError`] for details.
    ///
    /// # Examples
    /// ```rust
    /// use std::collections::HashMap;
    /// use appdirs::os::env::Env;
    ///
    /// let env = Env::new_from(HashMap::from([("HOME".into(), "/home/u".into())]));
    /// assert_eq!(env.get("HOME").as_deref(), Ok("/home/u"));
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<String, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .into_string()
            .map_err(|_| EnvStrError::NonUTF8(key.to_os_string()))
    }

    /// Get environmental variable pointed by `key`, treating empty and missing values as unset.
    ///
    /// The value is returned as is, it doesn't have to be UTF-8.
    pub fn non_empty(&self, key: impl AsRef<OsStr>) -> Option<OsString> {
        self.get_os(key).filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
