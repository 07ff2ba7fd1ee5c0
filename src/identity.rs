//! Application identity used to derive per-application directories.

use std::path::PathBuf;

use crate::home::push_relative;

/// Name, version and install prefix of an application.
///
/// Empty strings are treated the same as absent values. The version is only used together with a
/// name, and the prefix only affects the XDG site directories.
///
/// ```rust
/// use appdirs::AppIdentity;
///
/// let app = AppIdentity::new("hello-app").with_version("1.0");
/// assert_eq!(app.name(), Some("hello-app"));
/// assert_eq!(app.version(), Some("1.0"));
/// assert_eq!(app.prefix(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppIdentity {
    name: Option<String>,
    version: Option<String>,
    prefix: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl AppIdentity {
    /// Identity of an application called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: non_empty(name.into()),
            ..Self::default()
        }
    }

    /// Identity without a name: queries return the bare category roots.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the version, appended below the name.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = non_empty(version.into());
        self
    }

    /// Installation root, e.g. `/usr/local`. Only the XDG rules look at it.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = non_empty(prefix.into());
        self
    }

    /// Application name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Application version, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|version| !version.is_empty())
    }

    /// Installation root, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }

    /// Push `<name>` and then `<name>/<version>` onto `base`.
    ///
    /// Leading separators in either piece never replace `base`.
    pub(crate) fn suffix(&self, mut base: PathBuf) -> PathBuf {
        if let Some(name) = self.name() {
            push_relative(&mut base, name);
            if let Some(version) = self.version() {
                push_relative(&mut base, version);
            }
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::assert_none;

    #[test]
    fn empty_fields_are_absent() {
        let app = AppIdentity::new("").with_version("").with_prefix("");
        assert_eq!(app, AppIdentity::anonymous());
        assert_none!(app.name());
    }

    #[test]
    fn suffix_appends_name_and_version() {
        let app = AppIdentity::new("app").with_version("1.0");
        assert_eq!(app.suffix("/base".into()), PathBuf::from("/base/app/1.0"));
        let app = AppIdentity::new("app");
        assert_eq!(app.suffix("/base".into()), PathBuf::from("/base/app"));
    }

    #[test]
    fn absolute_pieces_stay_under_base() {
        let base = PathBuf::from("/home/u/.local/share");
        let app = AppIdentity::new("/app").with_version("1.0");
        assert_eq!(
            app.suffix(base.clone()).as_os_str(),
            "/home/u/.local/share/app/1.0"
        );
        let app = AppIdentity::new("app").with_version("/1.0/");
        assert_eq!(app.suffix(base).as_os_str(), "/home/u/.local/share/app/1.0");
    }

    #[test]
    fn version_needs_a_name() {
        let app = AppIdentity::anonymous().with_version("1.0");
        assert_eq!(app.suffix("/base".into()), PathBuf::from("/base"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_from_toml() {
        let app: AppIdentity = toml::from_str(
            r#"
            name = "hello-app"
            prefix = "/opt/hello"
            "#,
        )
        .expect("valid identity");
        assert_eq!(app, AppIdentity::new("hello-app").with_prefix("/opt/hello"));

        // Deserialized empty strings still count as absent.
        let app: AppIdentity = toml::from_str(r#"name = """#).expect("valid identity");
        assert_none!(app.name());
    }
}
