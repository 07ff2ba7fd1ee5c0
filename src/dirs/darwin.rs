//! macOS rules: everything lives under `Library`, environment overrides are ignored.

use std::path::{Path, PathBuf};

use crate::dirs::Resolver;
use crate::home::Home;
use crate::identity::AppIdentity;
use crate::os::user::LookupError;

const APPLICATION_SUPPORT: &str = "Library/Application Support";

/// [`Resolver`] for macOS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Darwin;

fn under_home(home: &Home<'_>, dir: impl AsRef<Path>) -> Result<PathBuf, LookupError> {
    Ok(home.dir()?.join(dir))
}

impl Resolver for Darwin {
    fn user_data_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError> {
        under_home(home, APPLICATION_SUPPORT).map(|dir| app.suffix(dir))
    }

    fn site_data_dir(&self, app: &AppIdentity, _: &Home<'_>) -> Result<PathBuf, LookupError> {
        Ok(app.suffix(Path::new("/").join(APPLICATION_SUPPORT)))
    }

    fn user_config_dir(
        &self,
        app: &AppIdentity,
        home: &Home<'_>,
    ) -> Result<PathBuf, LookupError> {
        self.user_data_dir(app, home)
    }

    fn site_config_dir(
        &self,
        app: &AppIdentity,
        home: &Home<'_>,
    ) -> Result<PathBuf, LookupError> {
        self.site_data_dir(app, home)
    }

    fn user_cache_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError> {
        under_home(home, "Library/Caches").map(|dir| app.suffix(dir))
    }

    fn user_log_dir(&self, app: &AppIdentity, home: &Home<'_>) -> Result<PathBuf, LookupError> {
        under_home(home, "Library/Logs").map(|dir| app.suffix(dir))
    }
}
