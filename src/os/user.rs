//! Queries against the OS user-account registry.

use std::fmt::Debug;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to determine the home directory of the invoking user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The user database has no record for the current uid.
    #[error("no user database entry for uid {uid}")]
    NoSuchUser { uid: u32 },

    /// The user record exists, but has no home directory.
    #[error("user with uid {uid} has no home directory")]
    NoHomeDir { uid: u32 },

    /// Querying the user database failed.
    #[error("failed to query user database for uid {uid} (errno {errno})")]
    UserDb { uid: u32, errno: i32 },

    /// This platform has no user database to consult.
    #[error("user database lookups are not supported on this platform")]
    Unsupported,
}

/// Access to the user-account registry, consulted when `$HOME` is not set.
pub trait UserDb: Debug + Send + Sync {
    /// Home directory recorded for the user running this process.
    fn home_dir(&self) -> Result<PathBuf, LookupError>;
}

/// [`UserDb`] backed by `getpwuid_r(3)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passwd;

// Upper bound for the scratch buffer, so a misbehaving libc cannot make us allocate forever.
#[cfg(unix)]
const MAX_BUFFER_LEN: usize = 1 << 20;

impl UserDb for Passwd {
    #[cfg(unix)]
    fn home_dir(&self) -> Result<PathBuf, LookupError> {
        use std::ffi::{CStr, OsStr};
        use std::os::unix::ffi::OsStrExt;

        // SAFETY: `getuid` is always successful.
        let uid = unsafe { libc::getuid() };
        // SAFETY: `sysconf` only reads a configuration value.
        let mut buffer_len = match unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) } {
            n if n > 0 => n as usize,
            _ => 1024,
        };
        tracing::debug!(uid, "consulting user database for home directory");

        loop {
            let mut buffer: Vec<libc::c_char> = vec![0; buffer_len];
            // SAFETY: `passwd` is a plain C struct, all-zeroes is a valid (if meaningless) value,
            // and it is only read after `getpwuid_r` fills it.
            let mut passwd: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = std::ptr::null_mut();
            // SAFETY: every pointer is valid for the duration of the call, and `buffer.len()` is
            // the real capacity of `buffer`.
            let errno = unsafe {
                libc::getpwuid_r(
                    uid,
                    &mut passwd,
                    buffer.as_mut_ptr(),
                    buffer.len(),
                    &mut result,
                )
            };
            if errno == libc::ERANGE && buffer_len < MAX_BUFFER_LEN {
                buffer_len *= 2;
                continue;
            }
            if errno != 0 {
                return Err(LookupError::UserDb { uid, errno });
            }
            if result.is_null() {
                return Err(LookupError::NoSuchUser { uid });
            }
            if passwd.pw_dir.is_null() {
                return Err(LookupError::NoHomeDir { uid });
            }
            // SAFETY: `pw_dir` is non-null and points into `buffer`, which is still alive.
            let dir = unsafe { CStr::from_ptr(passwd.pw_dir) };
            if dir.is_empty() {
                return Err(LookupError::NoHomeDir { uid });
            }
            return Ok(PathBuf::from(OsStr::from_bytes(dir.to_bytes())));
        }
    }

    #[cfg(not(unix))]
    fn home_dir(&self) -> Result<PathBuf, LookupError> {
        Err(LookupError::Unsupported)
    }
}
