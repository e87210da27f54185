//! Pressure-source resolution.
//!
//! Decides, once at startup, which pressure file each resource should be
//! read from: the current user's logind slice if it exposes pressure stats,
//! otherwise the system-global `/proc/pressure` entry, otherwise nothing.

use std::path::{Path, PathBuf};

use super::pressure::ResourceKind;

/// Resolve the pressure source for a resource kind.
///
/// Returns `None` when neither candidate is readable; the caller treats the
/// resource as unmonitored rather than failing. Running without the
/// user-scoped cgroup hierarchy (e.g. in a container) is expected.
pub fn resolve_source(kind: ResourceKind) -> Option<PathBuf> {
    let candidates = [user_slice_path(kind), system_path(kind)];
    let resolved = resolve_from_candidates(&candidates);

    match &resolved {
        Some(path) => log::info!("{}: monitoring {}", kind, path.display()),
        None => log::warn!("{}: no readable pressure source, monitoring disabled", kind),
    }

    resolved
}

/// Pick the first readable path from an ordered candidate list.
pub fn resolve_from_candidates(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| is_readable(p)).cloned()
}

/// Pressure stats for the current user's logind slice.
fn user_slice_path(kind: ResourceKind) -> PathBuf {
    PathBuf::from(format!(
        "/sys/fs/cgroup/user.slice/user-{}.slice/{}.pressure",
        current_uid(),
        kind.as_str()
    ))
}

/// System-global pressure stats.
fn system_path(kind: ResourceKind) -> PathBuf {
    PathBuf::from(format!("/proc/pressure/{}", kind.as_str()))
}

#[cfg(unix)]
fn current_uid() -> u32 {
    // Safe: getuid never fails and touches no memory.
    unsafe { libc::getuid() }
}

#[cfg(not(unix))]
fn current_uid() -> u32 {
    0
}

/// Readability probe without opening the file for reading.
#[cfg(unix)]
fn is_readable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(cpath) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // Safe: access only inspects the path, no memory is handed to the kernel.
    unsafe { libc::access(cpath.as_ptr(), libc::R_OK) == 0 }
}

#[cfg(not(unix))]
fn is_readable(path: &Path) -> bool {
    path.exists()
}
