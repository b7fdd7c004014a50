//! # Setup
//!
//! Runs once before the form is built: the privilege gate, then the
//! bootstrap of the private data file. Any failure here ends the process
//! before the terminal is touched.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("You may need to run with root privileges. (effective uid {euid})")]
    NotRoot { euid: u32 },
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to create file {}: {source}", path.display())]
    CreateStore { path: PathBuf, source: io::Error },
    #[error("hosts file {} is missing", path.display())]
    HostsFileMissing { path: PathBuf },
}

/// Effective user id of this process.
pub fn current_euid() -> u32 {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() }
}

/// Pass only for root.
pub fn check_privileges(euid: u32) -> Result<(), SetupError> {
    if euid != 0 {
        return Err(SetupError::NotRoot { euid });
    }
    debug!("Privilege check passed");
    Ok(())
}

/// Make sure the data file and its directory exist, and that the hosts file
/// is there to append to. Existing data is never truncated.
pub fn bootstrap(data_file: &Path, hosts_file: &Path) -> Result<(), SetupError> {
    if let Some(parent) = data_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SetupError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let existed = data_file.exists();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_file)
        .map_err(|source| SetupError::CreateStore {
            path: data_file.to_path_buf(),
            source,
        })?;
    if !existed {
        info!("Created data file at {}", data_file.display());
    }

    if !hosts_file.is_file() {
        return Err(SetupError::HostsFileMissing {
            path: hosts_file.to_path_buf(),
        });
    }
    Ok(())
}
