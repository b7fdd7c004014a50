//! # Commit Handler
//!
//! Persists a confirmed `(ip, hostname)` pair to the private data file and
//! to the OS hosts file.
//!
//! Both stores are plain text, one `<ip> <hostname>` entry per line. Entries
//! are only ever appended:
//!
//! ```text
//! data.txt   = data.txt + "\n<ip> <host>"
//! /etc/hosts = /etc/hosts + (new data.txt content)
//! ```
//!
//! The hosts file receives the whole updated data file, not just the new
//! line. There is no rollback: if the hosts write fails after the data file
//! was written, the two stores are left out of step and the error says which
//! file failed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

/// The pair handed to the storage backend. Not kept after the append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub ip: String,
    pub hostname: String,
}

impl CommitRecord {
    pub fn new(ip: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            hostname: hostname.into(),
        }
    }

    /// The line appended to the data file, leading newline included.
    pub fn entry_line(&self) -> String {
        format!("\n{} {}", self.ip, self.hostname)
    }

    /// Message shown once the entry has been written.
    pub fn confirmation(&self) -> String {
        format!(
            "New host ({}) has been added to the IP ({})",
            self.hostname, self.ip
        )
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// A whole-file text store.
pub trait TextStore {
    fn read_all(&self) -> Result<String, StoreError>;
    fn write_all(&mut self, content: &str) -> Result<(), StoreError>;
}

/// A text store backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextStore for FileStore {
    fn read_all(&self) -> Result<String, StoreError> {
        fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&mut self, content: &str) -> Result<(), StoreError> {
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Receives a validated record at the end of the form session.
pub trait CommitHandler {
    fn commit(&mut self, record: &CommitRecord) -> Result<(), StoreError>;
}

/// Writes records to the private data store, then mirrors it into the hosts
/// file.
pub struct HostsCommitter<P, H> {
    private: P,
    hosts: H,
}

impl<P: TextStore, H: TextStore> HostsCommitter<P, H> {
    pub fn new(private: P, hosts: H) -> Self {
        Self { private, hosts }
    }

    pub fn private(&self) -> &P {
        &self.private
    }

    pub fn hosts(&self) -> &H {
        &self.hosts
    }
}

impl HostsCommitter<FileStore, FileStore> {
    pub fn from_paths(data_file: impl Into<PathBuf>, hosts_file: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(data_file), FileStore::new(hosts_file))
    }
}

impl<P: TextStore, H: TextStore> CommitHandler for HostsCommitter<P, H> {
    fn commit(&mut self, record: &CommitRecord) -> Result<(), StoreError> {
        let mut combined = self.private.read_all()?;
        combined.push_str(&record.entry_line());
        self.private.write_all(&combined)?;
        debug!("Private store now holds {} bytes", combined.len());

        let mut hosts = self.hosts.read_all()?;
        hosts.push_str(&combined);
        self.hosts.write_all(&hosts)?;

        info!("Committed {} {}", record.ip, record.hostname);
        Ok(())
    }
}
