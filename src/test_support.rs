//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;
use std::path::PathBuf;

use crate::core::action::Action;
use crate::core::commit::{CommitHandler, CommitRecord, StoreError, TextStore};

/// An in-memory text store with optional injected failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    content: String,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Default::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn failing_writes(content: &str) -> Self {
        Self {
            content: content.to_string(),
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl TextStore for MemoryStore {
    fn read_all(&self) -> Result<String, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Read {
                path: PathBuf::from("memory"),
                source: io::Error::other("injected read failure"),
            });
        }
        Ok(self.content.clone())
    }

    fn write_all(&mut self, content: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                path: PathBuf::from("memory"),
                source: io::Error::other("injected write failure"),
            });
        }
        self.content = content.to_string();
        Ok(())
    }
}

/// A commit handler that only remembers what it was given.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub records: Vec<CommitRecord>,
}

impl CommitHandler for RecordingHandler {
    fn commit(&mut self, record: &CommitRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// One `InsertChar` action per character.
pub fn type_text(text: &str) -> Vec<Action> {
    text.chars().map(Action::InsertChar).collect()
}
