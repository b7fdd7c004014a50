//! # Form Session
//!
//! Owns the form and the commit handler for one interactive run, and turns
//! `Effect`s from the reducer into an `Outcome`.
//!
//! A session ends exactly once: committed (after a successful write) or
//! aborted. Store errors are returned to the caller, which decides whether
//! to terminate the process.

use log::{info, warn};

use super::action::{Action, Effect, update};
use super::commit::{CommitHandler, CommitRecord, StoreError};
use super::form::Form;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed(CommitRecord),
    Aborted,
}

pub struct Session<C> {
    form: Form,
    handler: C,
}

impl<C: CommitHandler> Session<C> {
    pub fn new(form: Form, handler: C) -> Self {
        Self { form, handler }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn handler(&self) -> &C {
        &self.handler
    }

    /// Feed one action through the form.
    ///
    /// Returns `Ok(Some(outcome))` when the session is over, `Ok(None)` when
    /// it continues.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Outcome>, StoreError> {
        match update(&mut self.form, action) {
            Effect::None => Ok(None),
            Effect::Quit => {
                info!("Session aborted");
                Ok(Some(Outcome::Aborted))
            }
            Effect::Commit(record) => {
                if let Err(e) = self.handler.commit(&record) {
                    warn!("Commit of {} {} failed: {}", record.ip, record.hostname, e);
                    return Err(e);
                }
                Ok(Some(Outcome::Committed(record)))
            }
        }
    }
}
