//! # Core Application Logic
//!
//! Everything hostcli does apart from drawing to a terminal.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Form + Field (state) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • FormView (render)    │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Commit
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │  Session → CommitHandler│
//!                    │  data.txt, /etc/hosts   │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validate`]: IP and host rules
//! - [`field`]: one editable, self-validating text box
//! - [`form`]: the ordered fields and focus navigation
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`commit`]: text stores and the Commit Handler
//! - [`session`]: runs actions until the session is committed or aborted
//! - [`view`]: pure projection of the form for renderers
//! - [`setup`]: privilege gate and data file bootstrap
//! - [`config`]: settings resolution

pub mod action;
pub mod commit;
pub mod config;
pub mod field;
pub mod form;
pub mod session;
pub mod setup;
pub mod validate;
pub mod view;
