//! # TUI Components
//!
//! Both components are stateless: they receive a slice of the `FormView`
//! as props and draw it. All form state lives in `core`.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── form_panel.rs  (title, rows, hint)
//! └── field_row.rs   (one label + value pair)
//! ```

pub mod field_row;
pub mod form_panel;
pub use field_row::FieldRow;
pub use form_panel::FormPanel;
