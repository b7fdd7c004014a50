//! # Form
//!
//! The ordered set of fields plus which one has focus.
//!
//! ```text
//! Form
//! ├── fields: Vec<Field>   // [IP, Host] for the host entry form
//! └── active: usize        // index of the only focused field
//! ```
//!
//! Navigation wraps in both directions and never looks at validity; the
//! commit rules that do look at validity live in `action::update`.

use super::field::Field;
use super::validate::{host_rule, ip_rule};

pub const IP_PLACEHOLDER: &str = "127.0.0.1";
pub const HOST_PLACEHOLDER: &str = "host.name";
pub const IP_MAX_LENGTH: usize = 20;

/// Position of each field in the host entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Ip = 0,
    Host = 1,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Ip => "IPv4 Address",
            FieldId::Host => "Host",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    active: usize,
}

impl Form {
    /// Build a form from at least one field. The first field gets focus.
    pub fn new(mut fields: Vec<Field>) -> Self {
        assert!(!fields.is_empty(), "a form needs at least one field");
        for field in &mut fields {
            field.blur();
        }
        fields[0].focus();
        Self { fields, active: 0 }
    }

    /// The two-field IP/Host form.
    pub fn host_entry() -> Self {
        Self::new(vec![
            Field::new(IP_PLACEHOLDER, ip_rule).with_max_length(IP_MAX_LENGTH),
            Field::new(HOST_PLACEHOLDER, host_rule),
        ])
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Field {
        &self.fields[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Field {
        &mut self.fields[self.active]
    }

    pub fn is_last_active(&self) -> bool {
        self.active == self.fields.len() - 1
    }

    /// Move focus forward, wrapping from the last field to the first.
    pub fn advance(&mut self) {
        self.focus_index((self.active + 1) % self.fields.len());
    }

    /// Move focus backward, wrapping from the first field to the last.
    pub fn retreat(&mut self) {
        let len = self.fields.len();
        self.focus_index((self.active + len - 1) % len);
    }

    fn focus_index(&mut self, index: usize) {
        self.fields[self.active].blur();
        self.active = index;
        self.fields[self.active].focus();
    }
}
