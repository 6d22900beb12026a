//! Login field state and validators

/// Events a field responds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The user edited the field; carries the full new value
    ValueChanged(String),
    /// Input focus left the field
    FocusLost,
}

/// An email is valid when it contains an '@'
pub fn email_valid(value: &str) -> bool {
    value.contains('@')
}

/// A password is valid when the trimmed value is longer than 6 characters
pub fn password_valid(value: &str) -> bool {
    value.trim().chars().count() > 6
}

/// A single input field: current value plus validity.
///
/// `is_valid = None` means the field has not been evaluated yet (nothing
/// typed, never blurred). The field is only ever mutated through `apply`.
#[derive(Debug, Clone)]
pub struct LoginField {
    pub label: String,
    pub value: String,
    pub is_valid: Option<bool>,
    validator: fn(&str) -> bool,
}

impl LoginField {
    /// Create the email field
    pub fn email() -> Self {
        Self {
            label: "E-mail".to_string(),
            value: String::new(),
            is_valid: None,
            validator: email_valid,
        }
    }

    /// Create the password field
    pub fn password() -> Self {
        Self {
            label: "Password".to_string(),
            value: String::new(),
            is_valid: None,
            validator: password_valid,
        }
    }

    /// Apply a field event.
    ///
    /// `ValueChanged` stores the new value and revalidates against it.
    /// `FocusLost` revalidates the existing value without changing it.
    pub fn apply(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::ValueChanged(value) => {
                self.is_valid = Some((self.validator)(&value));
                self.value = value;
            }
            FieldEvent::FocusLost => {
                self.is_valid = Some((self.validator)(&self.value));
            }
        }
    }

    /// Validity with "not yet evaluated" counting as invalid
    pub fn is_known_valid(&self) -> bool {
        self.is_valid.unwrap_or(false)
    }
}
