//! Form state for the input-driven screens.
//!
//! [`TextField`] is a single-line text input model (insert, backspace,
//! clear); the form structs group the fields of a screen and track which
//! one has focus. Validation of required fields happens either here (auth
//! screens, which never reach the store) or in the store (offer creation).

/// A single-line text input with a value and cursor at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field prefilled with a value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if the field is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// Login screen fields. Prefilled with the demo credentials like the
/// original app, so Enter on a fresh screen logs straight in.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    /// Index of the focused field (0 = email, 1 = password)
    pub focus: usize,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: TextField::with_value("test@student.com"),
            password: TextField::with_value("12345"),
            focus: 0,
        }
    }
}

impl LoginForm {
    pub const FIELD_COUNT: usize = 2;

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// Both fields non-empty. The only credential check in scope.
    pub fn is_complete(&self) -> bool {
        !self.email.is_blank() && !self.password.is_blank()
    }
}

/// Signup screen fields.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    /// Index of the focused field (0 = name, 1 = email, 2 = password)
    pub focus: usize,
}

impl SignupForm {
    pub const FIELD_COUNT: usize = 3;

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.password,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_blank() && !self.email.is_blank() && !self.password.is_blank()
    }
}

/// Create-offer screen fields. Category and duration carry the original
/// app's defaults; required-field validation is the store's job.
#[derive(Debug, Clone)]
pub struct OfferForm {
    pub title: TextField,
    pub category: TextField,
    pub duration: TextField,
    pub description: TextField,
    /// Index of the focused field, top to bottom
    pub focus: usize,
}

impl Default for OfferForm {
    fn default() -> Self {
        Self {
            title: TextField::new(),
            category: TextField::with_value("CS"),
            duration: TextField::with_value("60"),
            description: TextField::new(),
            focus: 0,
        }
    }
}

impl OfferForm {
    pub const FIELD_COUNT: usize = 4;

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.title,
            1 => &mut self.category,
            2 => &mut self.duration,
            _ => &mut self.description,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// Reset to the defaults after a successful post.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
