//! The visible surfaces the game controller reads and writes.
//!
//! Each field corresponds to one named element of the game screen:
//! `input-field`, `timer`, `start-btn`, `tips-toggle` and `tips-status`.

/// Single-line editable text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    /// Direct typing into the field
    pub fn type_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elements {
    pub input_field: InputField,
    pub timer: String,
    pub start_btn_visible: bool,
    pub tips_toggle: bool,
    pub tips_status: String,
}

impl Elements {
    pub fn new(round_secs: u32) -> Self {
        Self {
            input_field: InputField::default(),
            timer: round_secs.to_string(),
            start_btn_visible: true,
            tips_toggle: false,
            tips_status: String::new(),
        }
    }
}
