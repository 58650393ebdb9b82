use crate::constants::DATE_FIELD_MAX_LEN;
use crate::input::InputField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Task,
    Date,
}

/// Raw values read from the form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    pub text: String,
    pub date: String,
}

/// Task entry form: free text plus an optional due date
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub task: InputField,
    pub date: InputField,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &InputField {
        match field {
            FormField::Task => &self.task,
            FormField::Date => &self.date,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut InputField {
        match field {
            FormField::Task => &mut self.task,
            FormField::Date => &mut self.date,
        }
    }

    /// Insert a typed character. The date field only takes digits and `-`,
    /// up to `YYYY-MM-DD` length. Returns whether the character was accepted.
    pub fn insert_char(&mut self, field: FormField, c: char) -> bool {
        match field {
            FormField::Task => {
                if c.is_control() {
                    return false;
                }
                self.task.insert_char(c);
                true
            }
            FormField::Date => {
                if !(c.is_ascii_digit() || c == '-') || self.date.len() >= DATE_FIELD_MAX_LEN {
                    return false;
                }
                self.date.insert_char(c);
                true
            }
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues {
            text: self.task.value().to_string(),
            date: self.date.value().to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.task.clear();
        self.date.clear();
    }
}
