//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Positive count; `None` means unset and falls back to the default
    Count(Option<u32>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Shown dimmed while the field is empty
    pub placeholder: String,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
            placeholder: placeholder.to_string(),
        }
    }

    /// Create a new count field (unset by default)
    pub fn count(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Count(None),
            is_multiline: false,
            placeholder: placeholder.to_string(),
        }
    }

    /// Get the text value (returns empty string for count fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Count(_) => "",
        }
    }

    /// Get the count value, or `default` when unset
    pub fn count_or(&self, default: u32) -> u32 {
        match self.value {
            FieldValue::Count(Some(n)) => n,
            _ => default,
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Count(n) => n.is_none(),
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    /// Push a character to the field value
    ///
    /// Count fields accept digits only, and ignore a digit that would
    /// overflow or leave the count at zero.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Count(n) => {
                if let Some(d) = c.to_digit(10) {
                    let next = n.unwrap_or(0).checked_mul(10).and_then(|v| v.checked_add(d));
                    if let Some(v) = next.filter(|v| *v > 0) {
                        *n = Some(v);
                    }
                }
            }
        }
    }

    /// Push a pasted string, keeping only what the field accepts
    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' && !self.is_multiline {
                continue;
            }
            self.push_char(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Count(n) => {
                *n = n.map(|v| v / 10).filter(|v| *v > 0);
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Count(Some(n)) => n.to_string(),
            FieldValue::Count(None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_push_and_pop() {
        let mut field = FormField::text("query", "Query", "", false);
        field.push_char('h');
        field.push_char('i');
        assert_eq!(field.as_text(), "hi");
        field.pop_char();
        assert_eq!(field.as_text(), "h");
    }

    #[test]
    fn test_text_field_is_empty() {
        let mut field = FormField::text("query", "Query", "", false);
        assert!(field.is_empty());
        field.set_text(" ");
        assert!(!field.is_empty());
    }

    #[test]
    fn test_count_defaults_when_unset() {
        let field = FormField::count("count", "Records", "1");
        assert!(field.is_empty());
        assert_eq!(field.count_or(1), 1);
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_count_accepts_multiple_digits() {
        let mut field = FormField::count("count", "Records", "1");
        field.push_char('2');
        field.push_char('5');
        assert_eq!(field.count_or(1), 25);
        assert_eq!(field.display_value(), "25");
    }

    #[test]
    fn test_count_ignores_non_digits_and_leading_zero() {
        let mut field = FormField::count("count", "Records", "1");
        field.push_char('x');
        field.push_char('0');
        assert!(field.is_empty());
        field.push_char('3');
        assert_eq!(field.count_or(1), 3);
    }

    #[test]
    fn test_count_ignores_overflow() {
        let mut field = FormField::count("count", "Records", "1");
        for c in "4294967295".chars() {
            field.push_char(c);
        }
        field.push_char('9');
        assert_eq!(field.count_or(1), u32::MAX);
    }

    #[test]
    fn test_count_backspace_unsets() {
        let mut field = FormField::count("count", "Records", "1");
        field.push_char('1');
        field.push_char('2');
        field.pop_char();
        assert_eq!(field.count_or(1), 1);
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_push_str_drops_newlines_in_single_line_field() {
        let mut field = FormField::text("name", "Project Name", "", false);
        field.push_str("Atlas\nBilling");
        assert_eq!(field.as_text(), "AtlasBilling");

        let mut multiline = FormField::text("template", "Template", "", true);
        multiline.push_str("a\nb");
        assert_eq!(multiline.as_text(), "a\nb");
    }
}
