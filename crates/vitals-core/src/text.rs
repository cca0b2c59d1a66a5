//! Editable single-line text used by the form widgets.

/// Which characters a field accepts from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any printable character.
    Text,
    /// Digits and a decimal point, like a browser number input.
    Numeric,
}

impl FieldKind {
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Text => !c.is_control(),
            Self::Numeric => c.is_ascii_digit() || c == '.',
        }
    }
}

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    kind: FieldKind,
}

impl TextField {
    /// Create an empty free-text field.
    #[must_use]
    pub fn text() -> Self {
        Self {
            value: String::new(),
            kind: FieldKind::Text,
        }
    }

    /// Create an empty numeric field.
    #[must_use]
    pub fn numeric() -> Self {
        Self {
            value: String::new(),
            kind: FieldKind::Numeric,
        }
    }

    /// Current raw contents.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a typed character. Returns `false` if the field rejected it.
    pub fn push(&mut self, c: char) -> bool {
        if !self.kind.accepts(c) {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Replace the whole contents, bypassing the keyboard filter.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Parse a numeric field the way a form submit does: surrounding
/// whitespace is ignored and anything unparseable becomes NaN.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_field_filters_input() {
        let mut field = TextField::numeric();
        assert!(field.push('1'));
        assert!(field.push('.'));
        assert!(field.push('5'));
        assert!(!field.push('a'));
        assert!(!field.push('-'));
        assert_eq!(field.value(), "1.5");
    }

    #[test]
    fn text_field_accepts_spaces_rejects_control() {
        let mut field = TextField::text();
        for c in "Ibuprofen 400".chars() {
            assert!(field.push(c));
        }
        assert!(!field.push('\n'));
        assert_eq!(field.value(), "Ibuprofen 400");
    }

    #[test]
    fn backspace_and_clear() {
        let mut field = TextField::text();
        field.set("abc");
        field.backspace();
        assert_eq!(field.value(), "ab");
        field.clear();
        assert!(field.is_empty());
        // Backspace on empty is a no-op.
        field.backspace();
        assert!(field.is_empty());
    }

    #[test]
    fn parse_number_cases() {
        assert!((parse_number("95") - 95.0).abs() < f64::EPSILON);
        assert!((parse_number(" 72.5 ") - 72.5).abs() < f64::EPSILON);
        assert!(parse_number("").is_nan());
        assert!(parse_number("1.2.3").is_nan());
        assert!(parse_number("abc").is_nan());
    }
}
