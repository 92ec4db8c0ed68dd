//! Declarative validation rules for the registration fields
//!
//! Each field carries an ordered list of constraints. The first one that
//! fails decides the message shown under the field. Optional fields with an
//! empty value are never checked.

use once_cell::sync::Lazy;
use regex::Regex;

use super::record::{Field, FieldValue};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\S+@\S+\.\S+$").expect("email pattern"));
static ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("alpha pattern"));
static ALPHA_OR_EMPTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]*$").expect("alpha pattern"));
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

static LOWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("lower class"));
static UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("upper class"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("digit class"));
static SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!@#$%^&*]").expect("symbol class"));

/// A single check applied to a field value
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    Required(&'static str),
    MaxLength(usize, &'static str),
    MinLength(usize, &'static str),
    Pattern(&'static Lazy<Regex>, &'static str),
    Custom(fn(&str) -> bool, &'static str),
}

impl Constraint {
    /// Message reported when this constraint fails
    pub fn message(&self) -> &'static str {
        match self {
            Constraint::Required(msg)
            | Constraint::MaxLength(_, msg)
            | Constraint::MinLength(_, msg)
            | Constraint::Pattern(_, msg)
            | Constraint::Custom(_, msg) => msg,
        }
    }

    fn holds(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Constraint::Required(_), FieldValue::Text(text)) => !text.is_empty(),
            (Constraint::Required(_), FieldValue::Flag(flag)) => flag,
            (Constraint::MaxLength(max, _), FieldValue::Text(text)) => {
                text.chars().count() <= *max
            }
            (Constraint::MinLength(min, _), FieldValue::Text(text)) => {
                text.chars().count() >= *min
            }
            (Constraint::Pattern(re, _), FieldValue::Text(text)) => re.is_match(text),
            (Constraint::Custom(check, _), FieldValue::Text(text)) => check(text),
            // Text constraints never apply to the checkbox
            (_, FieldValue::Flag(_)) => true,
        }
    }
}

/// Rule set for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub constraints: Vec<Constraint>,
}

impl FieldRule {
    pub fn is_required(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c, Constraint::Required(_)))
    }

    /// Validate a value, returning the message of the first failing constraint
    pub fn check(&self, value: FieldValue<'_>) -> Option<&'static str> {
        if !self.is_required() && is_empty(value) {
            return None;
        }
        self.constraints
            .iter()
            .find(|c| !c.holds(value))
            .map(Constraint::message)
    }
}

fn is_empty(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => text.is_empty(),
        FieldValue::Flag(flag) => !flag,
    }
}

/// At least two lowercase, two uppercase, two digits and two symbols.
///
/// Each pair must sit on a single line; the classes may use different lines.
pub fn password_is_complex(value: &str) -> bool {
    [&LOWER, &UPPER, &DIGIT, &SYMBOL].iter().all(|class| {
        value
            .split(is_line_terminator)
            .any(|line| class.find_iter(line).count() >= 2)
    })
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Build the rule set for a field
pub fn rule_for(field: Field) -> FieldRule {
    use Constraint::*;

    let constraints = match field {
        Field::EmailId => vec![
            Required("Email is required"),
            Pattern(&EMAIL, "Invalid email address"),
        ],
        Field::Password => vec![
            Required("Password is required"),
            Custom(
                password_is_complex,
                "Password must contain 2 capital letters, 2 small letters, 2 numbers, and 2 special characters",
            ),
        ],
        Field::FirstName => vec![
            Required("First Name is required"),
            MaxLength(50, "Maximum 50 characters"),
            MinLength(2, "Minimum 2 characters"),
            Pattern(&ALPHA, "Only alphabets are allowed"),
        ],
        Field::LastName => vec![Pattern(&ALPHA_OR_EMPTY, "Only alphabets are allowed")],
        Field::Address => vec![
            Required("Address is required"),
            MinLength(10, "Minimum 10 characters"),
        ],
        Field::CountryCode => vec![Required("Country Code is required")],
        Field::PhoneNumber => vec![
            Required("Phone Number is required"),
            Pattern(&PHONE, "Phone number must be 10 digits"),
        ],
        Field::AcceptTermsAndCondition => {
            vec![Required("You must accept the terms and conditions")]
        }
    };

    FieldRule { field, constraints }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failing_constraint_wins() {
        let rule = rule_for(Field::FirstName);
        let long = "a".repeat(51);
        assert_eq!(rule.check(FieldValue::Text("")), Some("First Name is required"));
        assert_eq!(rule.check(FieldValue::Text(&long)), Some("Maximum 50 characters"));
        assert_eq!(rule.check(FieldValue::Text("1")), Some("Minimum 2 characters"));
        assert_eq!(rule.check(FieldValue::Text("J0")), Some("Only alphabets are allowed"));
        assert_eq!(rule.check(FieldValue::Text("Jo")), None);
    }

    #[test]
    fn optional_empty_value_skips_checks() {
        let rule = rule_for(Field::LastName);
        assert!(!rule.is_required());
        assert_eq!(rule.check(FieldValue::Text("")), None);
        assert_eq!(rule.check(FieldValue::Text("O'Neil")), Some("Only alphabets are allowed"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rule = rule_for(Field::Address);
        // ten characters, more than ten bytes
        assert_eq!(rule.check(FieldValue::Text("éééééééééé")), None);
        assert_eq!(rule.check(FieldValue::Text("ééééééééé")), Some("Minimum 10 characters"));
    }
}
