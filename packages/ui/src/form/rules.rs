//! # Validation ruleset
//!
//! Validation is a table, not code scattered through the view: [`RULESET`] maps each
//! [`Field`] to an ordered list of [`Rule`]s. A field's error is the message of its
//! first failing rule. Fields never look at each other.
//!
//! [`validate`] is the only way to turn a draft into an [`api::RegistrationRecord`]:
//! either every field passes and the typed record comes back, or the caller gets a
//! [`ValidationErrors`] map ordered top to bottom like the form.

use std::collections::BTreeMap;

use api::{Gender, Prefix, RegistrationRecord};
use chrono::{DateTime, NaiveDate};
use email_address::{EmailAddress, Options};

use super::field::{Field, FormValues};

/// One constraint on a single field's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    Required(&'static str),
    /// Value must be an email address with a top-level domain.
    Email(&'static str),
    /// Value must be exactly one of the listed names.
    OneOf(&'static [&'static str], &'static str),
    /// Value must be a calendar date.
    Date(&'static str),
}

impl Rule {
    /// `None` when the value passes, otherwise the rule's message.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let (ok, message) = match *self {
            Rule::Required(message) => (!value.is_empty(), message),
            Rule::Email(message) => (is_email(value), message),
            Rule::OneOf(allowed, message) => (allowed.contains(&value), message),
            Rule::Date(message) => (parse_date(value).is_some(), message),
        };
        (!ok).then_some(message)
    }
}

const PREFIXES: &[&str] = &["MR", "MRS", "MISS"];
const GENDERS: &[&str] = &["MALE", "FEMALE", "OTHER", "UNSPECIFIED"];

/// Every field's rules, in form order.
pub const RULESET: &[(Field, &[Rule])] = &[
    (Field::Prefix, &[Rule::OneOf(PREFIXES, "Invalid prefix")]),
    (Field::FirstName, &[Rule::Required("First Name is required")]),
    (Field::MiddleName, &[Rule::Required("Middle Name is required")]),
    (Field::LastName, &[Rule::Required("Last Name is required")]),
    (
        Field::Email,
        &[
            Rule::Required("Email is required"),
            Rule::Email("Invalid Email"),
        ],
    ),
    (Field::Phone, &[Rule::Required("Phone is required")]),
    (
        Field::Gender,
        &[
            Rule::Required("Gender is required"),
            Rule::OneOf(GENDERS, "Invalid gender"),
        ],
    ),
    (Field::Password, &[Rule::Required("Password is required")]),
    (
        Field::DateOfBirth,
        &[
            Rule::Required("Date of Birth is required"),
            Rule::Date("Invalid Date of Birth"),
        ],
    ),
];

fn rules_for(field: Field) -> &'static [Rule] {
    RULESET
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, rules)| *rules)
        .unwrap_or(&[])
}

/// Error for a single field, if any.
pub fn check_field(field: Field, value: &str) -> Option<&'static str> {
    rules_for(field).iter().find_map(|rule| rule.check(value))
}

/// Field → message for every failing field, ordered like the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields with their messages, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

/// Run the whole ruleset over a draft.
pub fn errors(values: &FormValues) -> ValidationErrors {
    ValidationErrors(
        RULESET
            .iter()
            .filter_map(|(field, _)| {
                check_field(*field, values.get(*field)).map(|message| (*field, message))
            })
            .collect(),
    )
}

/// Validate a draft and, if it passes, build the typed record.
pub fn validate(values: &FormValues) -> Result<RegistrationRecord, ValidationErrors> {
    let errors = errors(values);
    if !errors.is_empty() {
        return Err(errors);
    }

    // The ruleset has already vouched for these; a mismatch here means the
    // table and the api enums drifted apart.
    let mut drift = ValidationErrors::default();
    let prefix = values.prefix.parse::<Prefix>().ok();
    if prefix.is_none() {
        drift.0.insert(Field::Prefix, "Invalid prefix");
    }
    let gender = values.gender.parse::<Gender>().ok();
    if gender.is_none() {
        drift.0.insert(Field::Gender, "Invalid gender");
    }
    let date_of_birth = parse_date(&values.date_of_birth);
    if date_of_birth.is_none() {
        drift.0.insert(Field::DateOfBirth, "Invalid Date of Birth");
    }

    match (prefix, gender, date_of_birth) {
        (Some(prefix), Some(gender), Some(date_of_birth)) => Ok(RegistrationRecord {
            prefix,
            first_name: values.first_name.clone(),
            middle_name: values.middle_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            gender,
            password: values.password.clone(),
            date_of_birth,
        }),
        _ => Err(drift),
    }
}

fn is_email(value: &str) -> bool {
    // Bare addresses only: no `Name <addr>` wrapper, no `[ip]` domain.
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();
    EmailAddress::parse_with_options(value, options).is_ok()
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is kept.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> FormValues {
        FormValues {
            prefix: "MR".to_string(),
            first_name: "Jane".to_string(),
            middle_name: "Q".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@doe.com".to_string(),
            phone: "5551234".to_string(),
            gender: "FEMALE".to_string(),
            password: "secret".to_string(),
            date_of_birth: "1990-01-01".to_string(),
        }
    }

    #[test]
    fn test_every_field_has_rules() {
        for field in Field::ALL {
            assert!(!rules_for(field).is_empty(), "{field} has no rules");
        }
    }

    #[test]
    fn test_empty_draft_fails_every_field() {
        let errors = errors(&FormValues::default());
        assert_eq!(errors.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(errors.contains(field), "{field} should fail");
        }
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Gender), Some("Gender is required"));
        assert_eq!(errors.get(Field::Prefix), Some("Invalid prefix"));
        assert_eq!(
            errors.get(Field::DateOfBirth),
            Some("Date of Birth is required")
        );
    }

    #[test]
    fn test_errors_are_in_form_order() {
        let fields: Vec<Field> = errors(&FormValues::default())
            .iter()
            .map(|(f, _)| f)
            .collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_email_format() {
        assert_eq!(check_field(Field::Email, "not-an-email"), Some("Invalid Email"));
        assert_eq!(check_field(Field::Email, "user@"), Some("Invalid Email"));
        assert_eq!(
            check_field(Field::Email, "Jane Doe <jane@doe.com>"),
            Some("Invalid Email")
        );
        assert_eq!(
            check_field(Field::Email, "user@[127.0.0.1]"),
            Some("Invalid Email")
        );
        assert_eq!(check_field(Field::Email, "user@example.com"), None);
    }

    #[test]
    fn test_enumerations_reject_unknown_values() {
        assert_eq!(check_field(Field::Prefix, "DR"), Some("Invalid prefix"));
        assert_eq!(check_field(Field::Prefix, "mr"), Some("Invalid prefix"));
        assert_eq!(check_field(Field::Prefix, "MISS"), None);

        assert_eq!(check_field(Field::Gender, "ROBOT"), Some("Invalid gender"));
        assert_eq!(check_field(Field::Gender, "UNSPECIFIED"), None);
    }

    #[test]
    fn test_date_of_birth() {
        assert_eq!(
            check_field(Field::DateOfBirth, "abcd"),
            Some("Invalid Date of Birth")
        );
        assert_eq!(
            check_field(Field::DateOfBirth, "1990-02-30"),
            Some("Invalid Date of Birth")
        );
        assert_eq!(check_field(Field::DateOfBirth, "1990-01-01"), None);
        assert_eq!(
            parse_date("1990-01-01T08:30:00Z"),
            NaiveDate::from_ymd_opt(1990, 1, 1)
        );
    }

    #[test]
    fn test_phone_format_is_not_checked() {
        assert_eq!(check_field(Field::Phone, "call me maybe"), None);
    }

    #[test]
    fn test_validate_builds_typed_record() {
        let record = validate(&jane()).unwrap();
        assert_eq!(record.prefix, Prefix::Mr);
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.middle_name, "Q");
        assert_eq!(
            record.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_validate_reports_only_failing_fields() {
        let mut values = jane();
        values.email = "not-an-email".to_string();
        values.gender = "ROBOT".to_string();

        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some("Invalid Email"));
        assert_eq!(errors.get(Field::Gender), Some("Invalid gender"));
        assert_eq!(errors.get(Field::FirstName), None);
    }

    #[test]
    fn test_validate_rejects_wrapped_email() {
        let mut values = jane();
        values.email = "Jane Doe <jane@doe.com>".to_string();
        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Invalid Email"));
    }

    #[test]
    fn test_middle_name_is_required() {
        let mut values = jane();
        values.middle_name.clear();
        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.get(Field::MiddleName), Some("Middle Name is required"));
    }
}
