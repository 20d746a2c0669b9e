//! # Registration record — the signup wire contract
//!
//! [`RegistrationRecord`] is the typed, already-validated payload sent to
//! `POST /api/v1/auth/signup`. It serializes to a flat JSON object with camelCase
//! keys where every value is a string:
//!
//! ```json
//! {
//!   "prefix": "MR", "firstName": "Jane", "middleName": "Q", "lastName": "Doe",
//!   "email": "jane@doe.com", "phone": "5551234", "gender": "FEMALE",
//!   "password": "secret", "dateOfBirth": "1990-01-01"
//! }
//! ```
//!
//! The two enumerations, [`Prefix`] and [`Gender`], use their upper-case names on
//! the wire and parse back from exactly those names.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Honorific shown before the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Prefix {
    Mr,
    Mrs,
    Miss,
}

impl Prefix {
    pub const ALL: [Prefix; 3] = [Prefix::Mr, Prefix::Mrs, Prefix::Miss];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Mr => "MR",
            Prefix::Mrs => "MRS",
            Prefix::Miss => "MISS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::Unspecified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
            Gender::Unspecified => "UNSPECIFIED",
        }
    }
}

/// Returned when a string is not one of an enumeration's wire names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Prefix {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "prefix",
                value: s.to_string(),
            })
    }
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "gender",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete, validated signup request.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub prefix: Prefix,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub password: String,
    pub date_of_birth: NaiveDate,
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("prefix", &self.prefix)
            .field("first_name", &self.first_name)
            .field("middle_name", &self.middle_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("gender", &self.gender)
            .field("password", &"<redacted>")
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

/// Body returned by the signup endpoint. The client does not interpret it.
pub type SignupResponse = serde_json::Value;
