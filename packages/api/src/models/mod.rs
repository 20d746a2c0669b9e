//! Data models for the signup flow.

mod registration;

pub use registration::{Gender, ParseEnumError, Prefix, RegistrationRecord, SignupResponse};
