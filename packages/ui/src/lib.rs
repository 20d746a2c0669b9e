//! This crate contains the GymBook signup UI and the form state behind it.
//!
//! [`form`] is plain Rust with no rendering: the draft, touched tracking, the
//! validation ruleset and the submit flow. [`Signup`] binds it to Dioxus.

pub mod form;
pub use form::{
    Field, FormValues, NotStarted, ResetPolicy, SignupForm, SubmitOutcome, ValidationErrors,
};

mod signup;
pub use signup::Signup;
