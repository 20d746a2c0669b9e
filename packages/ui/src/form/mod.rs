//! Signup form state and validation, independent of rendering.

mod field;
pub mod rules;
mod state;

pub use field::{Field, FormValues};
pub use rules::{Rule, ValidationErrors};
pub use state::{NotStarted, ResetPolicy, SignupForm, SubmitOutcome};
