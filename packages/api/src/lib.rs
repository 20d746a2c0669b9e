//! # API crate — the signup contract and its HTTP client
//!
//! Shared by every GymBook frontend. It knows nothing about forms or rendering; it
//! defines what a finished registration looks like and how it reaches the
//! authentication server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`RegistrationRecord`], [`Prefix`], [`Gender`] and the opaque [`SignupResponse`] |
//! | [`client`] | The [`Submitter`] seam, the `reqwest`-backed [`HttpSubmitter`] and [`SubmitError`] |
//! | [`settings`] | Host/port of the authentication server, layered with the `config` crate |

pub mod client;
pub mod models;
pub mod settings;

pub use client::{HttpSubmitter, SubmitError, Submitter};
pub use models::{Gender, ParseEnumError, Prefix, RegistrationRecord, SignupResponse};
pub use settings::{Settings, SIGNUP_PATH};
