//! Directory model (applications + password credentials) and sample derivation.
//!
//! - `application`: serde model of the directory listing payload.
//! - `sample`: turns one (application, credential) pair into an expiry sample.
//!
//! Everything here is pure and panic-free: missing names fall back to fixed
//! placeholders, a missing expiry is reported as `None` instead of an error.

pub mod application;
pub mod sample;

pub use application::{Application, ApplicationPage, PasswordCredential};
pub use sample::{ExpirySample, SampleKey, UNNAMED_APP, UNNAMED_CREDENTIAL};
