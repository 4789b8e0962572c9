//! Page-independent pieces of the CK Blogsite front-end.
//!
//! Everything here is free of DOM access so it can be driven from the
//! browser apps and from native tests alike.

pub mod blog;
pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod home;
pub mod route;
pub mod strength;
pub mod submission;
pub mod transport;
pub mod validation;

pub use config::MockConfig;
pub use error::{ConfigError, Result, SubmissionError};
pub use field::{Field, FieldStore, FormValues, ValidationErrors};
pub use form::FormKind;
pub use route::{AppKind, Route};
pub use submission::{FormSubmission, SubmissionState, SubmitOutcome};
pub use transport::{Clock, MockTransport, Transport};
