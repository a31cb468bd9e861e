//! Domain-registrar mocks.
//!
//! Two stateless endpoints that synthesize plausible responses without
//! touching persistence: an availability check (random answer) and a
//! registration echo with computed registration/expiration dates.

pub mod handlers;
pub mod models;

pub use handlers::ApiDoc;
pub use models::{DomainAvailability, DomainRegistration, RegisterDomain};
