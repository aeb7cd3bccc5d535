//! corti-backend
//!
//! Typed client for the portal backend: the GraphQL endpoint that owns
//! audiograms, appointments and the hearing-aid catalog, plus the REST
//! endpoint that runs AI analysis on uploaded audiogram images. Every call
//! presents the bearer token held by the [`corti_auth::SessionHandle`] and
//! invalidates it when the backend answers 401.

pub mod analyze;
pub mod client;
pub mod error;
pub mod graphql;
pub mod operations;

mod integrations;

pub use client::PortalClient;
pub use error::ApiError;
pub use operations::{CreatedAudiogram, Dashboard, NewAppointment};
