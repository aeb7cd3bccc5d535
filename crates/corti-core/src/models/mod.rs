//! Backend-facing models, shaped to the portal's GraphQL/REST wire format.

pub mod appointment;
pub mod audiogram;
pub mod hearing_aid;
pub mod recommendation;
pub mod user;

pub use appointment::{Appointment, AppointmentReason, AppointmentStatus};
pub use audiogram::{Audiogram, AudiogramSummary};
pub use hearing_aid::{HearingAid, HearingAidSummary};
pub use recommendation::{Recommendation, retain_valid};
pub use user::{User, UserRole};
