//! corti-auth
//!
//! Portal authentication and session lifecycle. The session is an explicit
//! capability ([`session::SessionHandle`]) passed into whatever performs
//! authenticated calls — acquired at login, invalidated at logout or when the
//! backend answers 401. No ambient global token.

pub mod client;
pub mod error;
pub mod flows;
pub mod session;

pub use error::AuthError;
pub use session::{Session, SessionHandle};
