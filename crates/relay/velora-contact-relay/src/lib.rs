//! Velora Contact Relay
//!
//! A small intake service for the contact form: it validates the submitted
//! fields, composes a notification email, and hands it to the outbound mail
//! provider over HTTP. Provider failures never leak detail to the client;
//! the handler answers with one of a fixed set of Spanish error messages.

pub mod config;
pub mod email;
pub mod error;
pub mod labels;
pub mod mailer;
pub mod payload;
pub mod routes;

pub use config::RelayConfig;
pub use email::OutboundEmail;
pub use error::RelayError;
pub use mailer::{HttpMailer, Mailer};
pub use payload::ContactPayload;
pub use routes::{router, AppState};
