//! Outbound webhook notifications for Rota.
//!
//! Composes the "thanks + next turn" announcements from engine results and
//! posts them to an incoming-webhook URL. Delivery is fire-and-forget:
//! failures are logged and never surfaced to the HTTP response path.

pub mod error;
pub mod message;
pub mod notifier;

pub use error::{NotifyError, NotifyResult};
pub use message::{payment_message, turn_message};
pub use notifier::Notifier;
