//! Quote-request relay: turns an inbound contact form payload into a single
//! notification email.

mod error;
mod mailer;
mod notification;
mod relay;
mod resend;
mod submission;

pub use error::*;
pub use mailer::*;
pub use notification::*;
pub use relay::*;
pub use resend::*;
pub use submission::*;
