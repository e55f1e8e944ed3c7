//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendRequest;
pub use response::{MessageConfirmation, SendResult};
pub use validation::ValidationError;
pub use value::{MessageText, PhoneNumber, RawPhoneNumber, SenderNumber};
