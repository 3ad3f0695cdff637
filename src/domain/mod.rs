//! Domain value objects and types.
//!
//! Type-safe wrappers for the values a contact is made of. Each one is
//! validated at construction time so invalid data cannot be represented
//! anywhere else in the crate.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::BirthdayDate;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
