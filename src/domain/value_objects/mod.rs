//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod contact;
mod duplicate_check;
mod rating;

pub use contact::{is_valid_contact, ContactId};
pub use duplicate_check::DuplicateCheck;
pub use rating::{
    mean, reader_accepts, work_accepts, RatingInput, READER_RATING_LIMIT, WORK_RATING_MAX,
};
