//! Data Transfer Objects for REST request/response serialization.
//!
//! Field names are camelCase on the wire. Request fields are all
//! optional so that missing values reach validation and produce its
//! messages instead of a generic body rejection.

pub mod booking_dto;
pub mod content_dto;
pub mod signup_dto;

pub use booking_dto::*;
pub use content_dto::*;
pub use signup_dto::*;
