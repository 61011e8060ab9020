//! Domain aggregates exposed by the phone book service layer.

pub mod contact;
pub mod types;
