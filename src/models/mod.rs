//! Database models backing the phone book repository.

pub mod config;
pub mod contact;
