//! triplog - Travel journal with date-aware places
//!
//! Journals (trips) have a date range; places attached to them are either
//! visited or planned. Which of the two is allowed, and on which dates,
//! depends on whether the trip is in the future, ongoing or past.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TriplogError;
