//! Itinerary evaluation and shortlist ranking.
//!
//! A library that answers: "which of these travel options should we
//! show the customer, and in what order?"

pub mod domain;
pub mod duration;
pub mod shortlist;
pub mod suffering;
pub mod trips;
