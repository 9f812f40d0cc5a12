//! Domain types for itinerary evaluation.
//!
//! This module contains the core domain model types that represent
//! validated travel data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod error;
mod journey;
mod leg;
mod location;
mod route;
mod span;
mod trip;

pub use error::DomainError;
pub use journey::Journey;
pub use leg::Leg;
pub use location::{InvalidLocation, Location};
pub use route::Route;
pub use span::TimeSpan;
pub use trip::{BookingStatus, Trip};
