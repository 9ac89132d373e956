//! Lookup-site helpers for the freegeoip front end.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`record`] | `LocationRecord` as returned by `GET /json/{query}` |
//! | [`view`] | `MapView` zoom ladder and the `MapEmbed` URL template |
//! | [`endpoints`] | lookup and crowd-sourced submission URLs |
//! | [`error`] | `GeoError` |
//!
//! Transport is out of scope: callers fetch URLs with whatever client they use.

pub mod endpoints;
pub mod error;
pub mod record;
pub mod view;

pub use endpoints::Endpoints;
pub use error::GeoError;
pub use record::LocationRecord;
pub use view::{MapEmbed, MapView};
