//! Voronoi generator points.
//!
//! A [`SiteSet`] is the whole scene: an ordered, capacity-bounded list of
//! [`Site`]s. Order matters, since the lowest index wins distance ties.

mod error;
mod set;
mod site;

pub use error::SiteSetError;
pub use set::{SiteSet, MAX_SITES};
pub use site::Site;
