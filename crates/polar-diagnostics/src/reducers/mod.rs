//! Azimuthal reductions of ring-sampled fields.

mod axisym;
mod azimuthal;
mod rmw;

pub use axisym::{axisymmetricity, Axisymmetricity};
pub use azimuthal::{circular_avg, CircularMean};
pub use rmw::{rmw, safe_search_radius};
