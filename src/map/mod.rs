//! Map area: placeholder canvas, decorative markers, and the location pulse.
//!
//! This module paints the static map preview; there is no tile fetching or
//! geographic projection behind it.

pub mod markers;
pub mod pulse;
pub mod view;

pub use view::MapView;
