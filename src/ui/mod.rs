//! UI chrome for Pigeon Desktop.
//!
//! This module contains the header and navigation panels plus the shared
//! glass-morphism helpers used by the map overlays.

pub mod glass;
pub mod header;
pub mod nav;
