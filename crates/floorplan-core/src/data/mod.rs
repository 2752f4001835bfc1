//! Static reference data for the editor
//!
//! This module provides:
//! - The fixed room-type catalog (name, minimum/maximum/recommended area)
//! - Area assessment against a room type's range

pub mod rooms;
