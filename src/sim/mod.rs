//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only (no delta-time scaling)
//! - Stable iteration order over entity lists
//! - No rendering or platform dependencies

pub mod collision;
pub mod interact;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Penetration};
pub use state::{GamePhase, Hazard, Pickup, Platform, Player, World};
pub use tick::tick;
