//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed step order within a tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{hit_distance, out_of_bounds};
pub use spawn::spawn_enemy;
pub use state::{Enemy, Hsl, Particle, Player, Projectile, Session, SessionPhase};
pub use tick::{SessionEvent, tick};
