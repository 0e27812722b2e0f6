//! Hue Siege - a center-defense arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collision, lifecycle)
//! - `session`: Session controller wiring input, ticking, and termination
//! - `render`: Canvas 2D painter (wasm only)
//! - `settings`: Persisted preferences

pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod render;

pub use session::SessionController;
pub use settings::Settings;
pub use sim::SessionEvent;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference tick rate all speeds are expressed against (ticks per second)
    pub const TICK_HZ: f32 = 60.0;
    /// One reference tick, in milliseconds
    pub const TICK_MS: f32 = 1000.0 / TICK_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Default viewport extent; the wasm host overrides from the canvas size
    pub const VIEW_WIDTH: f32 = 1280.0;
    pub const VIEW_HEIGHT: f32 = 720.0;

    /// Player defaults - fixed at the viewport center
    pub const PLAYER_RADIUS: f32 = 25.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Projectile speed (units per reference tick)
    pub const PROJECTILE_SPEED: f32 = 8.0;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 1.0;
    /// Enemies at or below this radius are destroyed outright instead of shrunk
    pub const ENEMY_MIN_RADIUS: f32 = 10.0;
    pub const ENEMY_MAX_RADIUS: f32 = 30.0;
    /// Radius lost per resolved hit
    pub const ENEMY_SHRINK_STEP: f32 = 10.0;
    /// Cadence of the host's spawn timer (milliseconds)
    pub const SPAWN_INTERVAL_MS: i32 = 1000;

    /// Particle defaults
    pub const PARTICLE_RADIUS: f32 = 3.0;
    /// Velocity multiplier per reference tick
    pub const PARTICLE_FRICTION: f32 = 0.99;
    /// Opacity lost per reference tick
    pub const PARTICLE_ALPHA_DECAY: f32 = 0.03;
    /// Burst velocities are uniform in +-PARTICLE_KICK on each axis
    pub const PARTICLE_KICK: f32 = 4.0;

    /// Points per resolved hit, shrink or kill
    pub const HIT_SCORE: u64 = 10;
    /// Early-trigger margin on the enemy-reaches-player test
    pub const REACH_MARGIN: f32 = 2.0;
}

/// Unit vector pointing from `from` toward `to`
///
/// Coincident points yield the zero vector ("no motion") rather than NaN.
#[inline]
pub fn aim(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_unit_length() {
        let dir = aim(Vec2::new(100.0, 100.0), Vec2::new(400.0, 500.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y > 0.0);
    }

    #[test]
    fn test_aim_coincident_points() {
        let dir = aim(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0));
        assert_eq!(dir, Vec2::ZERO);
    }
}
