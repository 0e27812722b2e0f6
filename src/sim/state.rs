//! Session state and core entity types
//!
//! Entities are plain data plus one `advance` rule apiece. Removal is never
//! decided here - the lifecycle engine in `tick` owns every destruction.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of a session
///
/// Running accepts fire commands, ticking, and spawning. Ended is frozen and
/// accepts only a restart. There is no pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    Ended,
}

/// HSL color, stored rather than recomputed
///
/// Enemy hues are drawn once at spawn and never change afterward. The CSS
/// formatting lives in the renderer; the simulation only carries the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const WHITE: Hsl = Hsl { h: 0.0, s: 0.0, l: 100.0 };
    /// Near-white used for projectiles
    pub const PALE: Hsl = Hsl { h: 0.0, s: 0.0, l: 94.0 };

    /// Uniformly random hue at the fixed enemy saturation/lightness
    pub fn random_hue(rng: &mut Pcg32) -> Self {
        Hsl {
            h: rng.random_range(0.0..360.0),
            s: 50.0,
            l: 50.0,
        }
    }
}

/// The player avatar, fixed at the viewport center for the session's lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Hsl,
}

/// A fired projectile - constant velocity, no drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Hsl,
    pub vel: Vec2,
}

impl Projectile {
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// A cosmetic burst fragment - decaying velocity and opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Hsl,
    pub vel: Vec2,
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, color: Hsl, vel: Vec2) -> Self {
        Self {
            pos,
            radius: PARTICLE_RADIUS,
            color,
            vel,
            alpha: 1.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        // Friction compounds per reference tick; alpha decays linearly.
        self.vel *= PARTICLE_FRICTION.powf(dt);
        self.alpha -= PARTICLE_ALPHA_DECAY * dt;
        self.pos += self.vel * dt;
    }
}

/// A converging enemy
///
/// Velocity is aimed at the player's position once at spawn and never
/// retargeted. Radius shrinks on hits; the engine destroys any enemy that
/// would drop to or below `ENEMY_MIN_RADIUS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Hsl,
    pub vel: Vec2,
}

impl Enemy {
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Complete session state
///
/// Owns the three live collections, the score, and the phase flag. All
/// mutation funnels through the tick engine, the spawner, and `fire` - the
/// single logical writer of the concurrency model.
pub struct Session {
    /// Seed for reproducibility
    pub seed: u64,
    /// Viewport extent; spawn edges and projectile bounds derive from it
    pub view: Vec2,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,
    pub enemies: Vec<Enemy>,
    /// Monotonically nondecreasing; +10 per resolved hit
    pub score: u64,
    pub phase: SessionPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Fresh session: score 0, player centered, empty collections
    pub fn new(seed: u64, view: Vec2) -> Self {
        Self {
            seed,
            view,
            player: Player {
                pos: view / 2.0,
                radius: PLAYER_RADIUS,
                color: Hsl::WHITE,
            },
            projectiles: Vec::new(),
            particles: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            phase: SessionPhase::Running,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Fire one projectile from the player toward `target`
    ///
    /// No-op unless Running. A target coincident with the player produces a
    /// stationary projectile rather than a NaN velocity; it expires against
    /// the first enemy to walk over the player, never against the bounds.
    pub fn fire(&mut self, target: Vec2) {
        if !self.is_running() {
            return;
        }
        let vel = crate::aim(self.player.pos, target) * PROJECTILE_SPEED;
        self.projectiles.push(Projectile {
            pos: self.player.pos,
            radius: PROJECTILE_RADIUS,
            color: Hsl::PALE,
            vel,
        });
    }
}
