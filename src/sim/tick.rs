//! Per-frame lifecycle engine
//!
//! One `tick` advances every entity, then runs the fixed-order lifecycle
//! pass: particle expiry, projectile bounds expiry, projectile-enemy hit
//! tests, enemy-reaches-player test. Removal during the hit-test pass is
//! mark-and-sweep: marks accumulate while iterating and are applied after
//! the pass, so no index is skipped or visited twice.

use glam::Vec2;
use rand::Rng;

use super::collision::{hit_distance, out_of_bounds};
use super::state::{Particle, Session, SessionPhase};
use crate::consts::*;

/// Observable outcomes of one tick, for the host's scoreboard and effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// An enemy was shrunk by a projectile
    EnemyHit,
    /// An enemy was destroyed by a projectile
    EnemyDestroyed,
    /// An enemy reached the player; the session is now frozen
    SessionEnded { score: u64 },
}

/// Advance the session by `dt` reference ticks
///
/// No-op once Ended. The step order is load-bearing and must not be
/// reshuffled: advancement, particle expiry, projectile expiry, hit tests,
/// reach test.
pub fn tick(session: &mut Session, dt: f32) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    if !session.is_running() {
        return events;
    }
    session.time_ticks += 1;

    // Advance every live entity before any lifecycle decision. The player
    // never moves.
    for shot in &mut session.projectiles {
        shot.advance(dt);
    }
    for particle in &mut session.particles {
        particle.advance(dt);
    }
    for enemy in &mut session.enemies {
        enemy.advance(dt);
    }

    // 1. Particle expiry
    session.particles.retain(|p| p.alpha > 0.0);

    // 2. Projectile out-of-bounds expiry
    let view = session.view;
    session.projectiles.retain(|p| !out_of_bounds(p.pos, view));

    // 3. Per-enemy, per-projectile hit tests. Projectile marks are swept
    // only after the full pass, so one projectile can resolve hits against
    // several enemies in the same tick (encounter order; see the
    // multi-enemy test below). A destroyed enemy is never hit-tested again.
    let mut spent = vec![false; session.projectiles.len()];
    let mut destroyed: Vec<usize> = Vec::new();
    for e_idx in 0..session.enemies.len() {
        for p_idx in 0..session.projectiles.len() {
            let enemy = session.enemies[e_idx];
            let shot = session.projectiles[p_idx];
            if hit_distance(shot.pos, shot.radius, enemy.pos, enemy.radius) >= 0.0 {
                continue;
            }

            // Burst: one particle per whole unit of the enemy's current
            // radius, at the projectile's position, in the enemy's color.
            for _ in 0..enemy.radius as u32 {
                let kick = Vec2::new(
                    session.rng.random_range(-PARTICLE_KICK..PARTICLE_KICK),
                    session.rng.random_range(-PARTICLE_KICK..PARTICLE_KICK),
                );
                session
                    .particles
                    .push(Particle::new(shot.pos, enemy.color, kick));
            }

            spent[p_idx] = true;
            session.score += HIT_SCORE;

            if enemy.radius - ENEMY_SHRINK_STEP > ENEMY_MIN_RADIUS {
                // Survivable hit: the post-shrink radius is authoritative
                // for every later test this tick.
                session.enemies[e_idx].radius = enemy.radius - ENEMY_SHRINK_STEP;
                events.push(SessionEvent::EnemyHit);
            } else {
                destroyed.push(e_idx);
                events.push(SessionEvent::EnemyDestroyed);
                break;
            }
        }
    }

    // Sweep the marks. Enemy indices were collected ascending, so removing
    // from the back keeps the rest stable.
    let mut idx = 0;
    session.projectiles.retain(|_| {
        let keep = !spent[idx];
        idx += 1;
        keep
    });
    for &e_idx in destroyed.iter().rev() {
        session.enemies.remove(e_idx);
    }

    // 4. Enemy-reaches-player test, with the deliberate early-trigger margin
    let player = session.player;
    for enemy in &session.enemies {
        let safe = hit_distance(enemy.pos, enemy.radius, player.pos, player.radius);
        if safe + REACH_MARGIN < 0.0 {
            session.phase = SessionPhase::Ended;
            log::info!(
                "session ended: {} points after {} ticks",
                session.score,
                session.time_ticks
            );
            events.push(SessionEvent::SessionEnded {
                score: session.score,
            });
            break;
        }
    }

    events
}
