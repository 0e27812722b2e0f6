//! Time-driven enemy creation
//!
//! The host owns the 1000ms timer; each firing calls `spawn_enemy` once.
//! Spawning is purely additive and never fails.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, Hsl, Session};
use crate::aim;
use crate::consts::*;

/// Create one enemy on a random viewport edge, aimed at the player
///
/// The spawn position sits one enemy-radius outside the chosen edge so the
/// enemy enters fully off-screen. Axis and side are picked with equal
/// probability, the coordinate along the other axis uniformly. No-op unless
/// Running - the host's interval may race one last firing past session end.
pub fn spawn_enemy(session: &mut Session) {
    if !session.is_running() {
        return;
    }

    let view = session.view;
    let player_pos = session.player.pos;
    let rng = &mut session.rng;

    let radius = rng.random_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS);
    let pos = if rng.random_bool(0.5) {
        // Enter from the left or right edge, anywhere along the height
        let x = if rng.random_bool(0.5) { -radius } else { view.x + radius };
        Vec2::new(x, rng.random_range(0.0..view.y))
    } else {
        // Enter from the top or bottom edge, anywhere along the width
        let y = if rng.random_bool(0.5) { -radius } else { view.y + radius };
        Vec2::new(rng.random_range(0.0..view.x), y)
    };

    let vel = aim(pos, player_pos) * ENEMY_SPEED;
    let color = Hsl::random_hue(rng);

    log::debug!(
        "enemy spawned at ({:.0}, {:.0}) radius {:.1}",
        pos.x,
        pos.y,
        radius
    );

    session.enemies.push(Enemy {
        pos,
        radius,
        color,
        vel,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SessionPhase;

    fn view() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_spawn_is_additive() {
        let mut session = Session::new(3, view());
        for _ in 0..50 {
            spawn_enemy(&mut session);
        }
        assert_eq!(session.enemies.len(), 50);
    }

    #[test]
    fn test_spawn_radius_in_range() {
        let mut session = Session::new(11, view());
        for _ in 0..200 {
            spawn_enemy(&mut session);
        }
        for enemy in &session.enemies {
            assert!(enemy.radius >= ENEMY_MIN_RADIUS);
            assert!(enemy.radius < ENEMY_MAX_RADIUS);
        }
    }

    #[test]
    fn test_spawn_starts_fully_off_screen() {
        let mut session = Session::new(19, view());
        for _ in 0..200 {
            spawn_enemy(&mut session);
        }
        let v = view();
        for enemy in &session.enemies {
            let r = enemy.radius;
            let on_vertical_edge =
                (enemy.pos.x == -r || enemy.pos.x == v.x + r) && (0.0..v.y).contains(&enemy.pos.y);
            let on_horizontal_edge =
                (enemy.pos.y == -r || enemy.pos.y == v.y + r) && (0.0..v.x).contains(&enemy.pos.x);
            assert!(
                on_vertical_edge || on_horizontal_edge,
                "enemy spawned inside the viewport at {:?}",
                enemy.pos
            );
        }
    }

    #[test]
    fn test_spawn_aims_at_player() {
        let mut session = Session::new(23, view());
        for _ in 0..100 {
            spawn_enemy(&mut session);
        }
        let player_pos = session.player.pos;
        for enemy in &session.enemies {
            assert!((enemy.vel.length() - ENEMY_SPEED).abs() < 1e-5);
            // Velocity points along the spawn-to-player direction
            let dir = aim(enemy.pos, player_pos);
            assert!(enemy.vel.dot(dir) > 0.999 * ENEMY_SPEED);
        }
    }

    #[test]
    fn test_spawn_ignored_after_end() {
        let mut session = Session::new(5, view());
        session.phase = SessionPhase::Ended;
        spawn_enemy(&mut session);
        assert!(session.enemies.is_empty());
    }

    #[test]
    fn test_spawn_colors_are_distinct_hues() {
        let mut session = Session::new(31, view());
        for _ in 0..8 {
            spawn_enemy(&mut session);
        }
        let first = session.enemies[0].color;
        assert!(
            session.enemies.iter().any(|e| e.color.h != first.h),
            "independent uniform hue draws should not all collide"
        );
        for enemy in &session.enemies {
            assert_eq!(enemy.color.s, 50.0);
            assert_eq!(enemy.color.l, 50.0);
        }
    }
}
