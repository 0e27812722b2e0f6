//! Session controller
//!
//! Owns the session and the fixed-timestep accumulator, and exposes the
//! operations the host wires to its event sources: `fire` to the pointer,
//! `spawn_enemy` to the 1000ms interval, `frame` to the animation loop,
//! `restart` to the scoreboard's button. Everything funnels through this one
//! owner, which is the serialization point of the concurrency model.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{self, Session, SessionEvent, SessionPhase};

pub struct SessionController {
    session: Session,
    view: Vec2,
    accumulator: f32,
}

impl SessionController {
    /// Create a controller with a freshly started session
    pub fn new(seed: u64, view: Vec2) -> Self {
        log::info!(
            "session started (seed {seed}, viewport {:.0}x{:.0})",
            view.x,
            view.y
        );
        Self {
            session: Session::new(seed, view),
            view,
            accumulator: 0.0,
        }
    }

    /// Begin a fresh session, fully superseding the previous one
    ///
    /// Score returns to 0, the player is recreated at the viewport center,
    /// and all collections are dropped along with the old session.
    pub fn start(&mut self, seed: u64) {
        log::info!("session started (seed {seed})");
        self.session = Session::new(seed, self.view);
        self.accumulator = 0.0;
    }

    /// Fire one projectile toward `target`; no-op unless Running
    pub fn fire(&mut self, target: Vec2) {
        self.session.fire(target);
    }

    /// One firing of the host's spawn timer; no-op unless Running
    pub fn spawn_enemy(&mut self) {
        sim::spawn_enemy(&mut self.session);
    }

    /// Advance the simulation by `dt` reference ticks
    pub fn tick(&mut self, dt: f32) -> Vec<SessionEvent> {
        sim::tick(&mut self.session, dt)
    }

    /// Restart from the Ended state; no-op while Running
    pub fn restart(&mut self, seed: u64) {
        if self.session.phase == SessionPhase::Ended {
            self.start(seed);
        }
    }

    /// Fixed-timestep frame driver for the host's animation loop
    ///
    /// Accumulates wall-clock time (expressed in reference ticks) and runs
    /// whole one-tick steps, capped so a stalled tab cannot trigger a
    /// spiral of death. Returns every event from every substep.
    pub fn frame(&mut self, elapsed_ticks: f32) -> Vec<SessionEvent> {
        self.accumulator += elapsed_ticks.min(MAX_SUBSTEPS as f32);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= 1.0 && substeps < MAX_SUBSTEPS {
            events.extend(self.tick(1.0));
            self.accumulator -= 1.0;
            substeps += 1;
        }
        events
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Enemy, Hsl};

    fn view() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    /// Park an enemy on the player so the next tick ends the session
    fn force_end(controller: &mut SessionController) {
        let player_pos = controller.session().player.pos;
        controller.session.enemies.push(Enemy {
            pos: player_pos,
            radius: 20.0,
            color: Hsl { h: 0.0, s: 50.0, l: 50.0 },
            vel: Vec2::ZERO,
        });
        let events = controller.tick(1.0);
        assert!(matches!(
            events.last(),
            Some(SessionEvent::SessionEnded { .. })
        ));
    }

    #[test]
    fn test_restart_only_from_ended() {
        let mut controller = SessionController::new(42, view());
        controller.fire(Vec2::new(0.0, 0.0));
        assert_eq!(controller.session().projectiles.len(), 1);

        // Running: restart must not supersede the live session
        controller.restart(43);
        assert_eq!(controller.session().projectiles.len(), 1);

        force_end(&mut controller);
        controller.restart(43);
        assert!(controller.is_running());
        assert_eq!(controller.session().seed, 43);
    }

    #[test]
    fn test_restart_is_idempotent_reset() {
        let mut controller = SessionController::new(1, view());
        for round in 0..3u64 {
            controller.spawn_enemy();
            controller.fire(Vec2::new(700.0, 80.0));
            controller.tick(1.0);
            force_end(&mut controller);
            controller.restart(round + 2);

            let session = controller.session();
            assert_eq!(session.score, 0);
            assert_eq!(session.player.pos, view() / 2.0);
            assert!(session.projectiles.is_empty());
            assert!(session.particles.is_empty());
            assert!(session.enemies.is_empty());
        }
    }

    #[test]
    fn test_fire_and_spawn_frozen_after_end() {
        let mut controller = SessionController::new(7, view());
        force_end(&mut controller);

        controller.fire(Vec2::new(0.0, 0.0));
        controller.spawn_enemy();
        assert!(controller.session().projectiles.is_empty());
        // Only the enemy that ended the session remains
        assert_eq!(controller.session().enemies.len(), 1);
    }

    #[test]
    fn test_frame_runs_whole_ticks() {
        let mut controller = SessionController::new(11, view());
        controller.fire(Vec2::new(800.0, 300.0));
        let start_x = controller.session().projectiles[0].pos.x;

        // Two half-ticks buffer into one step
        controller.frame(0.5);
        assert_eq!(controller.session().time_ticks, 0);
        controller.frame(0.5);
        assert_eq!(controller.session().time_ticks, 1);
        let moved = controller.session().projectiles[0].pos.x - start_x;
        assert!((moved - PROJECTILE_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_frame_substep_cap() {
        let mut controller = SessionController::new(13, view());
        // A huge stall is clamped instead of replaying the backlog forever
        controller.frame(600.0);
        assert!(controller.session().time_ticks <= MAX_SUBSTEPS as u64);
    }
}
