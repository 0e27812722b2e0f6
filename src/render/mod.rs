//! Canvas 2D painter
//!
//! The simulation never draws. Once per frame, after state mutation, the
//! painter walks the live collections and paints each entity as a filled
//! circle, preceded by a translucent full-viewport overlay that produces
//! the motion trails.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::settings::Settings;
use crate::sim::{Hsl, Session};

/// Format a stored color as a CSS `hsl()` string
pub fn css(color: Hsl) -> String {
    format!("hsl({:.0}, {:.0}%, {:.0}%)", color.h, color.s, color.l)
}

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    trail_fade: f64,
    particles: bool,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d, settings: &Settings) -> Self {
        Self {
            ctx,
            trail_fade: settings.effective_trail_fade(),
            particles: settings.particles,
        }
    }

    /// Paint one frame of the session
    pub fn paint(&self, session: &Session) {
        let view = session.view;
        self.ctx
            .set_fill_style_str(&format!("rgba(0, 0, 0, {})", self.trail_fade));
        self.ctx.fill_rect(0.0, 0.0, view.x as f64, view.y as f64);

        for shot in &session.projectiles {
            self.circle(shot.pos.x, shot.pos.y, shot.radius, shot.color);
        }
        if self.particles {
            for particle in &session.particles {
                self.ctx.set_global_alpha(particle.alpha as f64);
                self.circle(
                    particle.pos.x,
                    particle.pos.y,
                    particle.radius,
                    particle.color,
                );
                self.ctx.set_global_alpha(1.0);
            }
        }
        for enemy in &session.enemies {
            self.circle(enemy.pos.x, enemy.pos.y, enemy.radius, enemy.color);
        }
        let player = &session.player;
        self.circle(player.pos.x, player.pos.y, player.radius, player.color);
    }

    fn circle(&self, x: f32, y: f32, radius: f32, color: Hsl) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&css(color));
        let _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
        self.ctx.close_path();
    }
}
