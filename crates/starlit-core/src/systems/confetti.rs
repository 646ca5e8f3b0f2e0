//! Confetti particle system for the celebration screens.

use glam::Vec2;

use crate::core::rng::Rng;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// A single confetti piece with ballistic state.
#[derive(Debug, Clone)]
pub struct Confetto {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub spin: f32,
    pub size: f32,
    /// Atlas column (picks the piece's color cell).
    pub sprite_col: f32,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

impl Confetto {
    /// Advance physics. Returns false when expired.
    pub fn tick(&mut self, gravity: f32, drag: f32, dt: f32) -> bool {
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            return false;
        }
        self.vel.y += gravity * dt;
        self.vel *= 1.0 - drag;
        self.pos += self.vel * dt;
        self.rotation += self.spin * dt;
        true
    }

    /// Opacity, fading out over the final third of the lifetime.
    pub fn alpha(&self) -> f32 {
        let fade_window = self.max_lifetime / 3.0;
        (self.lifetime / fade_window).clamp(0.0, 1.0)
    }
}

/// All live confetti plus the spawning parameters.
pub struct ConfettiState {
    particles: Vec<Confetto>,
    rng: Rng,
    gravity: f32,
    drag: f32,
    max_particles: usize,
    /// Atlas row shared by every confetti sprite.
    atlas_row: f32,
    /// Number of distinct color cells available in that row.
    color_cells: u32,
}

impl ConfettiState {
    pub const DEFAULT_GRAVITY: f32 = 420.0;
    pub const DEFAULT_DRAG: f32 = 0.012;
    pub const DEFAULT_MAX: usize = 600;
    pub const DEFAULT_LIFETIME: f32 = 2.5;

    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(Self::DEFAULT_MAX),
            rng: Rng::new(seed),
            gravity: Self::DEFAULT_GRAVITY,
            drag: Self::DEFAULT_DRAG,
            max_particles: Self::DEFAULT_MAX,
            atlas_row: 0.0,
            color_cells: 1,
        }
    }

    /// Point the spawner at the confetti cells of the sprite atlas.
    pub fn set_atlas(&mut self, row: f32, color_cells: u32) {
        self.atlas_row = row;
        self.color_cells = color_cells.max(1);
    }

    /// Spawn a radial burst of `count` pieces at `origin`.
    /// Respects the particle cap; excess pieces are dropped.
    pub fn burst(&mut self, origin: Vec2, base_speed: f32, count: usize) {
        let room = count.min(self.max_particles.saturating_sub(self.particles.len()));
        for _ in 0..room {
            let angle = self.rng.next_f32() * std::f32::consts::TAU;
            let speed = base_speed * (0.4 + 0.6 * self.rng.next_f32());
            let lifetime = Self::DEFAULT_LIFETIME * (0.6 + 0.4 * self.rng.next_f32());
            self.particles.push(Confetto {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                rotation: self.rng.next_f32() * std::f32::consts::TAU,
                spin: (self.rng.next_f32() - 0.5) * 12.0,
                size: 4.0 + self.rng.next_f32() * 6.0,
                sprite_col: self.rng.next_int(self.color_cells) as f32,
                lifetime,
                max_lifetime: lifetime,
            });
        }
    }

    /// Advance all particles, dropping the expired.
    pub fn tick(&mut self, dt: f32) {
        let (gravity, drag) = (self.gravity, self.drag);
        self.particles.retain_mut(|p| p.tick(gravity, drag, dt));
    }

    /// Append live particles to the render buffer as additive instances.
    /// Called after entity instances are built, so the pieces land in the
    /// additive tail of the buffer.
    pub fn append_instances(&self, buffer: &mut RenderBuffer) {
        for p in &self.particles {
            buffer.push(RenderInstance {
                x: p.pos.x,
                y: p.pos.y,
                rotation: p.rotation,
                scale: p.size,
                sprite_col: p.sprite_col,
                alpha: p.alpha(),
                cell_span: 1.0,
                atlas_row: self.atlas_row,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
