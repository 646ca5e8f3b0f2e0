//! The Real universe: confetti, floating hearts, and the letter.

use glam::Vec2;
use starlit_core::{
    Countdown, Easing, Entity, EntityId, RenderLayer, Rng, ShowContext, SpriteComponent, Tween,
    TweenLoop, UiEvent,
};

use crate::show::EVENT_LETTER;
use crate::stages::{
    ATLAS_ROW_BACKDROPS, ATLAS_ROW_UI, COL_BACKDROP_PAPER, COL_HEART, COL_LETTER, WORLD_HEIGHT,
    WORLD_WIDTH,
};

/// Total confetti celebration time.
const CONFETTI_SECONDS: f32 = 3.0;
/// Interval between confetti volleys.
const BURST_CADENCE: f32 = 0.25;
/// Pieces per side at full intensity; decays linearly over the celebration.
const BURST_BASE_COUNT: f32 = 50.0;
const BURST_SPEED: f32 = 260.0;

/// Delay before the letter slides in.
const LETTER_DELAY: f32 = 1.0;

const HEART_COUNT: usize = 15;

pub struct RealStage {
    confetti_left: f32,
    cadence: Countdown,
    letter: Countdown,
    letter_shown: bool,
    letter_id: EntityId,
}

impl RealStage {
    pub fn new() -> Self {
        Self {
            confetti_left: 0.0,
            cadence: Countdown::new(),
            letter: Countdown::new(),
            letter_shown: false,
            letter_id: EntityId(0),
        }
    }

    pub fn enter(&mut self, ctx: &mut ShowContext, rng: &mut Rng) {
        self.confetti_left = CONFETTI_SECONDS;
        self.cadence.start(BURST_CADENCE);
        self.letter.start(LETTER_DELAY);
        self.letter_shown = false;

        let bg_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(bg_id)
                .with_tag("backdrop")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
                .with_scale(Vec2::splat(WORLD_WIDTH))
                .with_layer(RenderLayer::Backdrop)
                .with_sprite(SpriteComponent {
                    col: COL_BACKDROP_PAPER,
                    row: ATLAS_ROW_BACKDROPS,
                    ..Default::default()
                }),
        );

        for _ in 0..HEART_COUNT {
            let id = ctx.next_id();
            let x = rng.next_f32() * WORLD_WIDTH;
            let size = 20.0 + rng.next_f32() * 40.0;
            let start = Vec2::new(x, WORLD_HEIGHT + 60.0);
            ctx.scene.spawn(
                Entity::new(id)
                    .with_pos(start)
                    .with_scale(Vec2::splat(size))
                    .with_layer(RenderLayer::Scenery)
                    .with_sprite(SpriteComponent {
                        col: COL_HEART,
                        row: ATLAS_ROW_UI,
                        alpha: 0.35,
                        ..Default::default()
                    }),
            );
            ctx.tweens.add(
                id,
                Tween::position(
                    start,
                    Vec2::new(x, -80.0),
                    10.0 + rng.next_f32() * 10.0,
                    Easing::Linear,
                )
                .with_loop(TweenLoop::Loop),
            );
        }

        // The letter waits just below its resting spot, invisible.
        let center = Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        self.letter_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(self.letter_id)
                .with_tag("letter")
                .with_pos(center + Vec2::new(0.0, 50.0))
                .with_scale(Vec2::splat(520.0))
                .with_layer(RenderLayer::Content)
                .with_sprite(SpriteComponent {
                    col: COL_LETTER,
                    row: ATLAS_ROW_UI,
                    alpha: 0.0,
                    ..Default::default()
                }),
        );
    }

    pub fn tick(&mut self, ctx: &mut ShowContext, rng: &mut Rng, dt: f32) {
        if self.letter.tick(dt) {
            self.letter_shown = true;
            let center = Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
            ctx.tweens
                .add(self.letter_id, Tween::fade_in(0.8, Easing::CubicOut));
            ctx.tweens.add(
                self.letter_id,
                Tween::position(center + Vec2::new(0.0, 50.0), center, 0.8, Easing::CubicOut),
            );
            ctx.emit_event(UiEvent {
                kind: EVENT_LETTER,
                ..Default::default()
            });
        }

        if self.confetti_left > 0.0 {
            self.confetti_left -= dt;
            if self.cadence.tick(dt) {
                let intensity = (self.confetti_left / CONFETTI_SECONDS).max(0.0);
                let count = (BURST_BASE_COUNT * intensity) as usize;
                if count > 0 {
                    // Volleys from both edges, near the top of the screen.
                    let y = rng.next_f32() * WORLD_HEIGHT * 0.3;
                    let left = WORLD_WIDTH * (0.1 + 0.2 * rng.next_f32());
                    let right = WORLD_WIDTH * (0.7 + 0.2 * rng.next_f32());
                    ctx.confetti.burst(Vec2::new(left, y), BURST_SPEED, count);
                    ctx.confetti.burst(Vec2::new(right, y), BURST_SPEED, count);
                }
                if self.confetti_left > 0.0 {
                    self.cadence.start(BURST_CADENCE);
                }
            }
        }
    }

    pub fn letter_shown(&self) -> bool {
        self.letter_shown
    }
}

impl Default for RealStage {
    fn default() -> Self {
        Self::new()
    }
}
