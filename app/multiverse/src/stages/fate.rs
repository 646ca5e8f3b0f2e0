//! The Fate universe: the typewriter monologue, the name gate, and the
//! poem reveal behind a zooming star.

use glam::Vec2;
use starlit_core::{
    Countdown, Easing, Entity, EntityId, RenderLayer, Rng, ShowContext, SpriteComponent, Tween,
    TweenLoop, UiEvent,
};

use crate::poem::{PoemRequest, PoemSource};
use crate::script::{ScriptRunner, FATE_MONOLOGUE, REQUIRED_NAME};
use crate::show::{
    UserIdentity, EVENT_GENERATE_READY, EVENT_POEM_READY, EVENT_POEM_REQUESTED, TWEEN_FATE_ZOOM,
};
use crate::stages::intro::spawn_starfield;
use crate::stages::{
    ATLAS_ROW_BACKDROPS, ATLAS_ROW_UI, COL_BACKDROP_NIGHT, COL_STAR, COL_TOKEN, COL_WASH,
    WORLD_HEIGHT, WORLD_WIDTH,
};

/// Seconds the star takes to swallow the screen.
const ZOOM_SECONDS: f32 = 2.0;
/// Seconds between the zoom completing and the poem appearing.
const REVEAL_DELAY: f32 = 0.5;
const ZOOM_START_SIZE: f32 = 20.0;
const ZOOM_END_SIZE: f32 = 2400.0;

const STAR_COUNT: usize = 30;
const FALLING_STARS: usize = 12;

/// Floating memory tokens, as fractions of the world.
const MEMORY_SPOTS: [(f32, f32); 5] = [
    (0.20, 0.30),
    (0.70, 0.20),
    (0.40, 0.60),
    (0.80, 0.70),
    (0.10, 0.80),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FatePhase {
    /// The monologue is running (or has landed on the name).
    Scripting,
    /// Waiting for the host's poem response.
    AwaitingPoem,
    /// The star is expanding over the screen.
    Zooming,
    /// Poem visible, continue control armed.
    Revealed,
}

pub struct FateStage {
    script: ScriptRunner,
    poem: PoemSource,
    phase: FatePhase,
    gate_open: bool,
    zoom_id: Option<EntityId>,
    token_ids: Vec<EntityId>,
    reveal: Countdown,
}

impl FateStage {
    pub fn new() -> Self {
        Self {
            script: ScriptRunner::new(FATE_MONOLOGUE),
            poem: PoemSource::new(false),
            phase: FatePhase::Scripting,
            gate_open: false,
            zoom_id: None,
            token_ids: Vec::new(),
            reveal: Countdown::new(),
        }
    }

    pub fn enter(&mut self, ctx: &mut ShowContext, rng: &mut Rng, credentialed: bool) {
        self.script.restart();
        self.poem = PoemSource::new(credentialed);
        self.phase = FatePhase::Scripting;
        self.gate_open = false;
        self.reveal.cancel();
        self.token_ids.clear();

        let bg_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(bg_id)
                .with_tag("backdrop")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
                .with_scale(Vec2::splat(WORLD_WIDTH))
                .with_layer(RenderLayer::Backdrop)
                .with_sprite(SpriteComponent {
                    col: COL_BACKDROP_NIGHT,
                    row: ATLAS_ROW_BACKDROPS,
                    ..Default::default()
                }),
        );

        spawn_starfield(ctx, rng, STAR_COUNT);

        for (i, (fx, fy)) in MEMORY_SPOTS.iter().enumerate() {
            let id = ctx.next_id();
            self.token_ids.push(id);
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(format!("token{i}"))
                    .with_pos(Vec2::new(fx * WORLD_WIDTH, fy * WORLD_HEIGHT))
                    .with_scale(Vec2::splat(28.0))
                    .with_layer(RenderLayer::Scenery)
                    .with_sprite(SpriteComponent {
                        col: COL_TOKEN,
                        row: ATLAS_ROW_UI,
                        alpha: 0.8,
                        ..Default::default()
                    }),
            );
            // Gentle bobbing, offset per token.
            ctx.tweens.add(
                id,
                Tween::position(
                    Vec2::new(fx * WORLD_WIDTH, fy * WORLD_HEIGHT),
                    Vec2::new(fx * WORLD_WIDTH, fy * WORLD_HEIGHT - 8.0),
                    1.2 + i as f32 * 0.3,
                    Easing::SineInOut,
                )
                .with_loop(TweenLoop::PingPong),
            );
        }

        // The star that will swallow the screen, dormant until generate.
        let zoom_id = ctx.next_id();
        self.zoom_id = Some(zoom_id);
        ctx.scene.spawn(
            Entity::new(zoom_id)
                .with_tag("zoom")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
                .with_scale(Vec2::splat(ZOOM_START_SIZE))
                .with_layer(RenderLayer::Overlay)
                .with_sprite(SpriteComponent {
                    col: COL_WASH,
                    row: ATLAS_ROW_UI,
                    alpha: 0.0,
                    ..Default::default()
                }),
        );
    }

    pub fn tick(&mut self, ctx: &mut ShowContext, dt: f32) {
        if self.phase == FatePhase::Scripting {
            self.script.tick(dt);
            let open = self.script.display() == REQUIRED_NAME;
            if open != self.gate_open {
                self.gate_open = open;
                ctx.emit_event(UiEvent {
                    kind: EVENT_GENERATE_READY,
                    a: open as u32 as f32,
                    ..Default::default()
                });
            }
        }

        if self.reveal.tick(dt) {
            self.phase = FatePhase::Revealed;
            ctx.emit_event(UiEvent {
                kind: EVENT_POEM_READY,
                ..Default::default()
            });
        }
    }

    /// The "align the stars" control. Only honored while the display buffer
    /// equals the required name.
    pub fn generate(&mut self, ctx: &mut ShowContext, identity: &mut UserIdentity) {
        if self.phase != FatePhase::Scripting || !self.gate_open {
            return;
        }
        identity.set(self.script.display());
        // Control disabled for the rest of the flow.
        self.gate_open = false;
        ctx.emit_event(UiEvent {
            kind: EVENT_GENERATE_READY,
            a: 0.0,
            ..Default::default()
        });

        match self.poem.begin() {
            PoemRequest::Ready => self.start_zoom(ctx),
            PoemRequest::Forwarded => {
                self.phase = FatePhase::AwaitingPoem;
                ctx.emit_event(UiEvent {
                    kind: EVENT_POEM_REQUESTED,
                    ..Default::default()
                });
            }
        }
    }

    /// Host response for a forwarded poem request.
    pub fn poem_delivered(&mut self, ctx: &mut ShowContext, body: &str) {
        if self.poem.deliver(body) && self.phase == FatePhase::AwaitingPoem {
            self.start_zoom(ctx);
        }
    }

    /// Tween completion for the zoom overlay.
    pub fn zoom_complete(&mut self, ctx: &mut ShowContext, rng: &mut Rng) {
        if self.phase != FatePhase::Zooming {
            return;
        }
        self.reveal.start(REVEAL_DELAY);
        self.spawn_falling_stars(ctx, rng);
    }

    pub fn revealed(&self) -> bool {
        self.phase == FatePhase::Revealed
    }

    pub fn display(&self) -> &str {
        self.script.display()
    }

    pub fn poem_text(&self) -> Option<&str> {
        self.poem.text()
    }

    fn start_zoom(&mut self, ctx: &mut ShowContext) {
        self.phase = FatePhase::Zooming;

        // The memory tokens vanish behind the expanding star.
        for id in self.token_ids.drain(..) {
            ctx.tweens.remove_entity(id);
            ctx.scene.despawn(id);
        }

        if let Some(id) = self.zoom_id {
            if let Some(entity) = ctx.scene.get_mut(id) {
                if let Some(sprite) = &mut entity.sprite {
                    sprite.alpha = 1.0;
                }
            }
            ctx.tweens.add(
                id,
                Tween::scale_uniform(
                    ZOOM_START_SIZE,
                    ZOOM_END_SIZE,
                    ZOOM_SECONDS,
                    Easing::QuadInOut,
                )
                .with_on_complete(TWEEN_FATE_ZOOM),
            );
        }
    }

    fn spawn_falling_stars(&mut self, ctx: &mut ShowContext, rng: &mut Rng) {
        for _ in 0..FALLING_STARS {
            let id = ctx.next_id();
            let x = rng.next_f32() * WORLD_WIDTH;
            ctx.scene.spawn(
                Entity::new(id)
                    .with_pos(Vec2::new(x, -40.0))
                    .with_scale(Vec2::splat(5.0 + rng.next_f32() * 10.0))
                    .with_layer(RenderLayer::Vfx)
                    .with_sprite(SpriteComponent {
                        col: COL_STAR,
                        row: ATLAS_ROW_UI,
                        alpha: 0.9,
                        ..Default::default()
                    }),
            );
            ctx.tweens.add(
                id,
                Tween::position(
                    Vec2::new(x, -40.0),
                    Vec2::new(x, WORLD_HEIGHT + 40.0),
                    2.0 + rng.next_f32() * 3.0,
                    Easing::Linear,
                )
                .with_loop(TweenLoop::Loop),
            );
        }
    }
}

impl Default for FateStage {
    fn default() -> Self {
        Self::new()
    }
}
