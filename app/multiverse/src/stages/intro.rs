//! The title screen: a nebula, drifting stars, and the begin control.

use glam::Vec2;
use starlit_core::{
    BlendMode, Easing, Entity, RenderLayer, Rng, ShowContext, SpriteComponent, Tween, TweenLoop,
};

use super::{
    ATLAS_ROW_BACKDROPS, ATLAS_ROW_UI, COL_BACKDROP_NEBULA, COL_STAR, WORLD_HEIGHT, WORLD_WIDTH,
};

const STAR_COUNT: usize = 40;

#[derive(Default)]
pub struct IntroStage;

impl IntroStage {
    pub fn enter(&mut self, ctx: &mut ShowContext, rng: &mut Rng) {
        let bg_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(bg_id)
                .with_tag("backdrop")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
                .with_scale(Vec2::splat(WORLD_WIDTH))
                .with_layer(RenderLayer::Backdrop)
                .with_sprite(SpriteComponent {
                    col: COL_BACKDROP_NEBULA,
                    row: ATLAS_ROW_BACKDROPS,
                    ..Default::default()
                }),
        );

        spawn_starfield(ctx, rng, STAR_COUNT);
    }
}

/// Scatter twinkling stars over the backdrop. Shared with the Fate screen.
pub fn spawn_starfield(ctx: &mut ShowContext, rng: &mut Rng, count: usize) {
    for _ in 0..count {
        let id = ctx.next_id();
        let pos = Vec2::new(
            rng.next_f32() * WORLD_WIDTH,
            rng.next_f32() * WORLD_HEIGHT,
        );
        let size = 1.0 + rng.next_f32() * 3.0;
        let base_alpha = 0.2 + rng.next_f32() * 0.8;
        ctx.scene.spawn(
            Entity::new(id)
                .with_pos(pos)
                .with_scale(Vec2::splat(size))
                .with_layer(RenderLayer::Scenery)
                .with_sprite(SpriteComponent {
                    col: COL_STAR,
                    row: ATLAS_ROW_UI,
                    alpha: base_alpha,
                    blend: BlendMode::Additive,
                    ..Default::default()
                }),
        );
        // A slow twinkle, desynchronized by the random duration.
        ctx.tweens.add(
            id,
            Tween::alpha(
                base_alpha,
                base_alpha * 0.2,
                1.5 + rng.next_f32() * 3.5,
                Easing::SineInOut,
            )
            .with_loop(TweenLoop::PingPong),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_spawns_backdrop_and_stars() {
        let mut ctx = ShowContext::new();
        let mut rng = Rng::new(42);
        IntroStage.enter(&mut ctx, &mut rng);

        assert_eq!(ctx.scene.len(), 1 + STAR_COUNT);
        assert!(ctx.scene.find_by_tag("backdrop").is_some());
        // Every star twinkles.
        assert_eq!(ctx.tweens.len(), STAR_COUNT);
    }

    #[test]
    fn stars_land_inside_the_world() {
        let mut ctx = ShowContext::new();
        let mut rng = Rng::new(7);
        spawn_starfield(&mut ctx, &mut rng, 100);
        for e in ctx.scene.iter() {
            assert!((0.0..=WORLD_WIDTH).contains(&e.pos.x));
            assert!((0.0..=WORLD_HEIGHT).contains(&e.pos.y));
        }
    }
}
