//! The Hope universe: three snap sections of warmth, ending on the question.

use glam::Vec2;
use starlit_core::{
    BlendMode, Easing, Entity, RenderLayer, ShowContext, SpriteComponent, Tween, TweenLoop, UiEvent,
};

use crate::show::EVENT_SECTION;
use crate::stages::{
    ATLAS_ROW_BACKDROPS, ATLAS_ROW_UI, COL_ARROW, COL_BACKDROP_DAWN, COL_SUN, COL_WASH,
    WORLD_HEIGHT, WORLD_WIDTH,
};

/// Sunrise, the verse, the question.
pub const SECTION_COUNT: usize = 3;

pub struct HopeStage {
    section: usize,
}

impl HopeStage {
    pub fn new() -> Self {
        Self { section: 0 }
    }

    pub fn enter(&mut self, ctx: &mut ShowContext) {
        self.section = 0;

        let bg_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(bg_id)
                .with_tag("backdrop")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
                .with_scale(Vec2::splat(WORLD_WIDTH))
                .with_layer(RenderLayer::Backdrop)
                .with_sprite(SpriteComponent {
                    col: COL_BACKDROP_DAWN,
                    row: ATLAS_ROW_BACKDROPS,
                    ..Default::default()
                }),
        );

        // The rose-colored wash that sweeps the screen on entry.
        let wash_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(wash_id)
                .with_tag("wash")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
                .with_scale(Vec2::splat(40.0))
                .with_layer(RenderLayer::Overlay)
                .with_sprite(SpriteComponent {
                    col: COL_WASH,
                    row: ATLAS_ROW_UI,
                    ..Default::default()
                }),
        );
        ctx.tweens.add(
            wash_id,
            Tween::scale_uniform(40.0, WORLD_WIDTH * 5.0, 1.5, Easing::ExpoOut),
        );
        ctx.tweens
            .add(wash_id, Tween::fade_out(1.5, Easing::ExpoOut));

        // Slowly turning sun glow in the corner.
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag("sun")
                .with_pos(Vec2::new(WORLD_WIDTH - 80.0, 60.0))
                .with_scale(Vec2::splat(300.0))
                .with_layer(RenderLayer::Scenery)
                .with_sprite(SpriteComponent {
                    col: COL_SUN,
                    row: ATLAS_ROW_UI,
                    alpha: 0.4,
                    blend: BlendMode::Additive,
                    ..Default::default()
                }),
        );
        ctx.tweens.add(
            sun_id,
            Tween::rotation(0.0, std::f32::consts::TAU, 20.0, Easing::Linear)
                .with_loop(TweenLoop::Loop),
        );
        ctx.tweens.add(
            sun_id,
            Tween::scale_uniform(300.0, 330.0, 10.0, Easing::SineInOut)
                .with_loop(TweenLoop::PingPong),
        );

        // Bobbing scroll hint.
        let arrow_id = ctx.next_id();
        let arrow_pos = Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT - 50.0);
        ctx.scene.spawn(
            Entity::new(arrow_id)
                .with_tag("hint")
                .with_pos(arrow_pos)
                .with_scale(Vec2::splat(32.0))
                .with_layer(RenderLayer::Foreground)
                .with_sprite(SpriteComponent {
                    col: COL_ARROW,
                    row: ATLAS_ROW_UI,
                    ..Default::default()
                }),
        );
        ctx.tweens.add(
            arrow_id,
            Tween::position(
                arrow_pos,
                arrow_pos + Vec2::new(0.0, 10.0),
                1.0,
                Easing::SineInOut,
            )
            .with_loop(TweenLoop::PingPong),
        );
    }

    /// Snap to a section (host scroll observer or key navigation).
    pub fn scroll_to(&mut self, ctx: &mut ShowContext, section: usize) {
        let section = section.min(SECTION_COUNT - 1);
        if section == self.section {
            return;
        }
        self.section = section;
        ctx.emit_event(UiEvent {
            kind: EVENT_SECTION,
            a: section as f32,
            ..Default::default()
        });
        // The hint disappears once she reaches the question.
        if section == SECTION_COUNT - 1 {
            if let Some(hint) = ctx.scene.find_by_tag_mut("hint") {
                hint.active = false;
            }
        }
    }

    pub fn scroll_next(&mut self, ctx: &mut ShowContext) {
        self.scroll_to(ctx, self.section + 1);
    }

    pub fn section(&self) -> usize {
        self.section
    }
}

impl Default for HopeStage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entered_stage() -> (HopeStage, ShowContext) {
        let mut ctx = ShowContext::new();
        let mut stage = HopeStage::new();
        stage.enter(&mut ctx);
        (stage, ctx)
    }

    #[test]
    fn enter_starts_on_the_sunrise() {
        let (stage, ctx) = entered_stage();
        assert_eq!(stage.section(), 0);
        assert!(ctx.scene.find_by_tag("sun").is_some());
        assert!(ctx.scene.find_by_tag("hint").unwrap().active);
    }

    #[test]
    fn sections_advance_and_clamp() {
        let (mut stage, mut ctx) = entered_stage();
        stage.scroll_next(&mut ctx);
        assert_eq!(stage.section(), 1);
        stage.scroll_next(&mut ctx);
        stage.scroll_next(&mut ctx);
        stage.scroll_next(&mut ctx);
        assert_eq!(stage.section(), SECTION_COUNT - 1);

        let section_events = ctx
            .events
            .iter()
            .filter(|e| e.kind == EVENT_SECTION)
            .count();
        assert_eq!(section_events, 2, "clamped scrolls emit nothing");
    }

    #[test]
    fn hint_hides_on_the_question() {
        let (mut stage, mut ctx) = entered_stage();
        stage.scroll_to(&mut ctx, 2);
        assert!(!ctx.scene.find_by_tag("hint").unwrap().active);
    }

    #[test]
    fn wash_sweep_fades_out() {
        let (_, mut ctx) = entered_stage();
        for _ in 0..(2.0 * 60.0) as usize {
            ctx.tick_animations(1.0 / 60.0);
        }
        let wash = ctx.scene.find_by_tag("wash").unwrap();
        assert!(wash.sprite.as_ref().unwrap().alpha < 0.01);
    }
}
