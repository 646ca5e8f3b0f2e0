//! The Chaos universe: glitch backdrop, the photo-matching puzzle, and the
//! voice log unlocked by restoring the timeline.

use glam::Vec2;
use starlit_core::{
    Easing, Entity, EntityId, RenderLayer, Rng, ShowContext, SpriteComponent, Tween, UiEvent,
};

use crate::match_game::{MatchGame, MatchSignal, SelectOutcome, DECK_SIZE};
use crate::show::EVENT_GAME_WON;
use crate::stages::{
    ATLAS_ROW_BACKDROPS, ATLAS_ROW_PHOTOS, ATLAS_ROW_UI, COL_BACKDROP_STATIC, COL_BACKDROP_VIDEO,
    COL_CARD_BACK, WORLD_HEIGHT, WORLD_WIDTH,
};

pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = 2;
pub const CARD_SIZE: f32 = 110.0;
pub const CARD_GAP: f32 = 16.0;

const FLIP_SECONDS: f32 = 0.4;
/// A face-up card stays washed out until its pair is confirmed.
const UNSOLVED_FACE_ALPHA: f32 = 0.65;

fn grid_origin() -> Vec2 {
    let grid_w = GRID_COLS as f32 * CARD_SIZE + (GRID_COLS - 1) as f32 * CARD_GAP;
    let grid_h = GRID_ROWS as f32 * CARD_SIZE + (GRID_ROWS - 1) as f32 * CARD_GAP;
    Vec2::new((WORLD_WIDTH - grid_w) / 2.0, (WORLD_HEIGHT - grid_h) / 2.0)
}

/// World-space center of a card slot.
pub fn card_center(index: usize) -> Vec2 {
    let origin = grid_origin();
    let col = (index % GRID_COLS) as f32;
    let row = (index / GRID_COLS) as f32;
    Vec2::new(
        origin.x + col * (CARD_SIZE + CARD_GAP) + CARD_SIZE / 2.0,
        origin.y + row * (CARD_SIZE + CARD_GAP) + CARD_SIZE / 2.0,
    )
}

/// Card slot under a world-space point, if the point is on a card (not in a
/// gap or outside the grid).
pub fn card_at(x: f32, y: f32) -> Option<usize> {
    let origin = grid_origin();
    let local = Vec2::new(x - origin.x, y - origin.y);
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let pitch = CARD_SIZE + CARD_GAP;
    let (col, row) = ((local.x / pitch) as usize, (local.y / pitch) as usize);
    if col >= GRID_COLS || row >= GRID_ROWS {
        return None;
    }
    let in_card = local.x % pitch < CARD_SIZE && local.y % pitch < CARD_SIZE;
    in_card.then_some(row * GRID_COLS + col)
}

pub struct ChaosStage {
    pub(crate) game: MatchGame,
    resolved: bool,
    card_ids: [EntityId; DECK_SIZE],
    glitch_id: EntityId,
    video_id: EntityId,
    /// Atlas cell of the card back, resolved from the manifest when present.
    card_back: (f32, f32),
}

impl ChaosStage {
    pub fn new() -> Self {
        let mut rng = Rng::new(1);
        Self {
            game: MatchGame::new(&mut rng),
            resolved: false,
            card_ids: [EntityId(0); DECK_SIZE],
            glitch_id: EntityId(0),
            video_id: EntityId(0),
            card_back: (COL_CARD_BACK, ATLAS_ROW_UI),
        }
    }

    /// Fresh shuffled deck on every mount.
    pub fn enter(&mut self, ctx: &mut ShowContext, rng: &mut Rng) {
        self.game.reset(rng);
        self.resolved = false;
        self.card_back = ctx
            .manifest
            .as_ref()
            .and_then(|m| m.sprites.get("card_back"))
            .map(|s| (s.col as f32, s.row as f32))
            .unwrap_or((COL_CARD_BACK, ATLAS_ROW_UI));

        self.glitch_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(self.glitch_id)
                .with_tag("glitch")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
                .with_scale(Vec2::splat(WORLD_WIDTH))
                .with_layer(RenderLayer::Backdrop)
                .with_sprite(SpriteComponent {
                    col: COL_BACKDROP_STATIC,
                    row: ATLAS_ROW_BACKDROPS,
                    ..Default::default()
                }),
        );

        // The memory video sits underneath, dormant until the win.
        self.video_id = ctx.next_id();
        let mut video = Entity::new(self.video_id)
            .with_tag("video")
            .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
            .with_scale(Vec2::splat(WORLD_WIDTH))
            .with_layer(RenderLayer::Backdrop)
            .with_sprite(SpriteComponent {
                col: COL_BACKDROP_VIDEO,
                row: ATLAS_ROW_BACKDROPS,
                alpha: 0.0,
                ..Default::default()
            });
        video.active = false;
        ctx.scene.spawn(video);

        for index in 0..DECK_SIZE {
            let id = ctx.next_id();
            self.card_ids[index] = id;
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(format!("card{index}"))
                    .with_pos(card_center(index))
                    .with_scale(Vec2::splat(CARD_SIZE))
                    .with_layer(RenderLayer::Content)
                    .with_sprite(SpriteComponent {
                        col: self.card_back.0,
                        row: self.card_back.1,
                        ..Default::default()
                    }),
            );
        }
    }

    pub fn pointer_down(&mut self, ctx: &mut ShowContext, x: f32, y: f32) {
        let Some(index) = card_at(x, y) else {
            return;
        };
        match self.game.select(index) {
            SelectOutcome::Ignored => {}
            SelectOutcome::Revealed(i) => self.show_face(ctx, i),
            SelectOutcome::Mismatched(_, b) => self.show_face(ctx, b),
            SelectOutcome::Matched(a, b) => {
                self.show_face(ctx, b);
                // Pair confirmed: both photos colorize.
                self.set_face_alpha(ctx, a, 1.0);
                self.set_face_alpha(ctx, b, 1.0);
            }
        }
    }

    pub fn tick(&mut self, ctx: &mut ShowContext, dt: f32) {
        match self.game.tick(dt) {
            None => {}
            Some(MatchSignal::FlipBack(a, b)) => {
                self.hide_face(ctx, a);
                self.hide_face(ctx, b);
            }
            Some(MatchSignal::Won) => {
                self.resolved = true;
                if let Some(glitch) = ctx.scene.get_mut(self.glitch_id) {
                    glitch.active = false;
                }
                if let Some(video) = ctx.scene.get_mut(self.video_id) {
                    video.active = true;
                }
                ctx.tweens
                    .add(self.video_id, Tween::alpha(0.0, 0.6, 1.0, Easing::QuadOut));
                ctx.emit_event(UiEvent {
                    kind: EVENT_GAME_WON,
                    ..Default::default()
                });
            }
        }
    }

    /// The voice-log button. Only live once the timeline is restored.
    pub fn voice_toggle(&mut self, ctx: &mut ShowContext) {
        if self.resolved {
            ctx.audio.toggle_voice();
        }
    }

    pub fn resolved(&self) -> bool {
        self.resolved
    }

    fn show_face(&self, ctx: &mut ShowContext, index: usize) {
        let id = self.card_ids[index];
        let picture = self.game.picture(index);
        ctx.tweens.remove_entity(id);
        if let Some(entity) = ctx.scene.get_mut(id) {
            entity.sprite = Some(SpriteComponent {
                col: picture.0 as f32,
                row: ATLAS_ROW_PHOTOS,
                alpha: UNSOLVED_FACE_ALPHA,
                ..Default::default()
            });
            ctx.tweens.add(
                id,
                Tween::rotation(std::f32::consts::PI, 0.0, FLIP_SECONDS, Easing::QuadOut),
            );
        }
    }

    fn hide_face(&self, ctx: &mut ShowContext, index: usize) {
        let id = self.card_ids[index];
        ctx.tweens.remove_entity(id);
        if let Some(entity) = ctx.scene.get_mut(id) {
            entity.sprite = Some(SpriteComponent {
                col: self.card_back.0,
                row: self.card_back.1,
                ..Default::default()
            });
            ctx.tweens.add(
                id,
                Tween::rotation(-std::f32::consts::PI, 0.0, FLIP_SECONDS, Easing::QuadOut),
            );
        }
    }

    fn set_face_alpha(&self, ctx: &mut ShowContext, index: usize, alpha: f32) {
        if let Some(entity) = ctx.scene.get_mut(self.card_ids[index]) {
            if let Some(sprite) = &mut entity.sprite {
                sprite.alpha = alpha;
            }
        }
    }
}

impl Default for ChaosStage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_game::PictureId;

    const DT: f32 = 1.0 / 60.0;

    fn drive(stage: &mut ChaosStage, ctx: &mut ShowContext, seconds: f32) {
        let steps = (seconds / DT).ceil() as usize;
        for _ in 0..steps {
            stage.tick(ctx, DT);
            ctx.tick_animations(DT);
        }
    }

    fn entered_stage() -> (ChaosStage, ShowContext) {
        let mut ctx = ShowContext::new();
        let mut rng = Rng::new(42);
        let mut stage = ChaosStage::new();
        stage.enter(&mut ctx, &mut rng);
        (stage, ctx)
    }

    /// Indices paired by picture, for solving the board in tests.
    fn pairs(stage: &ChaosStage) -> Vec<(usize, usize)> {
        let mut result = Vec::new();
        for pic in 0..crate::match_game::PICTURE_COUNT as u8 {
            let members: Vec<usize> = (0..DECK_SIZE)
                .filter(|&i| stage.game.picture(i) == PictureId(pic))
                .collect();
            result.push((members[0], members[1]));
        }
        result
    }

    #[test]
    fn enter_builds_a_full_grid() {
        let (_, ctx) = entered_stage();
        for i in 0..DECK_SIZE {
            assert!(ctx.scene.find_by_tag(&format!("card{i}")).is_some());
        }
        assert!(ctx.scene.find_by_tag("glitch").unwrap().active);
        assert!(!ctx.scene.find_by_tag("video").unwrap().active);
    }

    #[test]
    fn card_hit_testing_matches_centers() {
        for index in 0..DECK_SIZE {
            let c = card_center(index);
            assert_eq!(card_at(c.x, c.y), Some(index));
        }
        // A point in the gap between cards hits nothing.
        let c0 = card_center(0);
        assert_eq!(card_at(c0.x + CARD_SIZE / 2.0 + CARD_GAP / 2.0, c0.y), None);
        assert_eq!(card_at(-10.0, -10.0), None);
    }

    #[test]
    fn tapping_a_card_flips_it_face_up() {
        let (mut stage, mut ctx) = entered_stage();
        let c = card_center(3);
        stage.pointer_down(&mut ctx, c.x, c.y);
        assert!(stage.game.is_revealed(3));
        let card = ctx.scene.find_by_tag("card3").unwrap();
        let sprite = card.sprite.as_ref().unwrap();
        assert_eq!(sprite.row, ATLAS_ROW_PHOTOS);
    }

    #[test]
    fn mismatched_cards_return_to_backs() {
        let (mut stage, mut ctx) = entered_stage();
        let (a, _) = pairs(&stage)[0];
        let (b, _) = pairs(&stage)[1];
        let ca = card_center(a);
        let cb = card_center(b);
        stage.pointer_down(&mut ctx, ca.x, ca.y);
        stage.pointer_down(&mut ctx, cb.x, cb.y);

        drive(&mut stage, &mut ctx, 1.1);
        let card = ctx.scene.find_by_tag(&format!("card{a}")).unwrap();
        assert_eq!(card.sprite.as_ref().unwrap().row, ATLAS_ROW_UI);
        assert!(!stage.game.is_face_up(a));
    }

    #[test]
    fn solving_the_board_resolves_the_stage() {
        let (mut stage, mut ctx) = entered_stage();
        for (a, b) in pairs(&stage) {
            let ca = card_center(a);
            let cb = card_center(b);
            stage.pointer_down(&mut ctx, ca.x, ca.y);
            stage.pointer_down(&mut ctx, cb.x, cb.y);
        }
        assert!(!stage.resolved(), "win signal is delayed");

        drive(&mut stage, &mut ctx, 0.6);
        assert!(stage.resolved());
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_GAME_WON));
        assert!(!ctx.scene.find_by_tag("glitch").unwrap().active);
        assert!(ctx.scene.find_by_tag("video").unwrap().active);
    }

    #[test]
    fn voice_log_is_gated_on_the_win() {
        let (mut stage, mut ctx) = entered_stage();
        stage.voice_toggle(&mut ctx);
        assert!(!ctx.audio.voice_playing());

        for (a, b) in pairs(&stage) {
            let ca = card_center(a);
            let cb = card_center(b);
            stage.pointer_down(&mut ctx, ca.x, ca.y);
            stage.pointer_down(&mut ctx, cb.x, cb.y);
        }
        drive(&mut stage, &mut ctx, 0.6);

        stage.voice_toggle(&mut ctx);
        assert!(ctx.audio.voice_playing());
        stage.voice_toggle(&mut ctx);
        assert!(!ctx.audio.voice_playing());
    }
}
