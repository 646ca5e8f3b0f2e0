//! The multiverse show: routes host input to the current universe and owns
//! the session-wide application state — current stage, the recipient's
//! name, and the audio channels.

use starlit_core::{InputEvent, InputQueue, Rng, Show, ShowConfig, ShowContext, UiEvent};

use crate::poem::prompt_for;
use crate::script::REQUIRED_NAME;
use crate::stage::{StageController, StageId};
use crate::stages::chaos::ChaosStage;
use crate::stages::fate::FateStage;
use crate::stages::hope::HopeStage;
use crate::stages::intro::IntroStage;
use crate::stages::real::RealStage;
use crate::stages::{ATLAS_ROW_CONFETTI, CONFETTI_COLORS, WORLD_HEIGHT, WORLD_WIDTH};

/// Fixed logic rate; matches the ShowConfig.
pub const FIXED_DT: f32 = 1.0 / 60.0;
const DEFAULT_SEED: u64 = 42;

// UI events (Rust → host).
pub const EVENT_STAGE: f32 = 1.0;
pub const EVENT_COLLAPSE: f32 = 2.0;
pub const EVENT_GENERATE_READY: f32 = 3.0;
pub const EVENT_POEM_REQUESTED: f32 = 4.0;
pub const EVENT_POEM_READY: f32 = 5.0;
pub const EVENT_GAME_WON: f32 = 6.0;
pub const EVENT_SECTION: f32 = 7.0;
pub const EVENT_LETTER: f32 = 8.0;

// Custom events (host → Rust).
pub const CUSTOM_CONFIG: u32 = 1;
pub const CUSTOM_BEGIN: u32 = 2;
pub const CUSTOM_GENERATE: u32 = 3;
pub const CUSTOM_CONTINUE: u32 = 4;
pub const CUSTOM_VOICE_TOGGLE: u32 = 5;
pub const CUSTOM_VOICE_ENDED: u32 = 6;
pub const CUSTOM_AMBIENT_TOGGLE: u32 = 7;
pub const CUSTOM_AMBIENT_BLOCKED: u32 = 8;
pub const CUSTOM_SCROLL_TO: u32 = 9;

// Text messages (host → Rust).
pub const TEXT_POEM_RESULT: u32 = 1;

// String queries (host polls).
pub const QUERY_DISPLAY: u32 = 1;
pub const QUERY_NAME: u32 = 2;
pub const QUERY_POEM: u32 = 3;
pub const QUERY_POEM_PROMPT: u32 = 4;

// Tween completion callbacks.
pub const TWEEN_FATE_ZOOM: u32 = 1;

const KEY_ARROW_DOWN: u32 = 40;

/// The recipient's name. Defaults to the dedication and is overwritten
/// exactly once, when the Fate monologue is confirmed.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    name: String,
}

impl UserIdentity {
    pub fn new() -> Self {
        Self {
            name: REQUIRED_NAME.to_owned(),
        }
    }

    pub fn set(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Multiverse {
    controller: StageController,
    identity: UserIdentity,
    rng: Rng,
    credentialed: bool,
    collapse_was_active: bool,
    intro: IntroStage,
    fate: FateStage,
    chaos: ChaosStage,
    hope: HopeStage,
    real: RealStage,
}

impl Multiverse {
    pub fn new() -> Self {
        Self {
            controller: StageController::new(),
            identity: UserIdentity::new(),
            rng: Rng::new(DEFAULT_SEED),
            credentialed: false,
            collapse_was_active: false,
            intro: IntroStage,
            fate: FateStage::new(),
            chaos: ChaosStage::new(),
            hope: HopeStage::new(),
            real: RealStage::new(),
        }
    }

    fn enter_stage(&mut self, ctx: &mut ShowContext, stage: StageId) {
        ctx.clear_stage();
        match stage {
            StageId::Intro => self.intro.enter(ctx, &mut self.rng),
            StageId::Fate => self.fate.enter(ctx, &mut self.rng, self.credentialed),
            StageId::Chaos => self.chaos.enter(ctx, &mut self.rng),
            StageId::Hope => self.hope.enter(ctx),
            StageId::Real => self.real.enter(ctx, &mut self.rng),
        }
        ctx.emit_event(UiEvent {
            kind: EVENT_STAGE,
            a: stage.index() as f32,
            ..Default::default()
        });
    }

    fn handle_custom(&mut self, ctx: &mut ShowContext, kind: u32, a: f32, b: f32) {
        let stage = self.controller.current();
        match kind {
            CUSTOM_CONFIG => {
                self.credentialed = a != 0.0;
                let seed = b as u64;
                self.rng = Rng::new(if seed == 0 { DEFAULT_SEED } else { seed });
            }
            CUSTOM_AMBIENT_TOGGLE => ctx.audio.toggle_ambient(),
            CUSTOM_AMBIENT_BLOCKED => ctx.audio.autoplay_blocked(),
            CUSTOM_VOICE_ENDED => ctx.audio.voice_ended(),
            CUSTOM_BEGIN if stage == StageId::Intro => {
                self.controller.request(StageId::Fate, false);
            }
            CUSTOM_GENERATE if stage == StageId::Fate => {
                self.fate.generate(ctx, &mut self.identity);
            }
            CUSTOM_VOICE_TOGGLE if stage == StageId::Chaos => self.chaos.voice_toggle(ctx),
            CUSTOM_SCROLL_TO if stage == StageId::Hope => {
                self.hope.scroll_to(ctx, a.max(0.0) as usize);
            }
            CUSTOM_CONTINUE => match stage {
                StageId::Fate if self.fate.revealed() => {
                    self.controller.request(StageId::Chaos, false);
                }
                StageId::Chaos if self.chaos.resolved() => {
                    self.controller.request(StageId::Hope, false);
                }
                StageId::Hope => {
                    self.controller.request(StageId::Real, true);
                }
                _ => {}
            },
            _ => {}
        }
    }
}

impl Default for Multiverse {
    fn default() -> Self {
        Self::new()
    }
}

impl Show for Multiverse {
    fn config(&self) -> ShowConfig {
        ShowConfig {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ..ShowConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut ShowContext) {
        ctx.confetti.set_atlas(ATLAS_ROW_CONFETTI, CONFETTI_COLORS);
        self.intro.enter(ctx, &mut self.rng);
        // Autoplay attempt; the host reports back if the browser refuses.
        ctx.audio.start_ambient();
        ctx.emit_event(UiEvent {
            kind: EVENT_STAGE,
            a: StageId::Intro.index() as f32,
            ..Default::default()
        });
    }

    fn update(&mut self, ctx: &mut ShowContext, input: &InputQueue) {
        // Host text responses first (poem delivery).
        let mail = std::mem::take(&mut ctx.mailbox);
        for msg in mail {
            if msg.kind == TEXT_POEM_RESULT && self.controller.current() == StageId::Fate {
                self.fate.poem_delivered(ctx, &msg.body);
            }
        }

        // Animation callbacks from the previous step.
        for id in ctx.tweens.drain_completed() {
            if id == TWEEN_FATE_ZOOM {
                self.fate.zoom_complete(ctx, &mut self.rng);
            }
        }

        for event in input.iter() {
            let stage = self.controller.current();
            match *event {
                InputEvent::Custom { kind, a, b, .. } => self.handle_custom(ctx, kind, a, b),
                InputEvent::PointerDown { x, y } if stage == StageId::Chaos => {
                    self.chaos.pointer_down(ctx, x, y);
                }
                InputEvent::KeyDown { key_code }
                    if stage == StageId::Hope && key_code == KEY_ARROW_DOWN =>
                {
                    self.hope.scroll_next(ctx);
                }
                _ => {}
            }
        }

        // Stage transitions.
        self.controller.tick(FIXED_DT);
        let collapse = self.controller.collapse_active();
        if collapse != self.collapse_was_active {
            self.collapse_was_active = collapse;
            ctx.emit_event(UiEvent {
                kind: EVENT_COLLAPSE,
                a: collapse as u32 as f32,
                ..Default::default()
            });
        }
        if let Some(change) = self.controller.take_change() {
            self.enter_stage(ctx, change.to);
        }

        // Current universe logic.
        match self.controller.current() {
            StageId::Fate => self.fate.tick(ctx, FIXED_DT),
            StageId::Chaos => self.chaos.tick(ctx, FIXED_DT),
            StageId::Real => self.real.tick(ctx, &mut self.rng, FIXED_DT),
            StageId::Intro | StageId::Hope => {}
        }
    }

    fn query(&self, key: u32) -> String {
        match key {
            QUERY_DISPLAY => self.fate.display().to_owned(),
            QUERY_NAME => self.identity.name().to_owned(),
            QUERY_POEM => self.fate.poem_text().unwrap_or_default().to_owned(),
            QUERY_POEM_PROMPT => prompt_for(self.identity.name()),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_game::{PictureId, DECK_SIZE, PICTURE_COUNT};
    use crate::poem::FALLBACK_VERSE;
    use crate::stages::chaos::card_center;
    use starlit_core::AudioCue;

    fn step(show: &mut Multiverse, ctx: &mut ShowContext, input: &InputQueue) {
        show.update(ctx, input);
        ctx.tick_animations(FIXED_DT);
    }

    fn drive(show: &mut Multiverse, ctx: &mut ShowContext, seconds: f32) {
        let empty = InputQueue::new();
        let steps = (seconds / FIXED_DT).ceil() as usize;
        for _ in 0..steps {
            step(show, ctx, &empty);
        }
    }

    fn send(show: &mut Multiverse, ctx: &mut ShowContext, event: InputEvent) {
        let mut q = InputQueue::new();
        q.push(event);
        step(show, ctx, &q);
    }

    fn custom(kind: u32) -> InputEvent {
        InputEvent::Custom {
            kind,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        }
    }

    fn booted() -> (Multiverse, ShowContext) {
        let mut show = Multiverse::new();
        let mut ctx = ShowContext::new();
        show.init(&mut ctx);
        (show, ctx)
    }

    fn solve_board(show: &mut Multiverse, ctx: &mut ShowContext) {
        for pic in 0..PICTURE_COUNT as u8 {
            let members: Vec<usize> = (0..DECK_SIZE)
                .filter(|&i| show.chaos.game.picture(i) == PictureId(pic))
                .collect();
            for &index in &members {
                let c = card_center(index);
                send(show, ctx, InputEvent::PointerDown { x: c.x, y: c.y });
            }
        }
        drive(show, ctx, 0.6);
    }

    #[test]
    fn init_attempts_ambient_autoplay() {
        let (show, ctx) = booted();
        assert_eq!(show.controller.current(), StageId::Intro);
        assert!(ctx.audio.ambient_playing());
        assert!(ctx.audio.queued().contains(&AudioCue::AMBIENT_PLAY));
    }

    #[test]
    fn full_journey_without_credential() {
        let (mut show, mut ctx) = booted();

        // Intro → Fate.
        send(&mut show, &mut ctx, custom(CUSTOM_BEGIN));
        assert_eq!(show.controller.current(), StageId::Fate);

        // The monologue lands on the name.
        drive(&mut show, &mut ctx, 10.0);
        assert_eq!(show.query(QUERY_DISPLAY), REQUIRED_NAME);

        // Continue is refused before the reveal.
        send(&mut show, &mut ctx, custom(CUSTOM_CONTINUE));
        assert_eq!(show.controller.current(), StageId::Fate);

        // Generate: fallback poem, zoom, reveal.
        send(&mut show, &mut ctx, custom(CUSTOM_GENERATE));
        drive(&mut show, &mut ctx, 2.8);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_POEM_READY));
        assert_eq!(show.query(QUERY_POEM), FALLBACK_VERSE);
        assert_eq!(show.query(QUERY_NAME), REQUIRED_NAME);

        // Fate → Chaos; solve the board.
        send(&mut show, &mut ctx, custom(CUSTOM_CONTINUE));
        assert_eq!(show.controller.current(), StageId::Chaos);
        solve_board(&mut show, &mut ctx);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_GAME_WON));

        // The unlocked voice log preempts and then restores the music.
        send(&mut show, &mut ctx, custom(CUSTOM_VOICE_TOGGLE));
        assert!(ctx.audio.voice_playing());
        assert!(!ctx.audio.ambient_playing());
        send(&mut show, &mut ctx, custom(CUSTOM_VOICE_ENDED));
        assert!(ctx.audio.ambient_playing());

        // Chaos → Hope → (collapse) → Real.
        send(&mut show, &mut ctx, custom(CUSTOM_CONTINUE));
        assert_eq!(show.controller.current(), StageId::Hope);
        send(&mut show, &mut ctx, custom(CUSTOM_CONTINUE));
        assert_eq!(show.controller.current(), StageId::Hope, "collapse holds");
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_COLLAPSE && e.a == 1.0));

        drive(&mut show, &mut ctx, 0.85);
        assert_eq!(show.controller.current(), StageId::Real);
        drive(&mut show, &mut ctx, 0.6);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_COLLAPSE && e.a == 0.0));
        assert!(ctx
            .events
            .iter()
            .any(|e| e.kind == EVENT_STAGE && e.a == StageId::Real.index() as f32));

        // The letter arrives.
        drive(&mut show, &mut ctx, 1.2);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_LETTER));
        assert!(show.real.letter_shown());
    }

    #[test]
    fn credentialed_poem_round_trip() {
        let (mut show, mut ctx) = booted();
        send(
            &mut show,
            &mut ctx,
            InputEvent::Custom {
                kind: CUSTOM_CONFIG,
                a: 1.0,
                b: 7.0,
                c: 0.0,
            },
        );
        send(&mut show, &mut ctx, custom(CUSTOM_BEGIN));
        drive(&mut show, &mut ctx, 10.0);
        send(&mut show, &mut ctx, custom(CUSTOM_GENERATE));
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_POEM_REQUESTED));

        // The host answers through the mailbox.
        ctx.post_text(starlit_core::TextMessage {
            kind: TEXT_POEM_RESULT,
            body: "Orbit me, always".into(),
        });
        drive(&mut show, &mut ctx, 2.8);
        assert_eq!(show.query(QUERY_POEM), "Orbit me, always");
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_POEM_READY));
    }

    #[test]
    fn continue_spam_during_collapse_is_ignored() {
        let (mut show, mut ctx) = booted();
        send(&mut show, &mut ctx, custom(CUSTOM_BEGIN));
        drive(&mut show, &mut ctx, 10.0);
        send(&mut show, &mut ctx, custom(CUSTOM_GENERATE));
        drive(&mut show, &mut ctx, 2.8);
        send(&mut show, &mut ctx, custom(CUSTOM_CONTINUE));
        solve_board(&mut show, &mut ctx);
        send(&mut show, &mut ctx, custom(CUSTOM_CONTINUE));

        // Hope: fire the collapse, then spam continue mid-flight.
        send(&mut show, &mut ctx, custom(CUSTOM_CONTINUE));
        for _ in 0..5 {
            send(&mut show, &mut ctx, custom(CUSTOM_CONTINUE));
        }
        drive(&mut show, &mut ctx, 1.5);
        assert_eq!(show.controller.current(), StageId::Real);
        // Exactly one Real entry.
        let real_entries = ctx
            .events
            .iter()
            .filter(|e| e.kind == EVENT_STAGE && e.a == StageId::Real.index() as f32)
            .count();
        assert_eq!(real_entries, 1);
    }

    #[test]
    fn ambient_toggle_and_autoplay_block() {
        let (mut show, mut ctx) = booted();
        send(&mut show, &mut ctx, custom(CUSTOM_AMBIENT_BLOCKED));
        assert!(!ctx.audio.ambient_playing());
        send(&mut show, &mut ctx, custom(CUSTOM_AMBIENT_TOGGLE));
        assert!(ctx.audio.ambient_playing());
        send(&mut show, &mut ctx, custom(CUSTOM_AMBIENT_TOGGLE));
        assert!(!ctx.audio.ambient_playing());
    }

    #[test]
    fn queries_default_to_the_dedication() {
        let (show, _ctx) = booted();
        assert_eq!(show.query(QUERY_NAME), REQUIRED_NAME);
        assert_eq!(show.query(QUERY_DISPLAY), "");
        assert_eq!(show.query(QUERY_POEM), "");
        assert!(show.query(QUERY_POEM_PROMPT).contains(REQUIRED_NAME));
        assert_eq!(show.query(999), "");
    }

    #[test]
    fn chaos_rebuilds_its_deck_on_each_visit() {
        let (mut show, mut ctx) = booted();
        show.controller.request(StageId::Chaos, false);
        drive(&mut show, &mut ctx, 0.05);
        assert_eq!(show.controller.current(), StageId::Chaos);

        // Make some progress on the first board.
        let members: Vec<usize> = (0..DECK_SIZE)
            .filter(|&i| show.chaos.game.picture(i) == PictureId(0))
            .collect();
        for &index in &members {
            let c = card_center(index);
            send(&mut show, &mut ctx, InputEvent::PointerDown { x: c.x, y: c.y });
        }
        assert_eq!(show.chaos.game.solved_count(), 2);

        // Leaving and returning discards the progress with the old deck.
        show.controller.request(StageId::Hope, false);
        drive(&mut show, &mut ctx, 0.05);
        show.controller.request(StageId::Chaos, false);
        drive(&mut show, &mut ctx, 0.05);

        assert_eq!(show.chaos.game.solved_count(), 0);
        assert!(!show.chaos.game.won());
        for pic in 0..PICTURE_COUNT as u8 {
            let count = show
                .chaos
                .game
                .deck()
                .iter()
                .filter(|p| **p == PictureId(pic))
                .count();
            assert_eq!(count, 2);
        }
    }
}
