use crate::api::types::{EntityId, TextMessage, UiEvent};
use crate::assets::manifest::AssetManifest;
use crate::core::audio::AudioMixer;
use crate::core::scene::Scene;
use crate::extensions::tween::TweenState;
use crate::input::queue::InputQueue;
use crate::systems::confetti::ConfettiState;

/// Configuration for the engine, provided by the show.
#[derive(Debug, Clone)]
pub struct ShowConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in design units.
    pub world_width: f32,
    /// World height in design units.
    pub world_height: f32,
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of audio cues per frame (default: 16).
    pub max_cues: usize,
    /// Maximum number of UI events per frame (default: 32).
    pub max_events: usize,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 256,
            max_cues: 16,
            max_events: 32,
        }
    }
}

/// The core contract every show must fulfill.
pub trait Show {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> ShowConfig {
        ShowConfig::default()
    }

    /// Setup initial state, spawn entities, start ambient audio.
    fn init(&mut self, ctx: &mut ShowContext);

    /// The show loop tick. Route input, advance timers, compose the scene.
    fn update(&mut self, ctx: &mut ShowContext, input: &InputQueue);

    /// Serve a string the host polls for (display buffers, generated text).
    /// Keys are show-defined; unknown keys return an empty string.
    fn query(&self, _key: u32) -> String {
        String::new()
    }
}

/// Mutable access to engine state, passed to Show::init and Show::update.
pub struct ShowContext {
    pub scene: Scene,
    pub tweens: TweenState,
    pub confetti: ConfettiState,
    pub audio: AudioMixer,
    pub events: Vec<UiEvent>,
    /// Inbound host messages with string payloads. The show drains this in
    /// update; pending messages survive frames with zero fixed steps.
    pub mailbox: Vec<TextMessage>,
    /// Parsed asset manifest, if the host provided one.
    pub manifest: Option<AssetManifest>,
    next_id: u32,
}

impl ShowContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            tweens: TweenState::new(),
            confetti: ConfettiState::new(42),
            audio: AudioMixer::new(),
            events: Vec::new(),
            mailbox: Vec::new(),
            manifest: None,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a UI event to be forwarded to the host.
    pub fn emit_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Deliver a host text message (picked up by the next update).
    pub fn post_text(&mut self, message: TextMessage) {
        self.mailbox.push(message);
    }

    /// Tear down everything owned by the current stage: entities, tweens,
    /// particles. Pending animation callbacks die here, so nothing fires
    /// against the next stage's state.
    pub fn clear_stage(&mut self) {
        self.scene.clear();
        self.tweens.clear();
        self.confetti.clear();
    }

    /// Advance the animation systems one fixed step.
    /// Called by the runner after `Show::update()`.
    pub fn tick_animations(&mut self, dt: f32) {
        self.tweens.tick(dt, &mut self.scene);
        self.confetti.tick(dt);
    }

    /// Clear per-frame transient data (events, packed audio cues).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.audio.clear_queued();
    }
}

impl Default for ShowContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::extensions::easing::Easing;
    use crate::extensions::tween::Tween;

    #[test]
    fn next_id_is_unique() {
        let mut ctx = ShowContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn clear_stage_cancels_pending_animation() {
        let mut ctx = ShowContext::new();
        let id = ctx.next_id();
        ctx.scene.spawn(Entity::new(id));
        ctx.tweens
            .add(id, Tween::rotation(0.0, 1.0, 1.0, Easing::Linear));

        ctx.clear_stage();
        assert!(ctx.scene.is_empty());
        assert!(ctx.tweens.is_empty());
    }

    #[test]
    fn tick_animations_advances_tweens() {
        let mut ctx = ShowContext::new();
        let id = ctx.next_id();
        ctx.scene.spawn(Entity::new(id));
        ctx.tweens
            .add(id, Tween::rotation(0.0, 2.0, 1.0, Easing::Linear));

        ctx.tick_animations(0.5);
        let e = ctx.scene.get(id).unwrap();
        assert!((e.rotation - 1.0).abs() < 0.01);
    }

    #[test]
    fn mailbox_survives_clear_frame_data() {
        let mut ctx = ShowContext::new();
        ctx.post_text(TextMessage {
            kind: 1,
            body: "hello".into(),
        });
        ctx.clear_frame_data();
        assert_eq!(ctx.mailbox.len(), 1);
    }
}
