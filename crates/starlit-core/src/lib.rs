pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::show::{Show, ShowConfig, ShowContext};
pub use api::types::{AudioCue, EntityId, TextMessage, UiEvent};
pub use assets::manifest::AssetManifest;
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{AtlasId, BlendMode, SpriteComponent};
pub use core::audio::AudioMixer;
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use core::timer::Countdown;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::confetti::{Confetto, ConfettiState};
pub use systems::render::build_render_buffer;

// Extensions — decoupled optional systems
pub use extensions::{
    ease, ease_vec2, lerp, lerp_vec2, Easing, Tween, TweenId, TweenLoop, TweenState, TweenTarget,
};
