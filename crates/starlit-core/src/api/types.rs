use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A playback command for the host's audio elements.
/// The host maps each value to one of its two tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct AudioCue(pub u32);

impl AudioCue {
    /// Start (or resume) the looping ambient track.
    pub const AMBIENT_PLAY: AudioCue = AudioCue(1);
    /// Pause the ambient track.
    pub const AMBIENT_PAUSE: AudioCue = AudioCue(2);
    /// Start the voice-note clip from the beginning.
    pub const VOICE_PLAY: AudioCue = AudioCue(3);
    /// Stop the voice-note clip.
    pub const VOICE_STOP: AudioCue = AudioCue(4);
}

/// A UI event communicated from Rust to the host via SharedArrayBuffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct UiEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl UiEvent {
    pub const FLOATS: usize = 4;
}

/// An inbound host message with a string payload, for responses that do not
/// fit the four-float custom event format (e.g. generated text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub kind: u32,
    pub body: String,
}
