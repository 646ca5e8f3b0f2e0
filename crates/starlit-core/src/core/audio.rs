use crate::api::types::AudioCue;

/// Two-channel audio coordinator: a looping ambient track and an on-demand
/// voice note, at most one audible at a time.
///
/// Preemption runs one way only — the voice note always wins. Starting the
/// voice note suspends ambient iff ambient was audibly playing at that
/// instant, and remembers that fact; ending the voice note (explicit stop or
/// natural completion) resumes ambient iff the remembered fact was true.
///
/// The mixer owns the logical playback state; it tells the host what to do
/// with its `<audio>` elements through queued [`AudioCue`]s.
#[derive(Debug, Default)]
pub struct AudioMixer {
    ambient_playing: bool,
    voice_playing: bool,
    /// Whether ambient was playing when the voice note suspended it.
    resume_ambient: bool,
    queued: Vec<AudioCue>,
}

impl AudioMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Optimistically start ambient playback (session start). The host
    /// reports a blocked autoplay attempt via [`AudioMixer::autoplay_blocked`].
    pub fn start_ambient(&mut self) {
        if self.ambient_playing || self.voice_playing {
            return;
        }
        self.ambient_playing = true;
        self.queued.push(AudioCue::AMBIENT_PLAY);
    }

    /// The host could not honor an ambient play cue (autoplay policy,
    /// decode error). Leaves the channel logically stopped; not an error.
    pub fn autoplay_blocked(&mut self) {
        log::debug!("ambient playback refused by host; channel left stopped");
        self.ambient_playing = false;
        self.resume_ambient = false;
    }

    /// User toggle on the persistent player control.
    ///
    /// While the voice note holds the floor the toggle edits the remembered
    /// resume flag instead of forcing playback, so the save-restore rule
    /// stays the single authority over what is audible.
    pub fn toggle_ambient(&mut self) {
        if self.voice_playing {
            self.resume_ambient = !self.resume_ambient;
        } else if self.ambient_playing {
            self.ambient_playing = false;
            self.queued.push(AudioCue::AMBIENT_PAUSE);
        } else {
            self.ambient_playing = true;
            self.queued.push(AudioCue::AMBIENT_PLAY);
        }
    }

    /// Start the voice note, suspending ambient if it was audible.
    pub fn start_voice(&mut self) {
        if self.voice_playing {
            return;
        }
        self.resume_ambient = self.ambient_playing;
        if self.ambient_playing {
            self.ambient_playing = false;
            self.queued.push(AudioCue::AMBIENT_PAUSE);
        }
        self.voice_playing = true;
        self.queued.push(AudioCue::VOICE_PLAY);
    }

    /// Explicitly stop the voice note.
    pub fn stop_voice(&mut self) {
        if !self.voice_playing {
            return;
        }
        self.queued.push(AudioCue::VOICE_STOP);
        self.finish_voice();
    }

    /// The voice note reached its natural end (reported by the host).
    pub fn voice_ended(&mut self) {
        if !self.voice_playing {
            return;
        }
        self.finish_voice();
    }

    /// Toggle helper for the single voice-log button.
    pub fn toggle_voice(&mut self) {
        if self.voice_playing {
            self.stop_voice();
        } else {
            self.start_voice();
        }
    }

    fn finish_voice(&mut self) {
        self.voice_playing = false;
        if self.resume_ambient {
            self.resume_ambient = false;
            self.ambient_playing = true;
            self.queued.push(AudioCue::AMBIENT_PLAY);
        }
    }

    pub fn ambient_playing(&self) -> bool {
        self.ambient_playing
    }

    pub fn voice_playing(&self) -> bool {
        self.voice_playing
    }

    /// Cues queued since the last [`AudioMixer::clear_queued`].
    pub fn queued(&self) -> &[AudioCue] {
        &self.queued
    }

    /// Called once per frame after the cues are packed for the host.
    pub fn clear_queued(&mut self) {
        self.queued.clear();
    }
}
