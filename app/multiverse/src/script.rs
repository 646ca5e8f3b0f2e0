//! Data-driven typewriter timeline for the Fate monologue.

/// The name the monologue must land on before the stars can align.
pub const REQUIRED_NAME: &str = "Ojaswi";

/// One step of a typewriter timeline.
#[derive(Debug, Clone, Copy)]
pub enum ScriptPhase {
    /// Reveal `text` one character every `interval` seconds.
    Type { text: &'static str, interval: f32 },
    /// Hold the current display.
    Pause { seconds: f32 },
    /// Wipe the display instantly.
    Clear,
}

/// The authored Fate monologue: prompt, self-correction, the real name.
pub const FATE_MONOLOGUE: &[ScriptPhase] = &[
    ScriptPhase::Type {
        text: "Enter your name...",
        interval: 0.1,
    },
    ScriptPhase::Pause { seconds: 0.8 },
    ScriptPhase::Clear,
    ScriptPhase::Type {
        text: "Oh wait... you are the love of my life, my baby...",
        interval: 0.05,
    },
    ScriptPhase::Pause { seconds: 1.5 },
    ScriptPhase::Clear,
    ScriptPhase::Pause { seconds: 0.5 },
    ScriptPhase::Type {
        text: REQUIRED_NAME,
        interval: 0.15,
    },
];

/// Sequential interpreter for a phase list.
///
/// Phases run strictly one after another: a Type phase must reveal its last
/// character before the next phase starts. All timing state lives here, so
/// dropping or restarting the runner cancels every pending reveal.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    phases: &'static [ScriptPhase],
    index: usize,
    /// Characters revealed in the current Type phase.
    shown: usize,
    /// Time accumulated toward the current phase step.
    clock: f32,
    display: String,
    done: bool,
}

impl ScriptRunner {
    pub fn new(phases: &'static [ScriptPhase]) -> Self {
        Self {
            phases,
            index: 0,
            shown: 0,
            clock: 0.0,
            display: String::new(),
            done: phases.is_empty(),
        }
    }

    /// Rewind to the first phase with an empty display.
    pub fn restart(&mut self) {
        self.index = 0;
        self.shown = 0;
        self.clock = 0.0;
        self.display.clear();
        self.done = self.phases.is_empty();
    }

    /// The live display buffer.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether every phase has completed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance the timeline one fixed step.
    pub fn tick(&mut self, dt: f32) {
        if self.done {
            return;
        }
        self.clock += dt;

        loop {
            let phase = match self.phases.get(self.index) {
                Some(p) => p,
                None => {
                    self.done = true;
                    return;
                }
            };

            match *phase {
                ScriptPhase::Clear => {
                    self.display.clear();
                    self.advance();
                }
                ScriptPhase::Pause { seconds } => {
                    if self.clock < seconds {
                        return;
                    }
                    self.clock -= seconds;
                    self.advance();
                }
                ScriptPhase::Type { text, interval } => {
                    let total = text.chars().count();
                    while self.shown < total && self.clock >= interval {
                        self.clock -= interval;
                        self.shown += 1;
                    }
                    self.display = text.chars().take(self.shown).collect();
                    if self.shown < total {
                        return;
                    }
                    self.advance();
                }
            }
        }
    }

    fn advance(&mut self) {
        self.index += 1;
        self.shown = 0;
        if self.index >= self.phases.len() {
            self.done = true;
        }
    }
}
