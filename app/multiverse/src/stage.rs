use starlit_core::Countdown;

/// The five universes, in authored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageId {
    Intro,
    Fate,
    Chaos,
    Hope,
    Real,
}

impl StageId {
    pub const COUNT: usize = 5;

    /// Stable index for the wire protocol.
    pub fn index(self) -> u32 {
        match self {
            StageId::Intro => 0,
            StageId::Fate => 1,
            StageId::Chaos => 2,
            StageId::Hope => 3,
            StageId::Real => 4,
        }
    }
}

/// A completed stage swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageChange {
    pub from: StageId,
    pub to: StageId,
}

/// Seconds the collapse overlay holds before the stage swap.
pub const COLLAPSE_HOLD: f32 = 0.8;
/// Seconds the collapse overlay lingers after the stage swap.
pub const COLLAPSE_FADE: f32 = 0.5;

/// Sequences the universes.
///
/// A plain transition swaps the current stage immediately. A collapse
/// transition shows the "timeline collapse" overlay for [`COLLAPSE_HOLD`]
/// seconds, swaps, then clears the overlay after [`COLLAPSE_FADE`] more.
///
/// A request arriving while a collapse is in flight is ignored; the two
/// timers of the pending transition always run to completion.
pub struct StageController {
    current: StageId,
    pending: Option<StageId>,
    hold: Countdown,
    fade: Countdown,
    changed: Option<StageChange>,
}

impl StageController {
    pub fn new() -> Self {
        Self {
            current: StageId::Intro,
            pending: None,
            hold: Countdown::new(),
            fade: Countdown::new(),
            changed: None,
        }
    }

    pub fn current(&self) -> StageId {
        self.current
    }

    /// True from a collapse request until the post-swap fade ends.
    pub fn collapse_active(&self) -> bool {
        self.pending.is_some() || self.fade.is_armed()
    }

    /// Request a transition to `target`. Returns false when the request is
    /// ignored: a collapse already in flight, or `target` is current.
    pub fn request(&mut self, target: StageId, collapse: bool) -> bool {
        if self.collapse_active() || target == self.current {
            return false;
        }
        if collapse {
            self.pending = Some(target);
            self.hold.start(COLLAPSE_HOLD);
        } else {
            self.changed = Some(StageChange {
                from: self.current,
                to: target,
            });
            self.current = target;
        }
        true
    }

    /// Advance the collapse timers one fixed step.
    pub fn tick(&mut self, dt: f32) {
        if self.hold.tick(dt) {
            if let Some(target) = self.pending.take() {
                self.changed = Some(StageChange {
                    from: self.current,
                    to: target,
                });
                self.current = target;
                self.fade.start(COLLAPSE_FADE);
            }
        }
        self.fade.tick(dt);
    }

    /// The swap performed since the last poll, if any.
    pub fn take_change(&mut self) -> Option<StageChange> {
        self.changed.take()
    }
}

impl Default for StageController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn drive(c: &mut StageController, seconds: f32) {
        let steps = (seconds / DT).round() as usize;
        for _ in 0..steps {
            c.tick(DT);
        }
    }

    #[test]
    fn plain_request_swaps_immediately() {
        let mut c = StageController::new();
        assert!(c.request(StageId::Fate, false));
        assert_eq!(c.current(), StageId::Fate);
        assert!(!c.collapse_active());
        let change = c.take_change().unwrap();
        assert_eq!(change.from, StageId::Intro);
        assert_eq!(change.to, StageId::Fate);
        assert!(c.take_change().is_none());
    }

    #[test]
    fn collapse_swaps_after_hold() {
        let mut c = StageController::new();
        c.request(StageId::Real, true);
        assert!(c.collapse_active());
        assert_eq!(c.current(), StageId::Intro);

        drive(&mut c, 0.7);
        assert_eq!(c.current(), StageId::Intro);
        assert!(c.take_change().is_none());

        drive(&mut c, 0.2);
        assert_eq!(c.current(), StageId::Real);
        assert!(c.collapse_active(), "fade still running");
        assert_eq!(c.take_change().unwrap().to, StageId::Real);

        drive(&mut c, 0.6);
        assert!(!c.collapse_active());
    }

    #[test]
    fn request_during_collapse_is_ignored() {
        let mut c = StageController::new();
        c.request(StageId::Hope, true);
        assert!(!c.request(StageId::Real, false));
        assert!(!c.request(StageId::Real, true));

        drive(&mut c, 1.5);
        assert_eq!(c.current(), StageId::Hope);
    }

    #[test]
    fn request_to_current_stage_is_ignored() {
        let mut c = StageController::new();
        assert!(!c.request(StageId::Intro, false));
        assert!(c.take_change().is_none());
    }

    #[test]
    fn authored_forward_chain() {
        let mut c = StageController::new();
        for (target, collapse) in [
            (StageId::Fate, false),
            (StageId::Chaos, false),
            (StageId::Hope, false),
            (StageId::Real, true),
        ] {
            assert!(c.request(target, collapse));
            drive(&mut c, 1.5);
            assert_eq!(c.current(), target);
        }
        assert!(!c.collapse_active());
    }

    #[test]
    fn stage_indices_are_stable() {
        assert_eq!(StageId::Intro.index(), 0);
        assert_eq!(StageId::Real.index(), 4);
        assert_eq!(StageId::COUNT, 5);
    }
}
