//! Entrance animation timing.
//!
//! Animations are plain CSS transitions: a view renders its "hidden" classes
//! until its trigger fires, then swaps to the "shown" classes. The timings
//! here only decide how long that swap takes and when it starts.

/// Duration and delay of a single CSS transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Timing {
    pub const fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
        }
    }

    /// Same duration, started `step_ms` later for every `index`.
    pub fn staggered(self, step_ms: u32, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            duration_ms: self.duration_ms,
            delay_ms: self
                .delay_ms
                .saturating_add(step_ms.saturating_mul(index)),
        }
    }

    pub fn style(self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms",
            self.duration_ms, self.delay_ms
        )
    }
}

pub const HEADER_ENTRANCE: Timing = Timing::new(500, 0);
pub const SECTION_ENTRANCE: Timing = Timing::new(800, 0);
pub const HOME_BANNER: Timing = Timing::new(800, 0);
pub const HOME_TITLE: Timing = Timing::new(600, 200);
pub const HOME_TAGLINE: Timing = Timing::new(600, 400);
pub const HOME_CALL_TO_ACTION: Timing = Timing::new(600, 600);

pub const SKILL_CARD: Timing = Timing::new(500, 0);
pub const SKILL_STAGGER_MS: u32 = 100;
pub const PROJECT_CARD: Timing = Timing::new(600, 0);
pub const PROJECT_STAGGER_MS: u32 = 200;

/// Records whether an element has ever been in view. Once set it stays set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntranceTrigger {
    revealed: bool,
}

impl EntranceTrigger {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Observers watching this element can be torn down once this is false.
    pub fn needs_observer(&self) -> bool {
        !self.revealed
    }

    /// Feeds one visibility reading and returns the latched state.
    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_latches() {
        let mut trigger = EntranceTrigger::default();
        assert!(!trigger.is_revealed());
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        // scrolled away again
        assert!(trigger.observe(false));
        assert!(trigger.is_revealed());
    }

    #[test]
    fn test_observer_released_after_reveal() {
        let mut trigger = EntranceTrigger::default();
        assert!(trigger.needs_observer());
        trigger.observe(false);
        assert!(trigger.needs_observer());
        trigger.observe(true);
        assert!(!trigger.needs_observer());
        trigger.observe(false);
        assert!(!trigger.needs_observer());
    }

    #[test]
    fn test_stagger_is_linear() {
        let delays = (0..5)
            .map(|i| PROJECT_CARD.staggered(PROJECT_STAGGER_MS, i).delay_ms)
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 200, 400, 600, 800]);

        let card = SKILL_CARD.staggered(SKILL_STAGGER_MS, 8);
        assert_eq!(card, Timing::new(500, 800));
    }

    #[test]
    fn test_stagger_saturates() {
        let t = Timing::new(100, 10).staggered(u32::MAX, 2);
        assert_eq!(t.delay_ms, u32::MAX);
    }

    #[test]
    fn test_home_timings_follow_each_other() {
        assert!(HOME_TITLE.delay_ms < HOME_TAGLINE.delay_ms);
        assert!(HOME_TAGLINE.delay_ms < HOME_CALL_TO_ACTION.delay_ms);
        assert_eq!(
            HOME_TAGLINE.style(),
            "transition-duration: 600ms; transition-delay: 400ms"
        );
    }
}
