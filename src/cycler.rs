//! Bounded integer state machine behind every timed widget on the site.
//!
//! One machine shape covers the appointment counters (clamp, forward), the
//! offer countdown (clamp, backward) and the testimonial carousel (wrap).
//! The machine owns no clock: the UI layer schedules ticks (see
//! [`crate::hooks::use_cycler`]) and this module only defines what a tick,
//! a step or a jump means. All operations are constant time and assume a
//! single writer, which is what a browser UI thread gives us.

use thiserror::Error;

/// What a tick does when `value` stands at the end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Saturate at the boundary. The machine keeps running, later ticks
    /// simply stop moving the value.
    Clamp,
    /// Wrap around modulo the item count.
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The only two error conditions a cycler knows. Every other out-of-contract
/// call (tick while paused, pause twice, anything after destroy) is an
/// idempotent no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CyclerError {
    /// Rejected at construction, the instance never exists.
    #[error("invalid cycler configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Rejected jump target. The machine is left exactly as it was.
    #[error("jump target {target} out of range for {item_count} items")]
    OutOfRange { target: u32, item_count: u32 },
}

/// Immutable description of one cycler instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclerConfig {
    pub initial_value: u32,
    pub item_count: u32,
    pub tick_interval_ms: u32,
    pub policy: BoundaryPolicy,
    pub direction: Direction,
}

impl CyclerConfig {
    /// Counter from 0 up to `item_count`, holding there.
    pub fn count_up(item_count: u32, tick_interval_ms: u32) -> Self {
        Self {
            initial_value: 0,
            item_count,
            tick_interval_ms,
            policy: BoundaryPolicy::Clamp,
            direction: Direction::Forward,
        }
    }

    /// Countdown from `start` to 0, holding at 0.
    pub fn count_down(start: u32, tick_interval_ms: u32) -> Self {
        Self {
            initial_value: start,
            item_count: start,
            tick_interval_ms,
            policy: BoundaryPolicy::Clamp,
            direction: Direction::Backward,
        }
    }

    /// Endless forward rotation over `item_count` slots, starting at 0.
    pub fn looping(item_count: u32, tick_interval_ms: u32) -> Self {
        Self {
            initial_value: 0,
            item_count,
            tick_interval_ms,
            policy: BoundaryPolicy::Wrap,
            direction: Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cycler {
    config: CyclerConfig,
    value: u32,
    direction: Direction,
    running: bool,
    destroyed: bool,
}

impl Cycler {
    /// Validates the configuration and starts the machine in the running
    /// state. Out-of-range initial values are rejected, not clamped, so a
    /// miswired call site fails loudly instead of drifting.
    pub fn new(config: CyclerConfig) -> Result<Self, CyclerError> {
        if config.item_count < 1 {
            return Err(CyclerError::InvalidConfiguration {
                reason: "item count must be at least 1".into(),
            });
        }
        if config.tick_interval_ms < 1 {
            return Err(CyclerError::InvalidConfiguration {
                reason: "tick interval must be at least 1ms".into(),
            });
        }
        let max = match config.policy {
            // Clamp ranges are inclusive: a counter to 10 shows 10.
            BoundaryPolicy::Clamp => config.item_count,
            // Wrap values are slot indexes, 0..item_count.
            BoundaryPolicy::Wrap => config.item_count - 1,
        };
        if config.initial_value > max {
            return Err(CyclerError::InvalidConfiguration {
                reason: format!(
                    "initial value {} outside 0..={}",
                    config.initial_value, max
                ),
            });
        }
        Ok(Self {
            value: config.initial_value,
            direction: config.direction,
            running: true,
            destroyed: false,
            config,
        })
    }

    /// Applies one scheduled advance in the configured direction. Dropped
    /// (not queued) while paused or after destroy, so a timer callback that
    /// was already in flight when `pause` ran cannot move the value.
    pub fn tick(&mut self) {
        if !self.running || self.destroyed {
            return;
        }
        self.value = self.advanced(self.value, self.direction);
    }

    /// Stops scheduled advances. Idempotent.
    pub fn pause(&mut self) {
        if self.destroyed {
            return;
        }
        self.running = false;
    }

    /// Restarts scheduled advances from the current value. Idempotent.
    pub fn resume(&mut self) {
        if self.destroyed {
            return;
        }
        self.running = true;
    }

    /// One manual advance in `direction`, independent of the timer and of
    /// the running flag. Only meaningful on wrap machines (a user can flip
    /// a carousel, nothing pages a counter); on clamp machines it does
    /// nothing.
    pub fn step(&mut self, direction: Direction) {
        if self.destroyed || self.config.policy != BoundaryPolicy::Wrap {
            return;
        }
        self.value = self.advanced(self.value, direction);
    }

    /// Moves straight to slot `target` without touching the running flag.
    /// Wrap machines only; a target past the last slot is rejected and the
    /// state stays untouched.
    pub fn jump(&mut self, target: u32) -> Result<(), CyclerError> {
        if self.destroyed || self.config.policy != BoundaryPolicy::Wrap {
            return Ok(());
        }
        if target >= self.config.item_count {
            return Err(CyclerError::OutOfRange {
                target,
                item_count: self.config.item_count,
            });
        }
        self.value = target;
        Ok(())
    }

    /// Retires the machine. The value freezes at whatever it was and every
    /// later operation, including resume, is a no-op.
    pub fn destroy(&mut self) {
        self.running = false;
        self.destroyed = true;
    }

    fn advanced(&self, value: u32, direction: Direction) -> u32 {
        let count = self.config.item_count;
        // Legal configs reach value == count == u32::MAX (clamp) and counts
        // past u32::MAX / 2 (wrap), where `value + 1` and `value + count - 1`
        // overflow.
        match (self.config.policy, direction) {
            (BoundaryPolicy::Clamp, Direction::Forward) => {
                if value >= count {
                    count
                } else {
                    value + 1
                }
            }
            (BoundaryPolicy::Clamp, Direction::Backward) => value.saturating_sub(1),
            (BoundaryPolicy::Wrap, Direction::Forward) => (value + 1) % count,
            (BoundaryPolicy::Wrap, Direction::Backward) => {
                if value == 0 {
                    count - 1
                } else {
                    value - 1
                }
            }
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn item_count(&self) -> u32 {
        self.config.item_count
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.config.tick_interval_ms
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.config.policy
    }

    pub fn direction(&self) -> Direction {
        self.config.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(cycler: &mut Cycler, n: u32) {
        for _ in 0..n {
            cycler.tick();
        }
    }

    #[test]
    fn new_rejects_zero_item_count() {
        let err = Cycler::new(CyclerConfig::looping(0, 5000)).unwrap_err();
        assert!(matches!(err, CyclerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn new_rejects_zero_interval() {
        let err = Cycler::new(CyclerConfig::count_up(10, 0)).unwrap_err();
        assert!(matches!(err, CyclerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn new_rejects_initial_value_past_the_range() {
        let clamp = CyclerConfig {
            initial_value: 11,
            ..CyclerConfig::count_up(10, 3000)
        };
        assert!(Cycler::new(clamp).is_err());

        // For wrap the count itself is already out of range.
        let wrap = CyclerConfig {
            initial_value: 6,
            ..CyclerConfig::looping(6, 5000)
        };
        assert!(Cycler::new(wrap).is_err());

        let wrap_last = CyclerConfig {
            initial_value: 5,
            ..CyclerConfig::looping(6, 5000)
        };
        assert!(Cycler::new(wrap_last).is_ok());
    }

    #[test]
    fn new_starts_running_at_the_initial_value() {
        let cycler = Cycler::new(CyclerConfig::count_down(86_400, 1000)).unwrap();
        assert_eq!(cycler.value(), 86_400);
        assert!(cycler.is_running());
        assert!(!cycler.is_destroyed());
    }

    #[test]
    fn clamp_forward_saturates_at_item_count() {
        let mut cycler = Cycler::new(CyclerConfig::count_up(10, 3000)).unwrap();
        ticks(&mut cycler, 10);
        assert_eq!(cycler.value(), 10);
        ticks(&mut cycler, 5);
        assert_eq!(cycler.value(), 10);
        assert!(cycler.is_running());
    }

    #[test]
    fn clamp_forward_holds_at_a_u32_max_cap() {
        let at_cap = CyclerConfig {
            initial_value: u32::MAX,
            ..CyclerConfig::count_up(u32::MAX, 3000)
        };
        let mut cycler = Cycler::new(at_cap).unwrap();
        ticks(&mut cycler, 3);
        assert_eq!(cycler.value(), u32::MAX);
        assert!(cycler.is_running());

        let near_cap = CyclerConfig {
            initial_value: u32::MAX - 2,
            ..CyclerConfig::count_up(u32::MAX, 3000)
        };
        let mut cycler = Cycler::new(near_cap).unwrap();
        ticks(&mut cycler, 5);
        assert_eq!(cycler.value(), u32::MAX);
    }

    #[test]
    fn clamp_backward_saturates_at_zero() {
        let mut cycler = Cycler::new(CyclerConfig::count_down(3, 1000)).unwrap();
        ticks(&mut cycler, 3);
        assert_eq!(cycler.value(), 0);
        ticks(&mut cycler, 4);
        assert_eq!(cycler.value(), 0);
        assert!(cycler.is_running());
    }

    #[test]
    fn wrap_forward_returns_to_start_after_a_full_lap() {
        let mut cycler = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        ticks(&mut cycler, 5);
        assert_eq!(cycler.value(), 5);
        cycler.tick();
        assert_eq!(cycler.value(), 0);

        // Holds from any starting slot, not just 0.
        cycler.jump(3).unwrap();
        ticks(&mut cycler, 6);
        assert_eq!(cycler.value(), 3);
    }

    #[test]
    fn wrap_backward_from_zero_lands_on_the_last_slot() {
        let mut cycler = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        cycler.step(Direction::Backward);
        assert_eq!(cycler.value(), 5);
    }

    #[test]
    fn wrap_backward_with_a_huge_item_count_lands_on_the_right_slot() {
        let config = CyclerConfig {
            initial_value: 2_999_999_999,
            ..CyclerConfig::looping(3_000_000_000, 5000)
        };
        let mut cycler = Cycler::new(config).unwrap();
        cycler.step(Direction::Backward);
        assert_eq!(cycler.value(), 2_999_999_998);

        cycler.jump(0).unwrap();
        cycler.step(Direction::Backward);
        assert_eq!(cycler.value(), 2_999_999_999);
    }

    #[test]
    fn paused_machine_drops_ticks_instead_of_queueing_them() {
        let mut cycler = Cycler::new(CyclerConfig::count_up(10, 3000)).unwrap();
        ticks(&mut cycler, 2);
        cycler.pause();
        assert!(!cycler.is_running());
        ticks(&mut cycler, 7);
        assert_eq!(cycler.value(), 2);
        cycler.resume();
        cycler.tick();
        // Only the post-resume tick lands; nothing was saved up.
        assert_eq!(cycler.value(), 3);
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let mut cycler = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        cycler.pause();
        cycler.pause();
        assert!(!cycler.is_running());
        cycler.resume();
        cycler.resume();
        assert!(cycler.is_running());
        assert_eq!(cycler.value(), 0);
    }

    #[test]
    fn step_moves_a_paused_carousel_without_resuming_it() {
        let mut cycler = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        cycler.pause();
        cycler.step(Direction::Forward);
        cycler.step(Direction::Forward);
        assert_eq!(cycler.value(), 2);
        assert!(!cycler.is_running());
        cycler.step(Direction::Backward);
        assert_eq!(cycler.value(), 1);
    }

    #[test]
    fn step_does_nothing_on_clamp_machines() {
        let mut cycler = Cycler::new(CyclerConfig::count_up(10, 3000)).unwrap();
        cycler.step(Direction::Forward);
        cycler.step(Direction::Backward);
        assert_eq!(cycler.value(), 0);
    }

    #[test]
    fn jump_rejects_targets_past_the_last_slot() {
        let mut cycler = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        cycler.jump(3).unwrap();
        assert_eq!(cycler.value(), 3);

        let err = cycler.jump(6).unwrap_err();
        assert_eq!(
            err,
            CyclerError::OutOfRange {
                target: 6,
                item_count: 6
            }
        );
        // The failed jump left everything alone.
        assert_eq!(cycler.value(), 3);
        assert!(cycler.is_running());

        cycler.jump(5).unwrap();
        assert_eq!(cycler.value(), 5);
    }

    #[test]
    fn jump_never_touches_the_running_flag() {
        let mut cycler = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        cycler.pause();
        cycler.jump(4).unwrap();
        assert_eq!(cycler.value(), 4);
        assert!(!cycler.is_running());
    }

    #[test]
    fn jump_is_a_noop_on_clamp_machines() {
        let mut cycler = Cycler::new(CyclerConfig::count_down(60, 1000)).unwrap();
        assert!(cycler.jump(30).is_ok());
        assert_eq!(cycler.value(), 60);
    }

    #[test]
    fn destroy_freezes_the_machine_for_good() {
        let mut cycler = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        ticks(&mut cycler, 2);
        cycler.destroy();
        assert!(cycler.is_destroyed());
        assert!(!cycler.is_running());

        cycler.tick();
        cycler.resume();
        cycler.tick();
        cycler.step(Direction::Forward);
        assert!(cycler.jump(1).is_ok());
        cycler.destroy();
        assert_eq!(cycler.value(), 2);
        assert!(!cycler.is_running());
    }
}
