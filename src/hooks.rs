//! Yew-side ownership of a [`Cycler`] and its browser interval.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use yew::prelude::*;

use crate::cycler::{Cycler, CyclerConfig, Direction};

pub enum CyclerAction {
    Tick,
    Pause,
    Resume,
    Step(Direction),
    Jump(u32),
    Destroy,
}

impl Reducible for Cycler {
    type Action = CyclerAction;

    fn reduce(self: Rc<Self>, action: CyclerAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CyclerAction::Tick => next.tick(),
            CyclerAction::Pause => next.pause(),
            CyclerAction::Resume => next.resume(),
            CyclerAction::Step(direction) => next.step(direction),
            CyclerAction::Jump(target) => {
                // A bad target is the caller's bug, not a reason to move.
                if let Err(err) = next.jump(target) {
                    warn!("ignoring jump: {err}");
                }
            }
            CyclerAction::Destroy => next.destroy(),
        }
        next.into()
    }
}

/// Handle returned by [`use_cycler`].
#[derive(Clone)]
pub struct UseCyclerHandle {
    machine: UseReducerHandle<Cycler>,
}

impl UseCyclerHandle {
    pub fn value(&self) -> u32 {
        self.machine.value()
    }

    pub fn is_running(&self) -> bool {
        self.machine.is_running()
    }

    pub fn pause(&self) {
        self.machine.dispatch(CyclerAction::Pause);
    }

    pub fn resume(&self) {
        self.machine.dispatch(CyclerAction::Resume);
    }

    pub fn step(&self, direction: Direction) {
        self.machine.dispatch(CyclerAction::Step(direction));
    }

    pub fn jump(&self, target: u32) {
        self.machine.dispatch(CyclerAction::Jump(target));
    }
}

/// Drives a [`Cycler`] with a `setInterval` loop.
///
/// The interval lives inside an effect keyed on the running flag, so pausing
/// tears the schedule down before it can fire again and resuming creates
/// exactly one fresh schedule. Unmount runs the same teardown, which is what
/// retires the machine. A callback already queued when the pause landed is
/// discarded by the machine itself.
///
/// Every call site passes a compile-time constant configuration, so a
/// construction failure here is a programming error and panics.
#[hook]
pub fn use_cycler(config: CyclerConfig) -> UseCyclerHandle {
    let machine = use_reducer(|| Cycler::new(config).expect("valid cycler configuration"));

    {
        let machine = machine.clone();
        let deps = (machine.is_running(), machine.tick_interval_ms());
        use_effect_with_deps(
            move |(running, interval_ms): &(bool, u32)| {
                let interval = running.then(|| {
                    let ms = *interval_ms;
                    Interval::new(ms, move || {
                        machine.dispatch(CyclerAction::Tick);
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    UseCyclerHandle { machine }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycler::CyclerError;

    fn reduce(cycler: Cycler, action: CyclerAction) -> Cycler {
        (*Rc::new(cycler).reduce(action)).clone()
    }

    #[test]
    fn actions_map_onto_the_machine() {
        let carousel = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();

        let ticked = reduce(carousel.clone(), CyclerAction::Tick);
        assert_eq!(ticked.value(), 1);

        let paused = reduce(carousel.clone(), CyclerAction::Pause);
        assert!(!paused.is_running());

        let stepped = reduce(paused.clone(), CyclerAction::Step(Direction::Backward));
        assert_eq!(stepped.value(), 5);
        assert!(!stepped.is_running());

        let resumed = reduce(paused, CyclerAction::Resume);
        assert!(resumed.is_running());

        let destroyed = reduce(carousel, CyclerAction::Destroy);
        assert!(destroyed.is_destroyed());
        let after = reduce(destroyed, CyclerAction::Tick);
        assert_eq!(after.value(), 0);
    }

    #[test]
    fn rejected_jump_leaves_the_state_untouched() {
        let carousel = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        let jumped = reduce(carousel, CyclerAction::Jump(9));
        assert_eq!(jumped.value(), 0);
        assert!(jumped.is_running());

        // The underlying operation still reports the error to direct callers.
        let mut direct = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();
        assert!(matches!(
            direct.jump(9),
            Err(CyclerError::OutOfRange { target: 9, .. })
        ));
    }
}
