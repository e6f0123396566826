use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::{counter_tick_ms, COUNTER_STEPS};

/// Linear tween with a fixed per-tick increment.
///
/// The increment is `target / steps`, computed once. The tick that reaches or
/// passes the target clamps to it exactly and the tween is done.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTween {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

pub enum CounterAction {
    Tick,
}

impl CounterTween {
    pub fn new(target: u64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            increment: target as f64 / steps as f64,
            current: 0.0,
            done: target == 0,
        }
    }

    pub fn tick(&mut self) {
        if self.done {
            return;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.done = true;
        }
    }

    /// Displayed value, floored to a whole number.
    pub fn value(&self) -> u64 {
        (self.current.floor() as u64).min(self.target)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Reducible for CounterTween {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CounterAction::Tick if !self.done => {
                let mut next = (*self).clone();
                next.tick();
                if next.done {
                    debug!("counter reached {}", next.target);
                }
                next.into()
            }
            CounterAction::Tick => self,
        }
    }
}

/// Drive one counter while `active` is true. Returns the current value.
/// The interval belongs to the effect, so finishing or unmounting clears it.
#[hook]
pub fn use_counter_tween(target: u64, active: bool) -> u64 {
    let tween = use_reducer(|| CounterTween::new(target, COUNTER_STEPS));
    let done = tween.is_done();

    {
        let tween = tween.clone();
        use_effect_with_deps(
            move |&(active, done)| {
                let interval = (active && !done).then(|| {
                    Interval::new(counter_tick_ms(), move || {
                        tween.dispatch(CounterAction::Tick);
                    })
                });
                move || drop(interval)
            },
            (active, done),
        );
    }

    tween.value()
}
