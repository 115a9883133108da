use std::time::{Instant, SystemTime};

use parking_lot::Mutex;

use crate::tag::{impl_tagged, Tag, TagList};

/// One reading of both clocks: wall time for reporting, monotonic time for
/// subtraction.
#[derive(Debug, Clone, Copy)]
struct Stamp {
    wall: SystemTime,
    mono: Instant,
}

impl Stamp {
    fn now() -> Self {
        Self {
            wall: SystemTime::now(),
            mono: Instant::now(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct TimerState {
    started: Option<Stamp>,
    stopped: Option<Stamp>,
}

/// Start/stop timestamp pair.
///
/// Order is not enforced: `stop` before `start`, or repeated calls, simply
/// overwrite the matching timestamp. No duration is kept. Wall-clock times
/// may step backwards; subtract `started_instant` from `stopped_instant`
/// for elapsed time.
#[derive(Debug, Default)]
pub struct Timer {
    state: Mutex<TimerState>,
    tags: TagList,
}

impl Timer {
    pub fn new(tags: &[Tag]) -> Self {
        Self {
            state: Mutex::new(TimerState::default()),
            tags: TagList::new(tags),
        }
    }

    /// Record now as the start time.
    pub fn start(&self) {
        self.state.lock().started = Some(Stamp::now());
    }

    /// Record now as the stop time.
    pub fn stop(&self) {
        let mut state = self.state.lock();
        if state.started.is_none() {
            tracing::trace!("timer stopped before it was started");
        }
        state.stopped = Some(Stamp::now());
    }

    /// Wall-clock start; `None` until the first `start`.
    pub fn started_time(&self) -> Option<SystemTime> {
        self.state.lock().started.map(|s| s.wall)
    }

    /// Wall-clock stop; `None` until the first `stop`.
    pub fn stopped_time(&self) -> Option<SystemTime> {
        self.state.lock().stopped.map(|s| s.wall)
    }

    /// Monotonic start; `None` until the first `start`.
    pub fn started_instant(&self) -> Option<Instant> {
        self.state.lock().started.map(|s| s.mono)
    }

    /// Monotonic stop; `None` until the first `stop`.
    pub fn stopped_instant(&self) -> Option<Instant> {
        self.state.lock().stopped.map(|s| s.mono)
    }

    /// Both wall-clock timestamps read under one lock.
    pub fn times(&self) -> (Option<SystemTime>, Option<SystemTime>) {
        let state = *self.state.lock();
        (state.started.map(|s| s.wall), state.stopped.map(|s| s.wall))
    }

    /// Both monotonic timestamps read under one lock.
    pub fn instants(&self) -> (Option<Instant>, Option<Instant>) {
        let state = *self.state.lock();
        (state.started.map(|s| s.mono), state.stopped.map(|s| s.mono))
    }
}

impl_tagged!(Timer);
