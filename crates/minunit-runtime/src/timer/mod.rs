//! Wall-clock and process CPU timers
//!
//! Both clocks return seconds as `f64` measured from an arbitrary,
//! OS-dependent origin, so only the difference between two readings means
//! anything. When no usable clock exists the reading is
//! [`TIMER_UNAVAILABLE`].
//!
//! The clock source is chosen per target family at build time, with a
//! run-time fallback chain inside each family:
//!
//! - Unix: `clock_gettime` on the raw/monotonic clock, then `gettimeofday`
//!   for real time; `CLOCK_PROCESS_CPUTIME_ID`, then `getrusage`, then
//!   `times`, then `clock` for CPU time.
//! - Windows: the high-resolution monotonic `Instant` against a lazily
//!   captured epoch for real time; `GetProcessTimes` user time for CPU
//!   time.

use std::fmt;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        use unix as imp;
    } else if #[cfg(windows)] {
        mod windows;
        use windows as imp;
    } else {
        compile_error!("minunit: unable to define timers for an unknown OS");
    }
}

/// Reading returned when no clock source is usable
pub const TIMER_UNAVAILABLE: f64 = -1.0;

/// Monotonic real time in seconds, or [`TIMER_UNAVAILABLE`]
pub fn now_real() -> f64 {
    imp::real()
}

/// CPU time consumed by this process in seconds, or [`TIMER_UNAVAILABLE`]
pub fn now_cpu() -> f64 {
    imp::cpu()
}

/// Real and CPU clock readings taken together
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerSnapshot {
    pub real: f64,
    pub cpu: f64,
}

impl TimerSnapshot {
    /// Read both clocks now
    pub fn capture() -> Self {
        Self {
            real: now_real(),
            cpu: now_cpu(),
        }
    }

    /// Time elapsed between `start` and this snapshot
    pub fn elapsed_since(&self, start: &TimerSnapshot) -> Elapsed {
        Elapsed {
            real: self.real - start.real,
            cpu: self.cpu - start.cpu,
        }
    }
}

/// Real and CPU durations in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Elapsed {
    pub real: f64,
    pub cpu: f64,
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.8} seconds (real) {:.8} seconds (proc)",
            self.real, self.cpu
        )
    }
}
