//! Windows clock sources

use super::TIMER_UNAVAILABLE;
use std::sync::OnceLock;
use std::time::Instant;
use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::System::Threading::{GetCurrentProcess, GetProcessTimes};

/// FILETIME ticks per second (100 ns resolution)
const TICKS_PER_SECOND: f64 = 10_000_000.0;

/// Origin of real-time readings, captured on first use
static EPOCH: OnceLock<Instant> = OnceLock::new();

pub(super) fn real() -> f64 {
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

pub(super) fn cpu() -> f64 {
    process_user_time().unwrap_or(TIMER_UNAVAILABLE)
}

fn process_user_time() -> Option<f64> {
    let empty = || FILETIME {
        dwLowDateTime: 0,
        dwHighDateTime: 0,
    };
    let (mut creation, mut exit, mut kernel, mut user) = (empty(), empty(), empty(), empty());
    // SAFETY: GetCurrentProcess returns a pseudo-handle that needs no
    // closing, and every FILETIME is valid and writable for the call.
    let ok = unsafe {
        GetProcessTimes(
            GetCurrentProcess(),
            &mut creation,
            &mut exit,
            &mut kernel,
            &mut user,
        )
    };
    (ok != 0).then(|| filetime_ticks(&user) as f64 / TICKS_PER_SECOND)
}

fn filetime_ticks(time: &FILETIME) -> u64 {
    (u64::from(time.dwHighDateTime) << 32) | u64::from(time.dwLowDateTime)
}
