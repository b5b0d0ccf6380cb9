//! Unix clock sources via libc

use super::TIMER_UNAVAILABLE;
use tracing::debug;

#[cfg(any(target_os = "linux", target_os = "android"))]
const MONOTONIC: libc::clockid_t = libc::CLOCK_MONOTONIC_RAW;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
const MONOTONIC: libc::clockid_t = libc::CLOCK_MONOTONIC;

/// XSI fixes `CLOCKS_PER_SEC` at one million
const CLOCKS_PER_SEC: f64 = 1_000_000.0;

extern "C" {
    fn clock() -> libc::clock_t;
}

pub(super) fn real() -> f64 {
    if let Some(seconds) = clock_seconds(MONOTONIC) {
        return seconds;
    }
    debug!("monotonic clock unavailable, falling back to gettimeofday");
    time_of_day().unwrap_or(TIMER_UNAVAILABLE)
}

pub(super) fn cpu() -> f64 {
    if let Some(seconds) = clock_seconds(libc::CLOCK_PROCESS_CPUTIME_ID) {
        return seconds;
    }
    debug!("process CPU clock unavailable, falling back to getrusage");
    if let Some(seconds) = rusage_user() {
        return seconds;
    }
    debug!("getrusage failed, falling back to times");
    if let Some(seconds) = process_ticks() {
        return seconds;
    }
    debug!("times failed, falling back to clock");
    processor_clock().unwrap_or(TIMER_UNAVAILABLE)
}

fn clock_seconds(id: libc::clockid_t) -> Option<f64> {
    // SAFETY: timespec is plain old data; all-zero is a valid value.
    let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
    // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
    let rc = unsafe { libc::clock_gettime(id, &mut ts) };
    (rc == 0).then(|| ts.tv_sec as f64 + ts.tv_nsec as f64 / 1_000_000_000.0)
}

fn time_of_day() -> Option<f64> {
    // SAFETY: timeval is plain old data; all-zero is a valid value.
    let mut tv: libc::timeval = unsafe { std::mem::zeroed() };
    // SAFETY: `tv` is writable and a null timezone is permitted.
    let rc = unsafe { libc::gettimeofday(&mut tv, std::ptr::null_mut()) };
    (rc == 0).then(|| tv.tv_sec as f64 + tv.tv_usec as f64 / 1_000_000.0)
}

fn rusage_user() -> Option<f64> {
    // SAFETY: rusage is plain old data; all-zero is a valid value.
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    // SAFETY: `usage` is a valid, writable rusage.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
    (rc == 0).then(|| {
        usage.ru_utime.tv_sec as f64 + usage.ru_utime.tv_usec as f64 / 1_000_000.0
    })
}

fn process_ticks() -> Option<f64> {
    // SAFETY: sysconf has no memory-safety preconditions.
    let ticks_per_second = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if ticks_per_second <= 0 {
        return None;
    }
    // SAFETY: tms is plain old data; all-zero is a valid value.
    let mut tms: libc::tms = unsafe { std::mem::zeroed() };
    // SAFETY: `tms` is a valid, writable tms.
    let rc = unsafe { libc::times(&mut tms) };
    (rc != (-1i64) as libc::clock_t).then(|| tms.tms_utime as f64 / ticks_per_second as f64)
}

fn processor_clock() -> Option<f64> {
    // SAFETY: clock has no memory-safety preconditions.
    let ticks = unsafe { clock() };
    (ticks != (-1i64) as libc::clock_t).then(|| ticks as f64 / CLOCKS_PER_SEC)
}
