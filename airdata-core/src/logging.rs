//! Optional diagnostics through the `log` facade
//!
//! With the `log` feature off (bare `no_std` firmware) the macros expand to
//! nothing and their arguments are not evaluated.

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!(target: "airdata", $($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!(target: "airdata", $($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub(crate) use log_trace;
pub(crate) use log_warn;
