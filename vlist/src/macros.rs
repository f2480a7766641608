// Logging shims. With the `tracing` feature these forward to `tracing` under the `vlist`
// target; without it they expand to nothing, so arguments must not carry side effects.

#[cfg(feature = "tracing")]
macro_rules! vtrace {
    ($($tt:tt)*) => { tracing::trace!(target: "vlist", $($tt)*) };
}

#[cfg(feature = "tracing")]
macro_rules! vdebug {
    ($($tt:tt)*) => { tracing::debug!(target: "vlist", $($tt)*) };
}

#[cfg(feature = "tracing")]
macro_rules! vwarn {
    ($($tt:tt)*) => { tracing::warn!(target: "vlist", $($tt)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vtrace {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! vdebug {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! vwarn {
    ($($tt:tt)*) => {};
}
