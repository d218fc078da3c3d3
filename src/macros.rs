#[cfg(feature = "tracing")]
macro_rules! ftrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "fenwick", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ftrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "fenwick", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fdebug {
    ($($tt:tt)*) => {};
}
