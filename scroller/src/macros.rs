// Logging under the "scroller" target. Every macro expands to nothing without `tracing`.

#[cfg(feature = "tracing")]
macro_rules! slog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "scroller", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! slog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! strace {
    ($($tt:tt)*) => { slog!(trace, $($tt)*) };
}

macro_rules! sdebug {
    ($($tt:tt)*) => { slog!(debug, $($tt)*) };
}

macro_rules! serror {
    ($($tt:tt)*) => { slog!(error, $($tt)*) };
}
