// Controller logging under the "scroller_adapter" target.

#[cfg(feature = "tracing")]
macro_rules! alog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "scroller_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! alog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! atrace {
    ($($tt:tt)*) => { alog!(trace, $($tt)*) };
}

macro_rules! adebug {
    ($($tt:tt)*) => { alog!(debug, $($tt)*) };
}
