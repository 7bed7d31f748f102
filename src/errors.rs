//! Crate-wide error plumbing.
//!
//! Most fallible functions return the `failure::Error` based [`Result`]. Typed
//! failures that callers may want to inspect, such as shader compilation errors,
//! live in [`video::Error`](crate::video::Error) and convert into it with `?`.

pub use failure::{Error, ResultExt};

pub type Result<T> = ::std::result::Result<T, failure::Error>;

macro_rules! err_format {
    ($e:expr) => {
        failure::err_msg($e)
    };
    ($fmt:expr, $($arg:tt)+) => {
        failure::err_msg(format!($fmt, $($arg)+))
    };
}
