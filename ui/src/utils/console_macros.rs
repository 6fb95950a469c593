/// Macros for properly formatted console logging
/// These macros wrap gloo_console functions and prefix each line with a
/// `js_sys::Date::now()` timestamp. They only work in the browser, so keep
/// them out of state and validation code that is tested natively.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($level:ident, $fmt:expr) => {
        $crate::utils::console_macros::gloo_console::$level!(format!(
            "[{}] {}",
            $crate::utils::console_macros::js_sys::Date::now(),
            $fmt
        ))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::gloo_console::$level!(format!(
            "[{}] {}",
            $crate::utils::console_macros::js_sys::Date::now(),
            format!($fmt, $($arg)*)
        ))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::__console_emit!(info, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::__console_emit!(log, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::__console_emit!(warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::__console_emit!(error, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::__console_emit!(debug, $($arg)*)
    };
}

// Re-exported so the macros resolve from other crates in the workspace
#[doc(hidden)]
pub use gloo_console;
#[doc(hidden)]
pub use js_sys;
