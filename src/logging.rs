/// Conditional logging module for development builds
///
/// The `log!` macro provides informational console logging that is compiled out
/// in production (release) builds by default. Messages that must always reach
/// the console (map outcome, skipped effects) go through `leptos::logging`.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust,ignore
/// use crate::logging::log;
///
/// log!("Observing {} reveal targets", count);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}

pub use log;

const BANNER_TITLE_STYLE: &str = "color: #00ffff; font-size: 24px; font-weight: bold;";
const BANNER_TAGLINE_STYLE: &str = "color: #a0a0a0; font-size: 14px;";

/// Print the styled two-line welcome banner to the browser console
pub fn print_banner() {
    web_sys::console::log_2(&"%cSwap&Go".into(), &BANNER_TITLE_STYLE.into());
    web_sys::console::log_2(&"%cThe Future of EV Charging".into(), &BANNER_TAGLINE_STYLE.into());
}
