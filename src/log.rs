//! Diagnostic output
//!
//! Messages are printed through `esp-println` when the `esp32-log` feature is
//! enabled. Otherwise the arguments are only type-checked.

macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        let _ = core::format_args!($($arg)*);
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!("WARN {}", core::format_args!($($arg)*));
        #[cfg(not(feature = "esp32-log"))]
        let _ = core::format_args!($($arg)*);
    }};
}

pub(crate) use log_info;
pub(crate) use log_warn;
