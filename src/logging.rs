//! Logging macros that forward to `defmt` on the target.
//!
//! The library is also built for the host (unit tests, simulator), where no
//! `defmt` global logger exists. On those builds the arguments are evaluated
//! and dropped.
//!
//! ```ignore
//! log_info!("Border style: {}", style);
//! log_warn!("Display transmit failed");
//! ```

macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "arm")]
        defmt::info!($($arg)*);
        #[cfg(not(target_arch = "arm"))]
        let _ = ($($arg)*,);
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "arm")]
        defmt::debug!($($arg)*);
        #[cfg(not(target_arch = "arm"))]
        let _ = ($($arg)*,);
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "arm")]
        defmt::warn!($($arg)*);
        #[cfg(not(target_arch = "arm"))]
        let _ = ($($arg)*,);
    }};
}
