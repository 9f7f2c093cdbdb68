/// Debug logging for gesture transitions.
///
/// Compiles to nothing without `debug_assertions` and stays silent unless
/// the control was configured with `debug_logging`.
macro_rules! gesture_log {
    ($enabled:expr, $target:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) && $enabled {
            log::debug!(target: $target, $($arg)+);
        }
    };
}
