//! Logging initialization and utilities

/// Initialize the logging system.
///
/// Uses env_logger with a default filter level of `info`.
/// Override with the RUST_LOG environment variable.
///
/// # Example
/// ```no_run
/// endgen::core::logging::init();
/// log::info!("generator ready");
/// ```
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Like [`init`], but tolerates repeated calls. Intended for tests, where
/// multiple cases may race to install the logger.
pub fn try_init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .is_test(true)
    .try_init();
}
