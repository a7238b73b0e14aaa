#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initialize logging for the solver and its front ends.
///
/// # Behavior
/// - **Native (CLI):** Debug when `debug_enabled`, otherwise Info; `RUST_LOG`
///   overrides either. Output is bare (no timestamp, module or target) since it
///   shares stderr with the CLI's own summary lines.
/// - **WASM:** browser console at Debug or Info.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    init_wasm(debug_enabled);

    #[cfg(not(target_arch = "wasm32"))]
    init_native(debug_enabled);
}

#[cfg(target_arch = "wasm32")]
fn init_wasm(debug_enabled: bool) {
    let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

    match console_log::init_with_level(level) {
        Ok(()) => log::info!("WASM logger initialized at {level:?} level"),
        Err(e) => {
            // keep going without logging rather than failing module start-up
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_native(debug_enabled: bool) {
    let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

    if native_builder(level).try_init().is_ok() {
        log::debug!("Native logger initialized at {level:?} level");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder
}
