//! Environment-gated logging for the simulator.
//!
//! Logging is off by default so the core stays silent inside tests and
//! library consumers. Set `JAMSIM_LOGGING=true` to enable it, e.g.
//! `JAMSIM_LOGGING=true cargo test -- --nocapture`.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Reads the `JAMSIM_LOGGING` environment variable and arms the gate.
/// Unset means disabled; anything other than `true`/`false` is a usage
/// error worth failing loudly on.
pub fn init_logging() {
    match env::var("JAMSIM_LOGGING").as_deref() {
        Ok("true") => ENABLE_LOGGING.store(true, Ordering::SeqCst),
        Ok("false") | Err(_) => ENABLE_LOGGING.store(false, Ordering::SeqCst),
        Ok(other) => panic!(
            "JAMSIM_LOGGING must be 'true' or 'false', got '{}'.\nRun e.g.: JAMSIM_LOGGING=true cargo run",
            other
        ),
    }
}

/// Returns whether logging is currently enabled
pub fn is_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::SeqCst)
}

pub fn log(prefix: &str, message: &str) {
    if is_enabled() {
        println!("[{}] {}", prefix, message);
    }
}
