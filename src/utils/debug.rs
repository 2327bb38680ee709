use std::sync::atomic::{AtomicBool, Ordering};

static SCAN_DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_scan_debug(enabled: bool) {
    SCAN_DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn scan_debug_enabled() -> bool {
    SCAN_DEBUG.load(Ordering::Relaxed)
}
