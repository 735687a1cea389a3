/// Shared detector registry
///
/// Detection backends are expensive to construct, so one instance is
/// shared across all requests. The registry creates that instance exactly
/// once behind a double-checked lock; the capability slot inside it is a
/// `OnceLock`, which makes post-initialization reads lock-free and makes
/// "first attach wins" a property of the type rather than a convention.

use std::sync::{Arc, OnceLock, RwLock};

use super::{Capability, ObjectDetector};

/// The shared instance handed to every caller.
///
/// Starts without a capability; one may be attached later, once. A caller
/// that needs a differently configured backend must reset the registry
/// and reinitialize - attached capabilities are never swapped in place.
pub struct DetectorSlot {
    detector: OnceLock<Arc<dyn ObjectDetector>>,
}

impl DetectorSlot {
    fn new() -> Self {
        Self {
            detector: OnceLock::new(),
        }
    }

    /// Current capability. Lock-free once the slot is initialized.
    pub fn capability(&self) -> Capability {
        match self.detector.get() {
            Some(detector) => Capability::Detector(Arc::clone(detector)),
            None => Capability::NoDetector,
        }
    }

    /// Attach a detector if none is attached yet. Returns whether this
    /// call's detector became the shared one.
    pub fn attach(&self, detector: Arc<dyn ObjectDetector>) -> bool {
        self.detector.set(detector).is_ok()
    }
}

/// Process-wide holder for the shared [`DetectorSlot`].
pub struct DetectorRegistry {
    instance: RwLock<Option<Arc<DetectorSlot>>>,
}

impl DetectorRegistry {
    pub const fn new() -> Self {
        Self {
            instance: RwLock::new(None),
        }
    }

    /// Get the shared instance, creating it on first call.
    ///
    /// A supplied detector is attached only when the instance has no
    /// capability yet; otherwise it is ignored and the existing one wins.
    pub fn acquire(&self, seed: Option<Arc<dyn ObjectDetector>>) -> Arc<DetectorSlot> {
        // Fast path: instance already exists
        let existing = {
            let guard = self.instance.read().expect("detector registry lock poisoned");
            guard.as_ref().map(Arc::clone)
        };

        let slot = match existing {
            Some(slot) => slot,
            None => {
                let mut guard = self.instance.write().expect("detector registry lock poisoned");
                // Re-check: another thread may have won the write race
                match guard.as_ref() {
                    Some(slot) => Arc::clone(slot),
                    None => {
                        let slot = Arc::new(DetectorSlot::new());
                        *guard = Some(Arc::clone(&slot));
                        log::debug!("detector registry initialized");
                        slot
                    }
                }
            }
        };

        if let Some(detector) = seed {
            if slot.attach(detector) {
                log::info!("detection capability attached to shared registry");
            }
        }

        slot
    }

    /// Discard the shared instance so the next `acquire` rebuilds it.
    ///
    /// Intended for test setup/teardown only. Not safe to call while
    /// other threads are validating: callers holding the old instance
    /// keep using it, and a new one is created alongside.
    pub fn reset(&self) {
        let mut guard = self.instance.write().expect("detector registry lock poisoned");
        *guard = None;
    }
}

/// The process-wide registry used by callers that do not manage their own.
pub fn global() -> &'static DetectorRegistry {
    static GLOBAL: DetectorRegistry = DetectorRegistry::new();
    &GLOBAL
}
