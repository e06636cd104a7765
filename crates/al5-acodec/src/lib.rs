//! al5-acodec: Allegro audio codec addon
//!
//! Registers the WAV, FLAC, Ogg Vorbis, Opus, MOD/IT/XM and MP3 handlers that
//! `allegro_audio` uses for sample and stream loading. Which formats are
//! actually available depends on how Allegro was built.

use std::sync::atomic::{AtomicBool, Ordering};

pub use al5_core::{AllegroError, AllegroResult, Version};

/// Raw `allegro_acodec` surface
pub trait AcodecBackend {
    fn init(&self) -> bool;
    fn is_initialized(&self) -> bool;
    /// Packed version word.
    fn version(&self) -> u32;
}

/// Register all known audio file type handlers.
///
/// Calling it again after success is harmless; the native addon ignores it.
pub fn install<B: AcodecBackend + ?Sized>(backend: &B) -> AllegroResult<()> {
    if backend.init() {
        log::info!("Acodec addon initialized");
        Ok(())
    } else {
        log::warn!("Acodec addon initialization failed");
        Err(AllegroError::AddonInit("acodec"))
    }
}

/// Whether [`install`] has succeeded.
pub fn installed<B: AcodecBackend + ?Sized>(backend: &B) -> bool {
    backend.is_initialized()
}

/// Compiled version of the addon.
pub fn version<B: AcodecBackend + ?Sized>(backend: &B) -> Version {
    Version::from_packed(backend.version())
}

// ═══════════════════════════════════════════════════════════════════════════════
// NATIVE
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeAcodec;

#[cfg(feature = "native")]
impl AcodecBackend for NativeAcodec {
    fn init(&self) -> bool {
        unsafe { al5_sys::al_init_acodec_addon() }
    }

    fn is_initialized(&self) -> bool {
        unsafe { al5_sys::al_is_acodec_addon_initialized() }
    }

    fn version(&self) -> u32 {
        unsafe { al5_sys::al_get_allegro_acodec_version() }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HEADLESS
// ═══════════════════════════════════════════════════════════════════════════════

/// In-memory backend. Keeps the initialized flag per instance so tests can
/// start from a clean slate.
#[derive(Debug)]
pub struct HeadlessAcodec {
    initialized: AtomicBool,
    refuse: bool,
    version: Version,
}

impl HeadlessAcodec {
    pub fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
            refuse: false,
            version: Version::new(5, 2, 8, 0),
        }
    }

    /// A backend whose `init` always fails.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::new()
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn reset(&self) {
        self.initialized.store(false, Ordering::SeqCst);
    }
}

impl Default for HeadlessAcodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AcodecBackend for HeadlessAcodec {
    fn init(&self) -> bool {
        if self.refuse {
            return false;
        }
        self.initialized.store(true, Ordering::SeqCst);
        true
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    fn version(&self) -> u32 {
        self.version.packed()
    }
}
