//! al5-physfs: Allegro PhysicsFS addon
//!
//! Redirects Allegro's file and filesystem routines through PhysicsFS, so
//! paths resolve inside whatever archives and directories PhysicsFS has
//! mounted. Mounting itself is done with PhysicsFS directly.
//!
//! # Scope
//!
//! The switch is **per thread**. Allegro keeps the active file interface in
//! thread-local state, so calling [`use_file_interface`] on one thread leaves
//! every other thread on its current interface. Threads spawned later start
//! on the standard interface.

use std::collections::HashMap;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;

pub use al5_core::Version;

/// Raw interface-switching surface
pub trait FileInterfaceBackend {
    /// Route the calling thread's file and filesystem calls through PhysicsFS.
    fn set_physfs_interface(&self);
    /// Route the calling thread's file and filesystem calls through stdio.
    fn set_standard_interface(&self);
    /// Packed version word of the PhysicsFS addon.
    fn version(&self) -> u32;
}

/// Use PhysicsFS for file I/O on the calling thread.
pub fn use_file_interface<B: FileInterfaceBackend + ?Sized>(backend: &B) {
    backend.set_physfs_interface();
    log::debug!("{:?}: file interface set to PhysicsFS", thread::current().id());
}

/// Go back to the standard stdio interfaces on the calling thread.
pub fn use_standard_interface<B: FileInterfaceBackend + ?Sized>(backend: &B) {
    backend.set_standard_interface();
    log::debug!("{:?}: file interface set to standard", thread::current().id());
}

/// Compiled version of the addon.
pub fn version<B: FileInterfaceBackend + ?Sized>(backend: &B) -> Version {
    Version::from_packed(backend.version())
}

// ═══════════════════════════════════════════════════════════════════════════════
// NATIVE
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePhysfs;

#[cfg(feature = "native")]
impl FileInterfaceBackend for NativePhysfs {
    fn set_physfs_interface(&self) {
        unsafe { al5_sys::al_set_physfs_file_interface() }
    }

    fn set_standard_interface(&self) {
        unsafe {
            al5_sys::al_set_standard_file_interface();
            al5_sys::al_set_standard_fs_interface();
        }
    }

    fn version(&self) -> u32 {
        unsafe { al5_sys::al_get_allegro_physfs_version() }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HEADLESS
// ═══════════════════════════════════════════════════════════════════════════════

/// File interface in effect for a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveInterface {
    #[default]
    Standard,
    Physfs,
}

/// In-memory backend that records the active interface per thread.
#[derive(Debug)]
pub struct HeadlessFileSystem {
    active: Mutex<HashMap<ThreadId, ActiveInterface>>,
    version: Version,
}

impl HeadlessFileSystem {
    pub fn new() -> Self {
        Self {
            active: Mutex::new(HashMap::new()),
            version: Version::new(5, 2, 8, 0),
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Interface in effect for the calling thread.
    pub fn active_interface(&self) -> ActiveInterface {
        self.active
            .lock()
            .get(&thread::current().id())
            .copied()
            .unwrap_or_default()
    }

    /// Put every thread back on the standard interface.
    pub fn reset(&self) {
        self.active.lock().clear();
    }

    fn set(&self, interface: ActiveInterface) {
        self.active.lock().insert(thread::current().id(), interface);
    }
}

impl Default for HeadlessFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileInterfaceBackend for HeadlessFileSystem {
    fn set_physfs_interface(&self) {
        self.set(ActiveInterface::Physfs);
    }

    fn set_standard_interface(&self) {
        self.set(ActiveInterface::Standard);
    }

    fn version(&self) -> u32 {
        self.version.packed()
    }
}
