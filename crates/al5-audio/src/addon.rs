//! Audio addon installation

use al5_core::{AllegroError, AllegroResult, Version};

use crate::AudioDriver;

/// Install the audio subsystem. Must succeed before voices can be created.
pub fn install_audio<D: AudioDriver + ?Sized>(driver: &D) -> AllegroResult<()> {
    if driver.install() {
        log::info!("Audio addon installed");
        Ok(())
    } else {
        log::warn!("Audio addon installation failed");
        Err(AllegroError::AddonInit("audio"))
    }
}

pub fn audio_installed<D: AudioDriver + ?Sized>(driver: &D) -> bool {
    driver.is_installed()
}

/// Uninstall the audio subsystem.
///
/// Every voice goes with it. A [`crate::Voice`] that outlives the call reports
/// [`AllegroError::Released`] and skips the native destroy when dropped.
///
/// # Safety
///
/// No voice of `driver` may be in use on another thread during the call.
pub unsafe fn uninstall_audio<D: AudioDriver + ?Sized>(driver: &D) {
    // SAFETY: forwarded from the caller.
    unsafe { driver.uninstall() };
    log::info!("Audio addon uninstalled");
}

/// Compiled version of the audio addon.
pub fn audio_version<D: AudioDriver + ?Sized>(driver: &D) -> Version {
    Version::from_packed(driver.version())
}
