//! Audio output voices
//!
//! A [`Voice`] is one output channel allocated from the sound driver. It is
//! created with frequency / depth / channel hints, plays whatever single
//! sample instance, stream or mixer is attached to it, and is released
//! either explicitly with [`Voice::destroy`] or when dropped.
//!
//! ```text
//! create ──▶ Allocated ──attach──▶ Stopped ⇄ Playing ──destroy──▶ Released
//! ```

use std::fmt;

use al5_core::{AllegroError, AllegroResult, RawHandle};

use crate::{Attachment, AudioDriver, ChannelConf, Depth, VoiceSpec};

/// Handle to a native audio output voice.
///
/// After [`Voice::destroy`] the handle is cleared, every accessor returns
/// [`AllegroError::Released`], and destroying again is a no-op. The same holds
/// once the audio addon is uninstalled underneath the voice.
///
/// `Voice` is neither `Send` nor `Sync`; the native driver makes no thread
/// safety promises for a single voice.
pub struct Voice<'d, D: AudioDriver + ?Sized> {
    driver: &'d D,
    raw: Option<RawHandle>,
    generation: u64,
}

impl<'d, D: AudioDriver + ?Sized> Voice<'d, D> {
    /// Allocate a voice. The parameters are hints only; query the voice for
    /// what the driver actually chose.
    ///
    /// Returns `None` when the driver cannot allocate a voice.
    pub fn create(
        driver: &'d D,
        frequency: u32,
        depth: Depth,
        channels: ChannelConf,
    ) -> Option<Self> {
        let raw = driver.create_voice(frequency, depth.as_u32(), channels.as_u32());
        match raw {
            Some(raw) => log::debug!(
                "Voice {:?} created ({} Hz, {:?}, {:?} requested)",
                raw,
                frequency,
                depth,
                channels
            ),
            None => log::warn!(
                "Voice allocation failed ({} Hz, {:?}, {:?})",
                frequency,
                depth,
                channels
            ),
        }
        let generation = driver.generation();
        raw.map(|raw| Self {
            driver,
            raw: Some(raw),
            generation,
        })
    }

    pub fn from_spec(driver: &'d D, spec: &VoiceSpec) -> Option<Self> {
        Self::create(driver, spec.frequency, spec.depth, spec.channels)
    }

    /// Whether this handle still refers to a native voice.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.raw().is_some()
    }

    /// Native handle, or `None` once destroyed or uninstalled.
    #[inline]
    pub fn raw(&self) -> Option<RawHandle> {
        self.raw.filter(|_| self.generation == self.driver.generation())
    }

    #[inline]
    fn live(&self) -> AllegroResult<RawHandle> {
        self.raw().ok_or(AllegroError::Released("voice"))
    }

    /// Release the native voice. Safe to call any number of times.
    pub fn destroy(&mut self) {
        let Some(raw) = self.raw.take() else {
            return;
        };
        if self.generation != self.driver.generation() {
            log::debug!("Voice {:?} already released by audio uninstall", raw);
            return;
        }
        // SAFETY: `raw` came from `create_voice` on this driver in the current
        // generation and is cleared above, so it is destroyed exactly once.
        unsafe { self.driver.destroy_voice(raw) };
        log::debug!("Voice {:?} destroyed", raw);
    }

    /// Attach a sample instance, stream or mixer belonging to this driver.
    pub fn attach(&mut self, object: Attachment<D>) -> AllegroResult<()> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver; `object` was built for `D`
        // under its own constructor contract.
        if unsafe { self.driver.attach(raw, object.kind(), object.raw()) } {
            log::debug!("Attached {} to voice {:?}", object.kind().name(), raw);
            Ok(())
        } else {
            log::warn!("Failed to attach {} to voice {:?}", object.kind().name(), raw);
            Err(AllegroError::VoiceAttach(object.kind().name()))
        }
    }

    /// Detach whatever is attached. The voice itself survives.
    pub fn detach(&mut self) -> AllegroResult<()> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        unsafe { self.driver.detach_voice(raw) };
        Ok(())
    }

    pub fn has_attachments(&self) -> AllegroResult<bool> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        Ok(unsafe { self.driver.voice_has_attachments(raw) })
    }

    /// Actual frequency in Hz.
    pub fn frequency(&self) -> AllegroResult<u32> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        Ok(unsafe { self.driver.voice_frequency(raw) })
    }

    /// Actual channel configuration.
    ///
    /// Fails with [`AllegroError::UnrecognizedValue`] if the driver reports a
    /// layout outside [`ChannelConf`].
    pub fn channels(&self) -> AllegroResult<ChannelConf> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        ChannelConf::try_from(unsafe { self.driver.voice_channels(raw) })
    }

    /// Actual sample depth.
    ///
    /// Fails with [`AllegroError::UnrecognizedValue`] if the driver reports a
    /// depth outside [`Depth`].
    pub fn depth(&self) -> AllegroResult<Depth> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        Depth::try_from(unsafe { self.driver.voice_depth(raw) })
    }

    pub fn is_playing(&self) -> AllegroResult<bool> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        Ok(unsafe { self.driver.voice_playing(raw) })
    }

    /// Start or stop playback.
    ///
    /// Only works with a non-streaming object (a sample instance) attached.
    /// A successful change of state rewinds the sample position to 0, so
    /// pausing and resuming starts over from the beginning.
    pub fn set_playing(&mut self, val: bool) -> AllegroResult<()> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        if unsafe { self.driver.set_voice_playing(raw, val) } {
            Ok(())
        } else {
            log::warn!("Voice {:?}: set_playing({}) rejected", raw, val);
            Err(AllegroError::VoicePlaying)
        }
    }

    /// Current sample frame of the attached sample instance, or 0 when no
    /// non-streaming object is attached.
    pub fn position(&self) -> AllegroResult<u32> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        Ok(unsafe { self.driver.voice_position(raw) })
    }

    /// Seek the attached sample instance to `val` sample frames.
    pub fn set_position(&mut self, val: u32) -> AllegroResult<()> {
        let raw = self.live()?;
        // SAFETY: live handle from this driver.
        if unsafe { self.driver.set_voice_position(raw, val) } {
            Ok(())
        } else {
            log::warn!("Voice {:?}: set_position({}) rejected", raw, val);
            Err(AllegroError::VoicePosition)
        }
    }
}

impl<D: AudioDriver + ?Sized> Drop for Voice<'_, D> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<D: AudioDriver + ?Sized> fmt::Debug for Voice<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Voice").field("raw", &self.raw).finish()
    }
}
