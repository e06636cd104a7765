//! Audio driver seam
//!
//! [`AudioDriver`] mirrors the `allegro_audio` ABI one call per method: raw
//! enumeration values in and out, `bool` for success, `None` for null. The safe
//! types in this crate ([`crate::Voice`], the addon functions) sit on top and
//! do all conversion and error mapping.
//!
//! The driver state behind an implementation is process-wide. Implementations
//! add no locking of their own around native calls; sharing a voice between
//! threads is only as safe as Allegro itself makes it.

use std::fmt;
use std::marker::PhantomData;

use al5_core::RawHandle;

/// Kind of object a voice can play from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    /// `ALLEGRO_SAMPLE_INSTANCE`, fully resident in memory
    SampleInstance,
    /// `ALLEGRO_AUDIO_STREAM`, fed incrementally
    AudioStream,
    /// `ALLEGRO_MIXER`
    Mixer,
}

impl AttachmentKind {
    /// Streaming attachments cannot be paused or seeked through the voice.
    pub fn is_streaming(self) -> bool {
        !matches!(self, AttachmentKind::SampleInstance)
    }

    pub fn name(self) -> &'static str {
        match self {
            AttachmentKind::SampleInstance => "sample instance",
            AttachmentKind::AudioStream => "audio stream",
            AttachmentKind::Mixer => "mixer",
        }
    }
}

/// Borrowed playback object that can be attached to a voice.
///
/// The object itself is owned by whoever created it (sample, stream and
/// mixer management are outside this crate). `D` is the driver the object
/// belongs to, so an object can only be attached to a voice of that driver.
///
/// ```compile_fail
/// use al5_audio::{Attachment, AudioDriver, HeadlessAudio};
///
/// let foreign: Attachment<dyn AudioDriver> = HeadlessAudio::new().mixer();
/// ```
pub struct Attachment<D: ?Sized> {
    kind: AttachmentKind,
    raw: RawHandle,
    _driver: PhantomData<fn(&D)>,
}

impl<D: ?Sized> Attachment<D> {
    /// Wrap a native object pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live object of type `kind`, created by the audio
    /// driver `D`, and must stay alive while attached.
    pub unsafe fn from_raw<T>(kind: AttachmentKind, ptr: *mut T) -> Option<Self> {
        RawHandle::from_ptr(ptr).map(|raw| Self::new(kind, raw))
    }

    pub(crate) fn new(kind: AttachmentKind, raw: RawHandle) -> Self {
        Self {
            kind,
            raw,
            _driver: PhantomData,
        }
    }

    #[inline]
    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    #[inline]
    pub fn raw(&self) -> RawHandle {
        self.raw
    }
}

impl<D: ?Sized> Clone for Attachment<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Attachment<D> {}

impl<D: ?Sized> PartialEq for Attachment<D> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.raw == other.raw
    }
}

impl<D: ?Sized> Eq for Attachment<D> {}

impl<D: ?Sized> fmt::Debug for Attachment<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("kind", &self.kind)
            .field("raw", &self.raw)
            .finish()
    }
}

/// Raw `allegro_audio` surface.
///
/// Methods taking a voice are `unsafe`: the caller guarantees the handle was
/// returned by [`AudioDriver::create_voice`] on the same driver, in the
/// current [`AudioDriver::generation`], and has not been passed to
/// [`AudioDriver::destroy_voice`] yet.
pub trait AudioDriver {
    // --- Addon ---

    fn install(&self) -> bool;

    /// Uninstall the addon, releasing every voice. Must bump
    /// [`AudioDriver::generation`].
    ///
    /// # Safety
    /// No voice of this driver may be in use on another thread during the call.
    unsafe fn uninstall(&self);

    fn is_installed(&self) -> bool;

    /// Install generation. Voices created in an earlier generation were
    /// released by [`AudioDriver::uninstall`] and must not be touched.
    fn generation(&self) -> u64;

    /// Packed version word.
    fn version(&self) -> u32;

    // --- Voice lifecycle ---

    /// Frequency, depth and channel configuration are hints; the driver may
    /// pick other values.
    fn create_voice(&self, freq: u32, depth: u32, chan_conf: u32) -> Option<RawHandle>;

    /// # Safety
    /// See trait docs.
    unsafe fn destroy_voice(&self, voice: RawHandle);

    /// # Safety
    /// See trait docs.
    unsafe fn detach_voice(&self, voice: RawHandle);

    /// # Safety
    /// See trait docs. `object` must satisfy [`Attachment::from_raw`] for
    /// this driver.
    unsafe fn attach(&self, voice: RawHandle, kind: AttachmentKind, object: RawHandle) -> bool;

    // --- Voice accessors ---

    /// # Safety
    /// See trait docs.
    unsafe fn voice_frequency(&self, voice: RawHandle) -> u32;

    /// # Safety
    /// See trait docs.
    unsafe fn voice_channels(&self, voice: RawHandle) -> u32;

    /// # Safety
    /// See trait docs.
    unsafe fn voice_depth(&self, voice: RawHandle) -> u32;

    /// # Safety
    /// See trait docs.
    unsafe fn voice_playing(&self, voice: RawHandle) -> bool;

    /// # Safety
    /// See trait docs.
    unsafe fn set_voice_playing(&self, voice: RawHandle, val: bool) -> bool;

    /// # Safety
    /// See trait docs.
    unsafe fn voice_position(&self, voice: RawHandle) -> u32;

    /// # Safety
    /// See trait docs.
    unsafe fn set_voice_position(&self, voice: RawHandle, val: u32) -> bool;

    /// # Safety
    /// See trait docs.
    unsafe fn voice_has_attachments(&self, voice: RawHandle) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_samples_are_non_streaming() {
        assert!(!AttachmentKind::SampleInstance.is_streaming());
        assert!(AttachmentKind::AudioStream.is_streaming());
        assert!(AttachmentKind::Mixer.is_streaming());
    }

    #[test]
    fn test_null_attachment_is_rejected() {
        let attachment = unsafe {
            Attachment::<dyn AudioDriver>::from_raw(AttachmentKind::Mixer, std::ptr::null_mut::<u8>())
        };
        assert!(attachment.is_none());
    }

    #[test]
    fn test_attachments_compare_by_kind_and_handle() {
        let raw = RawHandle::from_addr(0x40).unwrap();
        let mixer = Attachment::<dyn AudioDriver>::new(AttachmentKind::Mixer, raw);
        assert_eq!(mixer, mixer.clone());
        assert_ne!(mixer, Attachment::new(AttachmentKind::AudioStream, raw));
    }
}
