//! Native `allegro_audio` driver
//!
//! Straight pass-through to `al5-sys`. Only built with the `native` feature.

#![cfg(feature = "native")]

use std::sync::atomic::{AtomicU64, Ordering};

use al5_core::RawHandle;
use al5_sys as sys;

use crate::{AttachmentKind, AudioDriver};

static GENERATION: AtomicU64 = AtomicU64::new(0);

/// The process-wide Allegro audio driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeAudio;

#[inline]
fn voice_ptr(voice: RawHandle) -> *mut sys::ALLEGRO_VOICE {
    voice.as_ptr()
}

impl AudioDriver for NativeAudio {
    fn install(&self) -> bool {
        unsafe { sys::al_install_audio() }
    }

    unsafe fn uninstall(&self) {
        unsafe { sys::al_uninstall_audio() };
        GENERATION.fetch_add(1, Ordering::AcqRel);
    }

    fn is_installed(&self) -> bool {
        unsafe { sys::al_is_audio_installed() }
    }

    fn generation(&self) -> u64 {
        GENERATION.load(Ordering::Acquire)
    }

    fn version(&self) -> u32 {
        unsafe { sys::al_get_allegro_audio_version() }
    }

    fn create_voice(&self, freq: u32, depth: u32, chan_conf: u32) -> Option<RawHandle> {
        RawHandle::from_ptr(unsafe { sys::al_create_voice(freq, depth, chan_conf) })
    }

    unsafe fn destroy_voice(&self, voice: RawHandle) {
        unsafe { sys::al_destroy_voice(voice_ptr(voice)) }
    }

    unsafe fn detach_voice(&self, voice: RawHandle) {
        unsafe { sys::al_detach_voice(voice_ptr(voice)) }
    }

    unsafe fn attach(&self, voice: RawHandle, kind: AttachmentKind, raw: RawHandle) -> bool {
        let voice = voice_ptr(voice);
        unsafe {
            match kind {
                AttachmentKind::SampleInstance => {
                    sys::al_attach_sample_instance_to_voice(raw.as_ptr(), voice)
                }
                AttachmentKind::AudioStream => {
                    sys::al_attach_audio_stream_to_voice(raw.as_ptr(), voice)
                }
                AttachmentKind::Mixer => sys::al_attach_mixer_to_voice(raw.as_ptr(), voice),
            }
        }
    }

    unsafe fn voice_frequency(&self, voice: RawHandle) -> u32 {
        unsafe { sys::al_get_voice_frequency(voice_ptr(voice)) }
    }

    unsafe fn voice_channels(&self, voice: RawHandle) -> u32 {
        unsafe { sys::al_get_voice_channels(voice_ptr(voice)) }
    }

    unsafe fn voice_depth(&self, voice: RawHandle) -> u32 {
        unsafe { sys::al_get_voice_depth(voice_ptr(voice)) }
    }

    unsafe fn voice_playing(&self, voice: RawHandle) -> bool {
        unsafe { sys::al_get_voice_playing(voice_ptr(voice)) }
    }

    unsafe fn set_voice_playing(&self, voice: RawHandle, val: bool) -> bool {
        unsafe { sys::al_set_voice_playing(voice_ptr(voice), val) }
    }

    unsafe fn voice_position(&self, voice: RawHandle) -> u32 {
        unsafe { sys::al_get_voice_position(voice_ptr(voice)) }
    }

    unsafe fn set_voice_position(&self, voice: RawHandle, val: u32) -> bool {
        unsafe { sys::al_set_voice_position(voice_ptr(voice), val) }
    }

    unsafe fn voice_has_attachments(&self, voice: RawHandle) -> bool {
        unsafe { sys::al_voice_has_attachments(voice_ptr(voice)) }
    }
}
