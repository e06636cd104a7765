//! al5-sys: raw Allegro 5 declarations
//!
//! Mirrors the subset of `allegro5/*.h` wrapped by the `al5-*` crates.
//! Nothing here is safe to call directly; see the subsystem crates for the
//! checked wrappers.

#![allow(non_camel_case_types)]

use std::ffi::c_uint;

// ═══════════════════════════════════════════════════════════════════════════════
// OPAQUE TYPES
// ═══════════════════════════════════════════════════════════════════════════════

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
                _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
            }
        )*
    };
}

opaque!(
    ALLEGRO_DISPLAY,
    ALLEGRO_VOICE,
    ALLEGRO_MIXER,
    ALLEGRO_SAMPLE_INSTANCE,
    ALLEGRO_AUDIO_STREAM,
);

/// `ALLEGRO_AUDIO_DEPTH` (C enum, passed by value).
pub type ALLEGRO_AUDIO_DEPTH = c_uint;
/// `ALLEGRO_CHANNEL_CONF` (C enum, passed by value).
pub type ALLEGRO_CHANNEL_CONF = c_uint;

pub const ALLEGRO_AUDIO_DEPTH_INT8: ALLEGRO_AUDIO_DEPTH = 0x00;
pub const ALLEGRO_AUDIO_DEPTH_INT16: ALLEGRO_AUDIO_DEPTH = 0x01;
pub const ALLEGRO_AUDIO_DEPTH_INT24: ALLEGRO_AUDIO_DEPTH = 0x02;
pub const ALLEGRO_AUDIO_DEPTH_FLOAT32: ALLEGRO_AUDIO_DEPTH = 0x03;
pub const ALLEGRO_AUDIO_DEPTH_UNSIGNED: ALLEGRO_AUDIO_DEPTH = 0x08;
pub const ALLEGRO_AUDIO_DEPTH_UINT8: ALLEGRO_AUDIO_DEPTH =
    ALLEGRO_AUDIO_DEPTH_INT8 | ALLEGRO_AUDIO_DEPTH_UNSIGNED;
pub const ALLEGRO_AUDIO_DEPTH_UINT16: ALLEGRO_AUDIO_DEPTH =
    ALLEGRO_AUDIO_DEPTH_INT16 | ALLEGRO_AUDIO_DEPTH_UNSIGNED;
pub const ALLEGRO_AUDIO_DEPTH_UINT24: ALLEGRO_AUDIO_DEPTH =
    ALLEGRO_AUDIO_DEPTH_INT24 | ALLEGRO_AUDIO_DEPTH_UNSIGNED;

pub const ALLEGRO_CHANNEL_CONF_1: ALLEGRO_CHANNEL_CONF = 0x10;
pub const ALLEGRO_CHANNEL_CONF_2: ALLEGRO_CHANNEL_CONF = 0x20;
pub const ALLEGRO_CHANNEL_CONF_3: ALLEGRO_CHANNEL_CONF = 0x30;
pub const ALLEGRO_CHANNEL_CONF_4: ALLEGRO_CHANNEL_CONF = 0x40;
pub const ALLEGRO_CHANNEL_CONF_5_1: ALLEGRO_CHANNEL_CONF = 0x51;
pub const ALLEGRO_CHANNEL_CONF_6_1: ALLEGRO_CHANNEL_CONF = 0x61;
pub const ALLEGRO_CHANNEL_CONF_7_1: ALLEGRO_CHANNEL_CONF = 0x71;

// ═══════════════════════════════════════════════════════════════════════════════
// CORE (allegro)
// ═══════════════════════════════════════════════════════════════════════════════

unsafe extern "C" {
    pub fn al_get_allegro_version() -> u32;

    /// Thread-local: affects the calling thread only.
    pub fn al_set_standard_file_interface();
    /// Thread-local: affects the calling thread only.
    pub fn al_set_standard_fs_interface();
}

#[cfg(windows)]
unsafe extern "C" {
    /// Returns the `HWND` backing `display`.
    pub fn al_get_win_window_handle(display: *mut ALLEGRO_DISPLAY) -> *mut std::ffi::c_void;
}

// ═══════════════════════════════════════════════════════════════════════════════
// AUDIO ADDON (allegro_audio)
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "audio")]
unsafe extern "C" {
    pub fn al_install_audio() -> bool;
    pub fn al_uninstall_audio();
    pub fn al_is_audio_installed() -> bool;
    pub fn al_get_allegro_audio_version() -> u32;

    pub fn al_create_voice(
        freq: c_uint,
        depth: ALLEGRO_AUDIO_DEPTH,
        chan_conf: ALLEGRO_CHANNEL_CONF,
    ) -> *mut ALLEGRO_VOICE;
    pub fn al_destroy_voice(voice: *mut ALLEGRO_VOICE);
    pub fn al_detach_voice(voice: *mut ALLEGRO_VOICE);

    pub fn al_get_voice_frequency(voice: *const ALLEGRO_VOICE) -> c_uint;
    pub fn al_get_voice_channels(voice: *const ALLEGRO_VOICE) -> ALLEGRO_CHANNEL_CONF;
    pub fn al_get_voice_depth(voice: *const ALLEGRO_VOICE) -> ALLEGRO_AUDIO_DEPTH;
    pub fn al_get_voice_playing(voice: *const ALLEGRO_VOICE) -> bool;
    pub fn al_set_voice_playing(voice: *mut ALLEGRO_VOICE, val: bool) -> bool;
    pub fn al_get_voice_position(voice: *const ALLEGRO_VOICE) -> c_uint;
    pub fn al_set_voice_position(voice: *mut ALLEGRO_VOICE, val: c_uint) -> bool;
    pub fn al_voice_has_attachments(voice: *const ALLEGRO_VOICE) -> bool;

    pub fn al_attach_sample_instance_to_voice(
        spl: *mut ALLEGRO_SAMPLE_INSTANCE,
        voice: *mut ALLEGRO_VOICE,
    ) -> bool;
    pub fn al_attach_audio_stream_to_voice(
        stream: *mut ALLEGRO_AUDIO_STREAM,
        voice: *mut ALLEGRO_VOICE,
    ) -> bool;
    pub fn al_attach_mixer_to_voice(mixer: *mut ALLEGRO_MIXER, voice: *mut ALLEGRO_VOICE)
    -> bool;
}

// ═══════════════════════════════════════════════════════════════════════════════
// ACODEC ADDON (allegro_acodec)
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "acodec")]
unsafe extern "C" {
    pub fn al_init_acodec_addon() -> bool;
    pub fn al_is_acodec_addon_initialized() -> bool;
    pub fn al_get_allegro_acodec_version() -> u32;
}

// ═══════════════════════════════════════════════════════════════════════════════
// PHYSFS ADDON (allegro_physfs)
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "physfs")]
unsafe extern "C" {
    /// Sets both the file and filesystem interface for the calling thread.
    pub fn al_set_physfs_file_interface();
    pub fn al_get_allegro_physfs_version() -> u32;
}
