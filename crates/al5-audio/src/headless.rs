//! Headless audio driver
//!
//! An in-memory stand-in for `allegro_audio` that follows the documented
//! native behaviour closely enough to exercise [`crate::Voice`] without a sound
//! card or an Allegro installation:
//!
//! - voices can only be created once the addon is installed
//! - play state and position only respond when a sample instance is attached
//! - a play state transition rewinds the sample to frame 0
//! - streams and mixers start the voice as soon as they are attached
//!
//! Handles are synthetic ids and are never dereferenced. Objects minted here
//! are `Attachment<HeadlessAudio>` and only attach to headless voices.

use std::collections::{HashMap, HashSet};

use al5_core::{RawHandle, Version};
use parking_lot::Mutex;

use crate::{Attachment, AttachmentKind, AudioDriver, ChannelConf, Depth};

const FIRST_ID: usize = 0x1000;
const ID_STRIDE: usize = 0x10;

/// Knobs for simulating a particular sound driver
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Force every voice to this frequency regardless of the hint.
    pub frequency: Option<u32>,
    /// Force every voice to this depth regardless of the hint.
    pub depth: Option<Depth>,
    /// Force every voice to this channel layout regardless of the hint.
    pub channels: Option<ChannelConf>,
    /// Make every voice allocation fail.
    pub refuse_voices: bool,
    /// Make `install` fail.
    pub refuse_install: bool,
    pub version: Version,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            frequency: None,
            depth: None,
            channels: None,
            refuse_voices: false,
            refuse_install: false,
            version: Version::new(5, 2, 8, 0),
        }
    }
}

#[derive(Debug)]
struct VoiceState {
    frequency: u32,
    depth: u32,
    chan_conf: u32,
    playing: bool,
    position: u32,
    attached: Option<(AttachmentKind, usize)>,
}

impl VoiceState {
    fn attached_sample(&self) -> Option<usize> {
        match self.attached {
            Some((AttachmentKind::SampleInstance, id)) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct State {
    installed: bool,
    generation: u64,
    next_id: usize,
    voices: HashMap<usize, VoiceState>,
    objects: HashMap<usize, AttachmentKind>,
    sample_frames: HashMap<usize, u32>,
    in_use: HashSet<usize>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            installed: false,
            generation: 0,
            next_id: FIRST_ID,
            voices: HashMap::new(),
            objects: HashMap::new(),
            sample_frames: HashMap::new(),
            in_use: HashSet::new(),
        }
    }
}

impl State {
    fn mint(&mut self) -> RawHandle {
        let id = self.next_id;
        self.next_id += ID_STRIDE;
        RawHandle::from_addr(id).unwrap_or_else(|| unreachable!("ids start above zero"))
    }

    fn detach(&mut self, voice: usize) {
        let Some(state) = self.voices.get_mut(&voice) else {
            return;
        };
        if let Some((_, object)) = state.attached.take() {
            self.in_use.remove(&object);
        }
        state.playing = false;
        state.position = 0;
    }
}

/// In-memory [`AudioDriver`]
#[derive(Debug, Default)]
pub struct HeadlessAudio {
    config: HeadlessConfig,
    state: Mutex<State>,
}

impl HeadlessAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HeadlessConfig) -> Self {
        Self {
            config,
            state: Mutex::new(State::default()),
        }
    }

    pub fn config(&self) -> &HeadlessConfig {
        &self.config
    }

    /// Drop every voice and object and uninstall the addon. Voices from
    /// before the reset stay released.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        let generation = state.generation + 1;
        *state = State {
            generation,
            ..State::default()
        };
    }

    /// Create a sample instance holding `frames` sample frames.
    pub fn sample_instance(&self, frames: u32) -> Attachment<Self> {
        let mut state = self.state.lock();
        let raw = state.mint();
        state.objects.insert(raw.addr(), AttachmentKind::SampleInstance);
        state.sample_frames.insert(raw.addr(), frames);
        Attachment::new(AttachmentKind::SampleInstance, raw)
    }

    pub fn audio_stream(&self) -> Attachment<Self> {
        self.object(AttachmentKind::AudioStream)
    }

    pub fn mixer(&self) -> Attachment<Self> {
        self.object(AttachmentKind::Mixer)
    }

    fn object(&self, kind: AttachmentKind) -> Attachment<Self> {
        let mut state = self.state.lock();
        let raw = state.mint();
        state.objects.insert(raw.addr(), kind);
        Attachment::new(kind, raw)
    }

    /// Play `frames` frames on every playing voice with a sample attached.
    /// A voice that reaches the end of its sample stops there.
    pub fn advance(&self, frames: u32) {
        let mut state = self.state.lock();
        let State {
            voices,
            sample_frames,
            ..
        } = &mut *state;

        for voice in voices.values_mut().filter(|v| v.playing) {
            let Some(sample) = voice.attached_sample() else {
                continue;
            };
            let len = sample_frames.get(&sample).copied().unwrap_or(0);
            voice.position = voice.position.saturating_add(frames).min(len);
            if voice.position >= len {
                voice.playing = false;
            }
        }
    }

    /// Number of voices currently allocated.
    pub fn live_voices(&self) -> usize {
        self.state.lock().voices.len()
    }
}

impl AudioDriver for HeadlessAudio {
    fn install(&self) -> bool {
        if self.config.refuse_install {
            return false;
        }
        self.state.lock().installed = true;
        true
    }

    unsafe fn uninstall(&self) {
        let mut state = self.state.lock();
        state.voices.clear();
        state.in_use.clear();
        state.installed = false;
        state.generation += 1;
    }

    fn is_installed(&self) -> bool {
        self.state.lock().installed
    }

    fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    fn version(&self) -> u32 {
        self.config.version.packed()
    }

    fn create_voice(&self, freq: u32, depth: u32, chan_conf: u32) -> Option<RawHandle> {
        let mut state = self.state.lock();
        if !state.installed || self.config.refuse_voices {
            return None;
        }

        let raw = state.mint();
        state.voices.insert(
            raw.addr(),
            VoiceState {
                frequency: self.config.frequency.unwrap_or(freq),
                depth: self.config.depth.map_or(depth, Depth::as_u32),
                chan_conf: self.config.channels.map_or(chan_conf, ChannelConf::as_u32),
                playing: false,
                position: 0,
                attached: None,
            },
        );
        Some(raw)
    }

    unsafe fn destroy_voice(&self, voice: RawHandle) {
        let mut state = self.state.lock();
        state.detach(voice.addr());
        state.voices.remove(&voice.addr());
    }

    unsafe fn detach_voice(&self, voice: RawHandle) {
        self.state.lock().detach(voice.addr());
    }

    unsafe fn attach(&self, voice: RawHandle, kind: AttachmentKind, object: RawHandle) -> bool {
        let mut state = self.state.lock();
        let id = object.addr();

        if state.objects.get(&id) != Some(&kind) || state.in_use.contains(&id) {
            return false;
        }
        let Some(target) = state.voices.get_mut(&voice.addr()) else {
            return false;
        };
        if target.attached.is_some() {
            return false;
        }

        target.attached = Some((kind, id));
        target.position = 0;
        target.playing = kind.is_streaming();
        state.in_use.insert(id);
        true
    }

    unsafe fn voice_frequency(&self, voice: RawHandle) -> u32 {
        self.state
            .lock()
            .voices
            .get(&voice.addr())
            .map_or(0, |v| v.frequency)
    }

    unsafe fn voice_channels(&self, voice: RawHandle) -> u32 {
        self.state
            .lock()
            .voices
            .get(&voice.addr())
            .map_or(0, |v| v.chan_conf)
    }

    unsafe fn voice_depth(&self, voice: RawHandle) -> u32 {
        self.state
            .lock()
            .voices
            .get(&voice.addr())
            .map_or(0, |v| v.depth)
    }

    unsafe fn voice_playing(&self, voice: RawHandle) -> bool {
        self.state
            .lock()
            .voices
            .get(&voice.addr())
            .is_some_and(|v| v.playing)
    }

    unsafe fn set_voice_playing(&self, voice: RawHandle, val: bool) -> bool {
        let mut state = self.state.lock();
        let Some(target) = state.voices.get_mut(&voice.addr()) else {
            return false;
        };
        if target.attached_sample().is_none() {
            return false;
        }
        if target.playing != val {
            target.playing = val;
            target.position = 0;
        }
        true
    }

    unsafe fn voice_position(&self, voice: RawHandle) -> u32 {
        let state = self.state.lock();
        match state.voices.get(&voice.addr()) {
            Some(v) if v.attached_sample().is_some() => v.position,
            _ => 0,
        }
    }

    unsafe fn set_voice_position(&self, voice: RawHandle, val: u32) -> bool {
        let mut state = self.state.lock();
        let State {
            voices,
            sample_frames,
            ..
        } = &mut *state;

        let Some(target) = voices.get_mut(&voice.addr()) else {
            return false;
        };
        let Some(sample) = target.attached_sample() else {
            return false;
        };
        if val >= sample_frames.get(&sample).copied().unwrap_or(0) {
            return false;
        }
        target.position = val;
        true
    }

    unsafe fn voice_has_attachments(&self, voice: RawHandle) -> bool {
        self.state
            .lock()
            .voices
            .get(&voice.addr())
            .is_some_and(|v| v.attached.is_some())
    }
}
