//! al5-audio: Allegro audio addon bindings
//!
//! Voice management and addon installation for `allegro_audio`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌────────────────┐
//! │ Voice        │────▶│ AudioDriver   │────▶│ allegro_audio  │
//! │ addon fns    │     │ (raw ABI)     │     │ (NativeAudio)  │
//! │              │     │               │     ├────────────────┤
//! │ - validity   │     │ - u32 enums   │     │ in-memory sim  │
//! │ - errors     │     │ - bool / null │     │ (HeadlessAudio)│
//! └──────────────┘     └───────────────┘     └────────────────┘
//! ```

mod addon;
mod driver;
mod format;
mod headless;
mod native;
mod voice;

pub use addon::*;
pub use driver::*;
pub use format::*;
pub use headless::*;
#[cfg(feature = "native")]
pub use native::*;
pub use voice::*;

pub use al5_core::{AllegroError, AllegroResult, RawHandle, Version};

use serde::{Deserialize, Serialize};

/// Requested voice parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSpec {
    pub frequency: u32,
    pub depth: Depth,
    pub channels: ChannelConf,
}

impl Default for VoiceSpec {
    fn default() -> Self {
        Self {
            frequency: 44100,
            depth: Depth::Int16,
            channels: ChannelConf::Two,
        }
    }
}

impl VoiceSpec {
    /// Bytes per interleaved sample frame.
    pub fn frame_size(&self) -> usize {
        self.depth.sample_size() * self.channels.channel_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_cd_stereo() {
        let spec = VoiceSpec::default();
        assert_eq!(spec.frequency, 44100);
        assert_eq!(spec.frame_size(), 4);
    }

    #[test]
    fn test_spec_loads_from_json() {
        let spec: VoiceSpec = serde_json::from_str(
            r#"{"frequency":48000,"depth":"Float32","channels":"FivePointOne"}"#,
        )
        .unwrap();
        assert_eq!(spec.depth, Depth::Float32);
        assert_eq!(spec.frame_size(), 24);
    }
}
