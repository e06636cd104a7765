//! Binding error types
//!
//! The native layer only ever reports "failed" (a `false` or a null), so no
//! variant carries more detail than which operation failed.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllegroError {
    #[error("Failed to initialize {0} addon")]
    AddonInit(&'static str),

    #[error("Failed to set voice playing status")]
    VoicePlaying,

    #[error("Failed to set voice position")]
    VoicePosition,

    #[error("Failed to attach {0} to voice")]
    VoiceAttach(&'static str),

    #[error("{0} handle has already been released")]
    Released(&'static str),

    #[error("Unrecognized {kind} value: {value:#x}")]
    UnrecognizedValue { kind: &'static str, value: u32 },
}

pub type AllegroResult<T> = Result<T, AllegroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_operation() {
        assert_eq!(
            AllegroError::AddonInit("acodec").to_string(),
            "Failed to initialize acodec addon"
        );
        assert_eq!(
            AllegroError::VoicePlaying.to_string(),
            "Failed to set voice playing status"
        );
        assert_eq!(
            AllegroError::VoicePosition.to_string(),
            "Failed to set voice position"
        );
    }

    #[test]
    fn test_unrecognized_value_renders_hex() {
        let err = AllegroError::UnrecognizedValue {
            kind: "channel configuration",
            value: 0x99,
        };
        assert_eq!(err.to_string(), "Unrecognized channel configuration value: 0x99");
    }
}
