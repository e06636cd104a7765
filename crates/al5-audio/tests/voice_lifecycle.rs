//! Voice Lifecycle Tests
//!
//! Runs the voice wrapper against the headless driver. Verifies:
//! - Allocation failure surfaces as `None`
//! - Hints vs. negotiated parameters
//! - Idempotent destroy
//! - Voices outliving an addon uninstall report released
//! - Play state / position rules for sample vs. streaming attachments
//! - Detach keeps the voice alive

use al5_audio::{
    AllegroError, ChannelConf, Depth, HeadlessAudio, HeadlessConfig, Voice, VoiceSpec,
    install_audio, uninstall_audio,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn installed(config: HeadlessConfig) -> HeadlessAudio {
    init_logging();
    let driver = HeadlessAudio::with_config(config);
    install_audio(&driver).unwrap();
    driver
}

fn stereo_voice(driver: &HeadlessAudio) -> Voice<'_, HeadlessAudio> {
    Voice::create(driver, 44100, Depth::Int16, ChannelConf::Two).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════════
// ALLOCATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_allocation_failure_returns_none() {
    let driver = installed(HeadlessConfig {
        refuse_voices: true,
        ..Default::default()
    });
    assert!(Voice::create(&driver, 44100, Depth::Int16, ChannelConf::Two).is_none());
}

#[test]
fn test_create_before_install_returns_none() {
    init_logging();
    let driver = HeadlessAudio::new();
    assert!(Voice::from_spec(&driver, &VoiceSpec::default()).is_none());
}

#[test]
fn test_accessors_report_requested_values_when_honoured() {
    let driver = installed(HeadlessConfig::default());
    let voice = Voice::create(&driver, 22050, Depth::Uint8, ChannelConf::One).unwrap();

    assert_eq!(voice.frequency(), Ok(22050));
    assert_eq!(voice.depth(), Ok(Depth::Uint8));
    assert_eq!(voice.channels(), Ok(ChannelConf::One));
    assert_eq!(voice.is_playing(), Ok(false));
}

#[test]
fn test_accessors_report_negotiated_values() {
    let driver = installed(HeadlessConfig {
        frequency: Some(48000),
        depth: Some(Depth::Float32),
        channels: Some(ChannelConf::Two),
        ..Default::default()
    });
    let voice = Voice::create(&driver, 22050, Depth::Int16, ChannelConf::One).unwrap();

    assert_eq!(voice.frequency(), Ok(48000));
    assert_eq!(voice.depth(), Ok(Depth::Float32));
    assert_eq!(voice.channels(), Ok(ChannelConf::Two));
}

// ═══════════════════════════════════════════════════════════════════════════════
// RELEASE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_destroy_twice_is_a_no_op() {
    let driver = installed(HeadlessConfig::default());
    let mut voice = stereo_voice(&driver);

    voice.destroy();
    voice.destroy();

    assert!(!voice.is_live());
    assert_eq!(driver.live_voices(), 0);
}

#[test]
fn test_destroy_does_not_touch_other_voices() {
    let driver = installed(HeadlessConfig::default());
    let mut first = stereo_voice(&driver);
    let second = stereo_voice(&driver);

    first.destroy();
    assert_eq!(driver.live_voices(), 1);
    assert_eq!(second.frequency(), Ok(44100));
}

#[test]
fn test_uninstall_releases_surviving_voices() {
    let driver = installed(HeadlessConfig::default());
    let mut voice = stereo_voice(&driver);
    voice.attach(driver.sample_instance(100)).unwrap();

    unsafe { uninstall_audio(&driver) };

    assert_eq!(driver.live_voices(), 0);
    assert!(!voice.is_live());
    assert_eq!(voice.raw(), None);
    assert_eq!(voice.frequency(), Err(AllegroError::Released("voice")));
    assert_eq!(voice.channels(), Err(AllegroError::Released("voice")));
    assert_eq!(voice.set_playing(true), Err(AllegroError::Released("voice")));
}

#[test]
fn test_stale_voice_stays_released_after_reinstall() {
    let driver = installed(HeadlessConfig::default());
    let mut stale = stereo_voice(&driver);

    unsafe { uninstall_audio(&driver) };
    install_audio(&driver).unwrap();
    let fresh = stereo_voice(&driver);

    assert!(!stale.is_live());
    assert_eq!(stale.depth(), Err(AllegroError::Released("voice")));
    stale.destroy();
    drop(stale);

    assert!(fresh.is_live());
    assert_eq!(driver.live_voices(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════════
// PLAYBACK WITH A SAMPLE INSTANCE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_set_playing_resets_position() {
    let driver = installed(HeadlessConfig::default());
    let mut voice = stereo_voice(&driver);
    voice.attach(driver.sample_instance(1000)).unwrap();

    voice.set_playing(true).unwrap();
    assert_eq!(voice.position(), Ok(0));
    assert_eq!(voice.is_playing(), Ok(true));
}

#[test]
fn test_pause_and_resume_starts_over() {
    let driver = installed(HeadlessConfig::default());
    let mut voice = stereo_voice(&driver);
    voice.attach(driver.sample_instance(1000)).unwrap();

    voice.set_playing(true).unwrap();
    driver.advance(300);
    assert_eq!(voice.position(), Ok(300));

    voice.set_playing(false).unwrap();
    assert_eq!(voice.position(), Ok(0));

    voice.set_playing(true).unwrap();
    assert_eq!(voice.position(), Ok(0));
}

#[test]
fn test_set_position_seeks_within_sample() {
    let driver = installed(HeadlessConfig::default());
    let mut voice = stereo_voice(&driver);
    voice.attach(driver.sample_instance(1000)).unwrap();

    voice.set_position(250).unwrap();
    assert_eq!(voice.position(), Ok(250));
    assert_eq!(voice.set_position(1000), Err(AllegroError::VoicePosition));
    assert_eq!(voice.position(), Ok(250));
}

// ═══════════════════════════════════════════════════════════════════════════════
// STREAMING AND EMPTY VOICES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_streaming_attachment_rejects_play_state_and_seek() {
    let driver = installed(HeadlessConfig::default());

    for object in [driver.audio_stream(), driver.mixer()] {
        let mut voice = stereo_voice(&driver);
        voice.attach(object).unwrap();

        assert_eq!(voice.is_playing(), Ok(true));
        assert_eq!(voice.set_playing(false), Err(AllegroError::VoicePlaying));
        assert_eq!(voice.set_position(10), Err(AllegroError::VoicePosition));
        assert_eq!(voice.position(), Ok(0));
    }
}

#[test]
fn test_empty_voice_rejects_play_state_and_reports_zero_position() {
    let driver = installed(HeadlessConfig::default());
    let mut voice = stereo_voice(&driver);

    assert_eq!(voice.position(), Ok(0));
    assert_eq!(voice.set_playing(true), Err(AllegroError::VoicePlaying));
    assert_eq!(voice.set_position(0), Err(AllegroError::VoicePosition));
}

#[test]
fn test_detach_keeps_voice_alive() {
    let driver = installed(HeadlessConfig::default());
    let mut voice = stereo_voice(&driver);
    voice.attach(driver.sample_instance(500)).unwrap();
    voice.set_playing(true).unwrap();
    assert_eq!(voice.has_attachments(), Ok(true));

    voice.detach().unwrap();

    assert!(voice.is_live());
    assert_eq!(voice.has_attachments(), Ok(false));
    assert_eq!(voice.is_playing(), Ok(false));
    assert_eq!(voice.set_playing(true), Err(AllegroError::VoicePlaying));

    voice.attach(driver.audio_stream()).unwrap();
    assert_eq!(voice.has_attachments(), Ok(true));
}
