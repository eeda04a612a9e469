//! Playback controller integration tests
//!
//! Tests for the full state machine against a scripted fake handle.
//! Focus on real-world scenarios: play before the clip is buffered,
//! replacement mid-playback, unsupported formats.

use mood_core::{AudioSource, HandleEvent, MediaHandle, MoodError, SourceId};
use mood_playback::{PlaybackError, PlaybackPhase, PlayerController, PlayerEvent};
use std::time::Duration;

// ===== Test Helpers =====

struct FakeHandle {
    ready: bool,
    fail_start: bool,
    started: u32,
    paused: u32,
    muted: bool,
    position: Duration,
    duration: Option<Duration>,
}

impl FakeHandle {
    fn ready_clip(duration_secs: u64) -> Self {
        Self {
            ready: true,
            fail_start: false,
            started: 0,
            paused: 0,
            muted: false,
            position: Duration::ZERO,
            duration: Some(Duration::from_secs(duration_secs)),
        }
    }

    fn buffering_clip() -> Self {
        Self {
            ready: false,
            ..Self::ready_clip(180)
        }
    }

    fn broken_clip() -> Self {
        Self {
            fail_start: true,
            ..Self::ready_clip(180)
        }
    }
}

impl MediaHandle for FakeHandle {
    fn ready(&self) -> bool {
        self.ready
    }

    fn start(&mut self) -> mood_core::Result<()> {
        if self.fail_start {
            return Err(MoodError::playback_unavailable("unsupported format"));
        }
        self.started += 1;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused += 1;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

fn create_source(id: u64, name: &str) -> AudioSource {
    AudioSource::new(SourceId::new(id), name, 1024, "audio/wav")
}

// ===== Basic Transitions =====

#[test]
fn test_play_pause_round_trip() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::ready_clip(180);
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    assert_eq!(controller.phase(), PlaybackPhase::Idle);
    assert_eq!(controller.progress_percent(), 0.0);

    controller.play(&mut handle).unwrap();
    assert_eq!(controller.phase(), PlaybackPhase::Playing);
    assert_eq!(handle.started, 1);

    controller.pause(&mut handle);
    assert_eq!(controller.phase(), PlaybackPhase::Paused);
    assert_eq!(handle.paused, 1);

    controller.play(&mut handle).unwrap();
    assert_eq!(controller.phase(), PlaybackPhase::Playing);
}

#[test]
fn test_progress_tracks_position() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::ready_clip(200);
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    controller.play(&mut handle).unwrap();

    handle.position = Duration::from_secs(50);
    controller.handle_event(HandleEvent::TimeAdvanced, &mut handle);
    assert_eq!(controller.progress_percent(), 25.0);

    // Position past the duration still clamps to 100
    handle.position = Duration::from_secs(500);
    controller.handle_event(HandleEvent::TimeAdvanced, &mut handle);
    assert_eq!(controller.progress_percent(), 100.0);
}

#[test]
fn test_unknown_duration_reports_zero_progress() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::ready_clip(180);
    handle.duration = None;
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    controller.play(&mut handle).unwrap();

    handle.position = Duration::from_secs(30);
    controller.handle_event(HandleEvent::TimeAdvanced, &mut handle);
    assert_eq!(controller.progress_percent(), 0.0);
}

#[test]
fn test_ended_resets_progress_and_stops_sampling() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::ready_clip(100);
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    controller.play(&mut handle).unwrap();

    handle.position = Duration::from_secs(100);
    controller.handle_event(HandleEvent::TimeAdvanced, &mut handle);
    assert_eq!(controller.progress_percent(), 100.0);

    controller.handle_event(HandleEvent::Ended, &mut handle);
    assert_eq!(controller.phase(), PlaybackPhase::Ended);
    assert_eq!(controller.progress_percent(), 0.0);

    // Stray time advance after the end must not resurrect progress
    controller.handle_event(HandleEvent::TimeAdvanced, &mut handle);
    assert_eq!(controller.progress_percent(), 0.0);

    // Restart after Ended goes straight back to Playing
    controller.play(&mut handle).unwrap();
    assert_eq!(controller.phase(), PlaybackPhase::Playing);
}

// ===== Suspended Play Requests =====

#[test]
fn test_play_suspends_until_ready_signal() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::buffering_clip();
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    controller.play(&mut handle).unwrap();
    assert_eq!(controller.phase(), PlaybackPhase::Loading);
    assert!(controller.is_play_pending());
    assert_eq!(handle.started, 0);

    // Mute stays responsive while the request is suspended
    controller.toggle_mute(&mut handle);
    assert!(controller.is_muted());
    assert!(controller.is_play_pending());

    handle.ready = true;
    controller.handle_event(HandleEvent::ReadyToPlay, &mut handle);
    assert_eq!(controller.phase(), PlaybackPhase::Playing);
    assert_eq!(handle.started, 1);
    assert!(!controller.is_play_pending());
}

#[test]
fn test_replacement_discards_suspended_play() {
    let mut controller = PlayerController::new();
    let mut first = FakeHandle::buffering_clip();
    let source_a = create_source(1, "a.wav");

    controller.attach(&source_a, &mut first);
    controller.play(&mut first).unwrap();
    assert!(controller.is_play_pending());

    // Replace the source before the ready signal arrives
    let mut second = FakeHandle::ready_clip(60);
    let source_b = create_source(2, "b.mp3");
    controller.attach(&source_b, &mut second);

    assert!(!controller.is_play_pending());
    assert_eq!(controller.phase(), PlaybackPhase::Idle);
    assert_eq!(controller.source(), Some(source_b.id));

    // A late ready signal from the new handle must not start playback
    controller.handle_event(HandleEvent::ReadyToPlay, &mut second);
    assert_eq!(controller.phase(), PlaybackPhase::Idle);
    assert_eq!(second.started, 0);
}

#[test]
fn test_pause_cancels_suspended_play() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::buffering_clip();
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    controller.play(&mut handle).unwrap();
    controller.pause(&mut handle);

    assert!(!controller.is_play_pending());
    assert_eq!(controller.phase(), PlaybackPhase::Paused);

    handle.ready = true;
    controller.handle_event(HandleEvent::ReadyToPlay, &mut handle);
    assert_eq!(handle.started, 0);
}

// ===== Failure Handling =====

#[test]
fn test_start_failure_forces_idle() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::broken_clip();
    let source = create_source(1, "clip.xyz");

    controller.attach(&source, &mut handle);
    let result = controller.play(&mut handle);

    assert!(matches!(result, Err(PlaybackError::Unavailable(_))));
    assert_eq!(controller.phase(), PlaybackPhase::Idle);

    let events = controller.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlayerEvent::Error { .. })));
}

#[test]
fn test_resume_failure_clears_progress() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::ready_clip(100);
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    controller.play(&mut handle).unwrap();

    handle.position = Duration::from_secs(40);
    controller.handle_event(HandleEvent::TimeAdvanced, &mut handle);
    assert_eq!(controller.progress_percent(), 40.0);

    controller.pause(&mut handle);

    // The device goes away between pause and resume
    handle.fail_start = true;
    assert!(controller.play(&mut handle).is_err());

    assert_eq!(controller.phase(), PlaybackPhase::Idle);
    assert_eq!(controller.progress_percent(), 0.0);
}

// ===== Mute =====

#[test]
fn test_mute_is_orthogonal_to_phase_and_progress() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::ready_clip(100);
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    controller.play(&mut handle).unwrap();
    handle.position = Duration::from_secs(40);
    controller.handle_event(HandleEvent::TimeAdvanced, &mut handle);

    let phase_before = controller.phase();
    let progress_before = controller.progress_percent();

    controller.toggle_mute(&mut handle);
    assert!(controller.is_muted());
    assert!(handle.muted);
    assert_eq!(controller.phase(), phase_before);
    assert_eq!(controller.progress_percent(), progress_before);

    controller.toggle_mute(&mut handle);
    assert!(!controller.is_muted());
}

#[test]
fn test_mute_survives_source_replacement() {
    let mut controller = PlayerController::new();
    let mut first = FakeHandle::ready_clip(100);
    controller.attach(&create_source(1, "a.wav"), &mut first);
    controller.toggle_mute(&mut first);

    let mut second = FakeHandle::ready_clip(60);
    controller.attach(&create_source(2, "b.wav"), &mut second);

    // Sticky mute is re-applied to the new handle
    assert!(controller.is_muted());
    assert!(second.muted);
}

// ===== Events =====

#[test]
fn test_events_are_drained_in_order() {
    let mut controller = PlayerController::new();
    let mut handle = FakeHandle::ready_clip(100);
    let source = create_source(1, "clip.wav");

    controller.attach(&source, &mut handle);
    controller.play(&mut handle).unwrap();

    let events = controller.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlayerEvent::SourceAttached { .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        PlayerEvent::StateChanged {
            phase: PlaybackPhase::Playing
        }
    )));

    // Queue is empty after draining
    assert!(!controller.has_pending_events());
    assert!(controller.take_events().is_empty());
}
