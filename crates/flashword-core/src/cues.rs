//! Audio feedback and pronunciation hooks.
//!
//! The game fires these and never waits on them. Front ends decide how to
//! render them: synthesized tones, a terminal bell, a speech engine.

use std::sync::Mutex;

/// One tone of a feedback cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    /// Delay from the start of the cue.
    pub offset_ms: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

/// Ascending C major arpeggio (C5, E5, G5).
pub const SUCCESS_TONES: [Tone; 3] = [
    Tone {
        frequency_hz: 523.25,
        waveform: Waveform::Sine,
        offset_ms: 0,
        duration_ms: 100,
    },
    Tone {
        frequency_hz: 659.25,
        waveform: Waveform::Sine,
        offset_ms: 100,
        duration_ms: 100,
    },
    Tone {
        frequency_hz: 783.99,
        waveform: Waveform::Sine,
        offset_ms: 200,
        duration_ms: 300,
    },
];

/// Low descending pair.
pub const FAILURE_TONES: [Tone; 2] = [
    Tone {
        frequency_hz: 200.0,
        waveform: Waveform::Sawtooth,
        offset_ms: 0,
        duration_ms: 200,
    },
    Tone {
        frequency_hz: 150.0,
        waveform: Waveform::Sawtooth,
        offset_ms: 150,
        duration_ms: 400,
    },
];

/// Receiver for feedback cues and pronunciation requests.
pub trait Cues: Send + Sync {
    /// A correct answer.
    fn success(&self);
    /// A wrong answer.
    fn failure(&self);
    /// Speak `text` in the language tagged `language` (e.g. "en-US").
    fn pronounce(&self, text: &str, language: &str);
}

/// Cues that do nothing.
pub struct SilentCues;

impl Cues for SilentCues {
    fn success(&self) {}
    fn failure(&self) {}
    fn pronounce(&self, _: &str, _: &str) {}
}

/// A cue as recorded by [`RecordingCues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    Success,
    Failure,
    Pronounce { text: String, language: String },
}

/// Records every cue, for asserting on what a front end would have played.
#[derive(Debug, Default)]
pub struct RecordingCues {
    cues: Mutex<Vec<Cue>>,
}

impl RecordingCues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first.
    pub fn cues(&self) -> Vec<Cue> {
        self.lock().clone()
    }

    /// Number of pronunciation requests received.
    pub fn pronounce_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|c| matches!(c, Cue::Pronounce { .. }))
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Cue>> {
        self.cues.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Cues for RecordingCues {
    fn success(&self) {
        self.lock().push(Cue::Success);
    }

    fn failure(&self) {
        self.lock().push(Cue::Failure);
    }

    fn pronounce(&self, text: &str, language: &str) {
        self.lock().push(Cue::Pronounce {
            text: text.to_string(),
            language: language.to_string(),
        });
    }
}
