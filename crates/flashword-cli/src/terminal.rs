//! Terminal stand-ins for the audio and speech services.

use std::io::Write;
use std::process::{Command, Stdio};

use flashword_core::cues::{Cues, Tone, FAILURE_TONES, SUCCESS_TONES};

/// Rings the terminal bell for feedback cues and prints (or speaks) words.
///
/// Everything goes to stderr so the interactive transcript on stdout stays clean.
pub struct TerminalCues {
    speech_command: Option<Vec<String>>,
}

impl TerminalCues {
    pub fn new(speech_command: Option<&str>) -> Self {
        let speech_command = speech_command
            .map(|cmd| cmd.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .filter(|parts| !parts.is_empty());
        Self { speech_command }
    }

    fn ring(&self, name: &str, tones: &[Tone]) {
        let total_ms = tones
            .iter()
            .map(|t| t.offset_ms + t.duration_ms)
            .max()
            .unwrap_or(0);
        tracing::debug!("{name} cue: {} tone(s) over {total_ms}ms", tones.len());
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\x07");
        let _ = stderr.flush();
    }

    fn spawn_speech(&self, parts: &[String], text: &str) {
        let Some((program, args)) = parts.split_first() else {
            return;
        };
        let spawned = Command::new(program)
            .args(args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            // Waited on off the input loop so finished speakers are reaped.
            Ok(mut child) => {
                std::thread::spawn(move || {
                    if let Err(e) = child.wait() {
                        tracing::debug!("speech command did not exit cleanly: {e}");
                    }
                });
            }
            Err(e) => tracing::warn!("failed to run speech command '{program}': {e}"),
        }
    }
}

impl Cues for TerminalCues {
    fn success(&self) {
        self.ring("success", &SUCCESS_TONES);
    }

    fn failure(&self) {
        self.ring("failure", &FAILURE_TONES);
    }

    fn pronounce(&self, text: &str, language: &str) {
        eprintln!("[say:{language}] {text}");
        if let Some(parts) = &self.speech_command {
            self.spawn_speech(parts, text);
        }
    }
}
