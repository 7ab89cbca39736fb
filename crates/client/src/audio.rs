//! Best-effort audio cues for reveal outcomes.
//!
//! Two short synthesized tones: an ascending pair (C5 to E5) for a correct
//! guess and a descending pair (G4 to C4) for an incorrect one, both with an
//! exponential gain decay.
//!
//! The output stream is opened lazily on the first cue and kept for the
//! process lifetime. Sound is cosmetic: every failure here is logged and
//! swallowed, and after one failed initialization the cues stay silent
//! rather than re-probing the device on every guess.

use std::f32::consts::TAU;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

/// Gain at the start of a cue.
const START_GAIN: f32 = 0.3;
/// Gain the exponential ramp decays to by the end of the cue.
const END_GAIN: f32 = 0.01;

/// A two-segment tone: `(frequency_hz, duration_secs)` per segment.
#[derive(Clone, Copy, Debug)]
struct Tone {
    segments: [(f32, f32); 2],
    total: f32,
    elapsed: f32,
    phase: f32,
}

impl Tone {
    /// Ascending C5 -> E5, 0.3s.
    fn correct() -> Self {
        Self::new([(523.25, 0.1), (659.25, 0.2)])
    }

    /// Descending G4 -> C4, 0.4s.
    fn incorrect() -> Self {
        Self::new([(392.0, 0.15), (261.63, 0.25)])
    }

    fn new(segments: [(f32, f32); 2]) -> Self {
        Self {
            segments,
            total: segments[0].1 + segments[1].1,
            elapsed: 0.0,
            phase: 0.0,
        }
    }

    fn current_freq(&self) -> f32 {
        if self.elapsed < self.segments[0].1 {
            self.segments[0].0
        } else {
            self.segments[1].0
        }
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.total
    }

    /// Produces the next mono sample and advances the tone's clock.
    fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let freq = self.current_freq();
        self.phase = (self.phase + TAU * freq / sample_rate) % TAU;

        let progress = (self.elapsed / self.total).clamp(0.0, 1.0);
        let gain = START_GAIN * (END_GAIN / START_GAIN).powf(progress);

        self.elapsed += 1.0 / sample_rate;
        self.phase.sin() * gain
    }
}

/// Live output stream plus the slot the render callback reads tones from.
struct Output {
    // Dropping the stream stops playback; held for the process lifetime.
    _stream: cpal::Stream,
    slot: Arc<Mutex<Option<Tone>>>,
}

impl Output {
    fn open() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("no audio output device available"))?;

        let sample_rate = device
            .default_output_config()
            .context("no default audio output config")?
            .sample_rate();
        let channels = 2usize;
        let config = cpal::StreamConfig {
            channels: channels as u16,
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        let slot: Arc<Mutex<Option<Tone>>> = Arc::new(Mutex::new(None));
        let render_slot = Arc::clone(&slot);
        let rate = sample_rate.0 as f32;

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    render(data, channels, rate, &render_slot);
                },
                |err| tracing::debug!("Audio stream error: {err}"),
                None,
            )
            .context("failed to build audio output stream")?;

        stream.play().context("failed to start audio stream")?;

        tracing::debug!("Audio output opened at {} Hz", sample_rate.0);

        Ok(Self {
            _stream: stream,
            slot,
        })
    }
}

/// Render callback: synthesize the active tone, or silence.
fn render(data: &mut [f32], channels: usize, sample_rate: f32, slot: &Mutex<Option<Tone>>) {
    // Never block the audio thread on the UI thread's lock.
    let Ok(mut guard) = slot.try_lock() else {
        data.fill(0.0);
        return;
    };

    for frame in data.chunks_mut(channels) {
        let sample = guard
            .as_mut()
            .map(|tone| tone.next_sample(sample_rate))
            .unwrap_or(0.0);
        frame.fill(sample);
    }

    if guard.as_ref().is_some_and(Tone::finished) {
        *guard = None;
    }
}

enum State {
    Uninitialized,
    Ready(Output),
    Disabled,
}

/// Lazily initialized, process-wide audio cue player.
pub struct AudioCues {
    state: State,
}

impl AudioCues {
    pub fn new(muted: bool) -> Self {
        let state = if muted {
            State::Disabled
        } else {
            State::Uninitialized
        };
        Self { state }
    }

    /// Plays the cue for a reveal outcome; silently does nothing when the
    /// device is unavailable or muted.
    pub fn play(&mut self, correct: bool) {
        self.ensure_init();

        if let State::Ready(output) = &self.state
            && let Ok(mut slot) = output.slot.lock()
        {
            *slot = Some(if correct {
                Tone::correct()
            } else {
                Tone::incorrect()
            });
        }
    }

    /// Idempotent lazy initialization; one failure disables cues for good.
    fn ensure_init(&mut self) {
        if matches!(self.state, State::Uninitialized) {
            self.state = match Output::open() {
                Ok(output) => State::Ready(output),
                Err(e) => {
                    tracing::warn!("Audio cues disabled: {e:#}");
                    State::Disabled
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_tone_rises() {
        let tone = Tone::correct();
        assert_eq!(tone.total, 0.3);

        let mut early = tone;
        early.elapsed = 0.05;
        let mut late = tone;
        late.elapsed = 0.2;
        assert!(early.current_freq() < late.current_freq());
    }

    #[test]
    fn incorrect_tone_falls() {
        let tone = Tone::incorrect();
        assert_eq!(tone.total, 0.4);

        let mut early = tone;
        early.elapsed = 0.05;
        let mut late = tone;
        late.elapsed = 0.3;
        assert!(early.current_freq() > late.current_freq());
    }

    #[test]
    fn tone_finishes_after_its_duration() {
        let mut tone = Tone::correct();
        let sample_rate = 48_000.0;
        let samples = (0.3 * sample_rate) as usize + 1;

        for _ in 0..samples {
            tone.next_sample(sample_rate);
        }
        assert!(tone.finished());
    }

    #[test]
    fn gain_decays_over_the_tone() {
        let mut tone = Tone::correct();
        let sample_rate = 48_000.0;

        let mut peak_start: f32 = 0.0;
        for _ in 0..2_000 {
            peak_start = peak_start.max(tone.next_sample(sample_rate).abs());
        }

        while tone.elapsed < 0.28 {
            tone.next_sample(sample_rate);
        }
        let mut peak_end: f32 = 0.0;
        for _ in 0..500 {
            peak_end = peak_end.max(tone.next_sample(sample_rate).abs());
        }

        assert!(peak_start > peak_end);
    }

    #[test]
    fn render_fills_silence_without_a_tone() {
        let slot = Mutex::new(None);
        let mut data = [1.0f32; 64];
        render(&mut data, 2, 48_000.0, &slot);
        assert!(data.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn render_clears_a_finished_tone() {
        let mut tone = Tone::correct();
        tone.elapsed = tone.total + 1.0;
        let slot = Mutex::new(Some(tone));

        let mut data = [0.0f32; 64];
        render(&mut data, 2, 48_000.0, &slot);

        assert!(slot.lock().unwrap().is_none());
    }
}
