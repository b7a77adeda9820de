//! Rodio-based audio cue adapter
//!
//! Generates the fallback chime or plays a sound file.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use async_trait::async_trait;
use rodio::source::{SineWave, Source, Zero};
use rodio::{Decoder, OutputStream, Sink};
use tokio::sync::oneshot;

use crate::application::ports::{AudioCue, AudioCueError};
use crate::domain::alert::{AlertSound, ChimeSpec};

/// Audio cue implementation using rodio
pub struct RodioAudioCue;

impl RodioAudioCue {
    /// Create a new rodio-based audio cue
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioAudioCue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCue for RodioAudioCue {
    async fn play(&self, sound: &AlertSound) -> Result<(), AudioCueError> {
        let sound = sound.clone();
        let (started_tx, started_rx) = oneshot::channel();

        // The output stream must live on the thread that plays it; only the
        // setup result is awaited, playback continues in the background.
        tokio::task::spawn_blocking(move || match start_playback(&sound) {
            Ok((_stream, sink)) => {
                let _ = started_tx.send(Ok(()));
                sink.sleep_until_end();
            }
            Err(e) => {
                let _ = started_tx.send(Err(e));
            }
        });

        started_rx
            .await
            .map_err(|_| AudioCueError::PlaybackFailed("Audio thread exited".to_string()))?
    }
}

/// Open the output device and queue the sound
fn start_playback(sound: &AlertSound) -> Result<(OutputStream, Sink), AudioCueError> {
    let (stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| AudioCueError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| AudioCueError::PlaybackFailed(e.to_string()))?;

    match sound {
        AlertSound::Chime(spec) => sink.append(chime_source(spec)),
        AlertSound::File(path) => {
            let file = File::open(path).map_err(|e| {
                AudioCueError::PlaybackFailed(format!("{}: {}", path.display(), e))
            })?;
            let decoder = Decoder::new(BufReader::new(file))
                .map_err(|e| AudioCueError::PlaybackFailed(e.to_string()))?;
            sink.append(decoder);
        }
    }

    Ok((stream, sink))
}

/// Mix the chime's tones into a single source
fn chime_source(spec: &ChimeSpec) -> Box<dyn Source<Item = f32> + Send> {
    spec.frequencies
        .iter()
        .enumerate()
        .map(|(index, &freq)| -> Box<dyn Source<Item = f32> + Send> {
            Box::new(
                Enveloped::new(SineWave::new(freq).take_duration(spec.tone_length), spec.clone())
                    .delay(spec.onset(index)),
            )
        })
        .reduce(|mixed, tone| -> Box<dyn Source<Item = f32> + Send> {
            Box::new(mixed.mix(tone))
        })
        .unwrap_or_else(|| -> Box<dyn Source<Item = f32> + Send> {
            Box::new(Zero::<f32>::new(1, 48_000).take_duration(Duration::ZERO))
        })
}

/// Applies the chime's attack/decay envelope to a tone
struct Enveloped<S> {
    inner: S,
    spec: ChimeSpec,
    position: u64,
}

impl<S> Enveloped<S> {
    fn new(inner: S, spec: ChimeSpec) -> Self {
        Self {
            inner,
            spec,
            position: 0,
        }
    }
}

impl<S> Iterator for Enveloped<S>
where
    S: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let sample = self.inner.next()?;
        let rate = self.inner.sample_rate() as f64 * self.inner.channels() as f64;
        let elapsed = Duration::from_secs_f64(self.position as f64 / rate);
        self.position += 1;
        Some(sample * self.spec.gain_at(elapsed))
    }
}

impl<S> Source for Enveloped<S>
where
    S: Source<Item = f32>,
{
    fn current_frame_len(&self) -> Option<usize> {
        self.inner.current_frame_len()
    }

    fn channels(&self) -> u16 {
        self.inner.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }
}
