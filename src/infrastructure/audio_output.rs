// SPDX-License-Identifier: MPL-2.0
//! Audio output using cpal.
//!
//! The decoder thread queues interleaved f32 samples (mono or stereo); the
//! device callback drains them and spreads them over the device channels.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// State shared with the device callback.
#[derive(Debug)]
struct Shared {
    buffer: Mutex<VecDeque<f32>>,
    paused: AtomicBool,
    /// Owned by the surface, so toggling mute reaches every stream.
    muted: Arc<AtomicBool>,
}

/// Output stream on the default device.
///
/// Starts paused. While muted the callback keeps consuming samples so audio
/// stays in step with the picture.
pub struct AudioOutput {
    shared: Arc<Shared>,
    capacity: usize,
    sample_rate: u32,
    channels: u16,
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no output device, its configuration
    /// cannot be read, or the stream fails to start.
    pub fn new(muted: Arc<AtomicBool>) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Io("No audio output device found".to_string()))?;
        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Io(format!("Failed to get audio config: {e}")))?;

        let sample_rate = supported_config.sample_rate();
        let device_channels = supported_config.channels();
        let channels = device_channels.min(2);
        let capacity = (sample_rate as usize) * usize::from(channels);

        let shared = Arc::new(Shared {
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            paused: AtomicBool::new(true),
            muted,
        });

        let config = supported_config.config();
        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &config, channels, Arc::clone(&shared))?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &config, channels, Arc::clone(&shared))?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &config, channels, Arc::clone(&shared))?
            }
            _ => return Err(Error::Io("Unsupported audio sample format".to_string())),
        };
        stream
            .play()
            .map_err(|e| Error::Io(format!("Failed to start audio stream: {e}")))?;

        Ok(Self {
            shared,
            capacity,
            sample_rate,
            channels,
            _stream: stream,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        channels: u16,
        shared: Arc<Shared>,
    ) -> Result<cpal::Stream> {
        let device_channels = usize::from(config.channels).max(1);
        let channels = usize::from(channels);

        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let paused = shared.paused.load(Ordering::Relaxed);
                    let muted = shared.muted.load(Ordering::Relaxed);
                    let Ok(mut buffer) = shared.buffer.lock() else {
                        data.fill(T::from_sample(0.0f32));
                        return;
                    };

                    for out in data.chunks_mut(device_channels) {
                        let mut picked = [0.0f32; 2];
                        if !paused {
                            for slot in picked.iter_mut().take(channels) {
                                *slot = buffer.pop_front().unwrap_or(0.0);
                            }
                            if channels == 1 {
                                picked[1] = picked[0];
                            }
                        }
                        for (c, sample) in out.iter_mut().enumerate() {
                            let value = match picked.get(c) {
                                Some(v) if !muted => v.clamp(-1.0, 0.999_999_9),
                                _ => 0.0,
                            };
                            *sample = T::from_sample(value);
                        }
                    }
                },
                |err| log::warn!("Audio output error: {err}"),
                None,
            )
            .map_err(|e| Error::Io(format!("Failed to build audio stream: {e}")))
    }

    /// Sample rate the queued samples must be in.
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Interleaved channel count the queued samples must have (1 or 2).
    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Queues samples, dropping what does not fit in about one second.
    pub fn queue(&self, samples: &[f32]) {
        if let Ok(mut buffer) = self.shared.buffer.lock() {
            let room = self.capacity.saturating_sub(buffer.len());
            buffer.extend(samples.iter().take(room));
        }
    }

    pub fn set_paused(&self, paused: bool) {
        self.shared.paused.store(paused, Ordering::Relaxed);
    }

    /// Drops every queued sample.
    pub fn clear(&self) {
        if let Ok(mut buffer) = self.shared.buffer.lock() {
            buffer.clear();
        }
    }
}
