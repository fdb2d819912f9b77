// SPDX-License-Identifier: MPL-2.0
//! FFmpeg decoding for the playback surface.
//!
//! Each attached source gets a [`Session`]: one thread that opens the input,
//! decodes the first frame (that is what "ready" means), then waits for
//! commands. While playing it decodes and paces frames against the wall clock
//! and feeds the audio track, if any, to the default output device.
//!
//! The thread exits once its [`Session`] is dropped.

use crate::domain::error::MediaLoadError;
use crate::error::{Error, Result};
use crate::infrastructure::audio_output::AudioOutput;
use iced::widget::image;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex, Once};
use std::time::{Duration, Instant};
use tokio::sync::watch;

static FFMPEG_INIT: Once = Once::new();

/// Longest single wait between two frames. Longer timestamp gaps are cut.
const MAX_FRAME_WAIT: Duration = Duration::from_millis(100);

/// Initializes FFmpeg once per process.
///
/// # Errors
///
/// Returns an error if FFmpeg fails to initialize.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Maps an FFmpeg failure on `source` to the reason shown to the user.
#[must_use]
pub fn open_error(source: &str, err: ffmpeg_next::Error, remote: bool) -> MediaLoadError {
    use ffmpeg_next::Error as E;

    match err {
        E::HttpBadRequest | E::HttpOther4xx => MediaLoadError::Status(400),
        E::HttpUnauthorized => MediaLoadError::Status(401),
        E::HttpForbidden => MediaLoadError::Status(403),
        E::HttpNotFound => MediaLoadError::Status(404),
        E::HttpServerError => MediaLoadError::Status(500),
        E::InvalidData | E::DecoderNotFound | E::DemuxerNotFound | E::StreamNotFound => {
            MediaLoadError::UnsupportedFormat(source.to_string())
        }
        other if remote => MediaLoadError::Network(format!("{source}: {other}")),
        other => MediaLoadError::Io(format!("{source}: {other}")),
    }
}

/// How far a session got with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    /// The first frame is decoded and shown.
    Ready,
    Failed(MediaLoadError),
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Play,
    Stop,
}

#[derive(Debug, Default)]
struct Shared {
    frame: Mutex<Option<image::Handle>>,
    playing: AtomicBool,
}

impl Shared {
    fn publish(&self, handle: image::Handle) {
        if let Ok(mut frame) = self.frame.lock() {
            *frame = Some(handle);
        }
    }
}

/// Handle to the decoder thread of one source.
#[derive(Debug)]
pub struct Session {
    source: String,
    commands: mpsc::Sender<Command>,
    readiness: watch::Receiver<Readiness>,
    shared: Arc<Shared>,
}

impl Session {
    /// Starts decoding `source`, read from `input` (a path or a URL).
    #[must_use]
    pub fn spawn(source: &str, input: PathBuf, remote: bool, muted: Arc<AtomicBool>) -> Self {
        let (commands, command_rx) = mpsc::channel();
        let (readiness_tx, readiness) = watch::channel(Readiness::Pending);
        let shared = Arc::new(Shared::default());

        let job = Job {
            source: source.to_string(),
            input,
            remote,
            muted,
            commands: command_rx,
            readiness: readiness_tx,
            shared: Arc::clone(&shared),
        };
        // A thread that never starts drops the readiness sender, which
        // waiting probes observe as a closed channel.
        if let Err(e) = std::thread::Builder::new()
            .name("showreel-decoder".into())
            .spawn(move || job.run())
        {
            log::warn!("Failed to start decoder for {source}: {e}");
        }

        Self {
            source: source.to_string(),
            commands,
            readiness,
            shared,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Readiness updates from the decoder thread.
    #[must_use]
    pub fn readiness(&self) -> watch::Receiver<Readiness> {
        self.readiness.clone()
    }

    pub fn play(&self) {
        self.shared.playing.store(true, Ordering::Relaxed);
        let _ = self.commands.send(Command::Play);
    }

    /// Pauses and rewinds to the first frame.
    pub fn stop(&self) {
        self.shared.playing.store(false, Ordering::Relaxed);
        let _ = self.commands.send(Command::Stop);
    }

    /// Latest frame decoded.
    #[must_use]
    pub fn frame(&self) -> Option<image::Handle> {
        self.shared.frame.lock().ok().and_then(|f| f.clone())
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.shared.playing.load(Ordering::Relaxed)
    }
}

/// Everything the decoder thread owns.
struct Job {
    source: String,
    input: PathBuf,
    remote: bool,
    muted: Arc<AtomicBool>,
    commands: mpsc::Receiver<Command>,
    readiness: watch::Sender<Readiness>,
    shared: Arc<Shared>,
}

impl Job {
    fn run(self) {
        let mut decoder = match Decoder::open(&self.source, &self.input, self.remote, self.muted)
        {
            Ok(decoder) => decoder,
            Err(error) => {
                log::warn!("Cannot play {}: {error}", self.source);
                self.readiness.send_replace(Readiness::Failed(error));
                return;
            }
        };

        match decoder.next_frame() {
            Ok(Some(frame)) => self.shared.publish(frame.handle),
            Ok(None) => {
                let error = MediaLoadError::UnsupportedFormat(self.source.clone());
                log::warn!("No picture in {}", self.source);
                self.readiness.send_replace(Readiness::Failed(error));
                return;
            }
            Err(error) => {
                log::warn!("Cannot play {}: {error}", self.source);
                self.readiness.send_replace(Readiness::Failed(error));
                return;
            }
        }
        log::debug!("{} is ready", self.source);
        self.readiness.send_replace(Readiness::Ready);

        let mut playing = false;
        // Wall-clock instant and stream position playback resumed from.
        let mut anchor: Option<(Instant, Duration)> = None;

        loop {
            let command = if playing {
                match self.commands.try_recv() {
                    Ok(command) => Some(command),
                    Err(mpsc::TryRecvError::Empty) => None,
                    Err(mpsc::TryRecvError::Disconnected) => break,
                }
            } else {
                match self.commands.recv() {
                    Ok(command) => Some(command),
                    Err(_) => break,
                }
            };

            match command {
                Some(Command::Play) => {
                    playing = true;
                    anchor = None;
                    decoder.set_paused(false);
                }
                Some(Command::Stop) => {
                    playing = false;
                    decoder.rewind();
                    if let Ok(Some(frame)) = decoder.next_frame() {
                        self.shared.publish(frame.handle);
                    }
                }
                None => {}
            }
            if !playing {
                continue;
            }

            match decoder.next_frame() {
                Ok(Some(frame)) => {
                    let (started, origin) = *anchor.get_or_insert((Instant::now(), frame.position));
                    let due = started + frame.position.saturating_sub(origin);
                    let now = Instant::now();
                    if due > now {
                        std::thread::sleep((due - now).min(MAX_FRAME_WAIT));
                    }
                    self.shared.publish(frame.handle);
                }
                Ok(None) => {
                    log::debug!("{} reached its end", self.source);
                    playing = false;
                    decoder.set_paused(true);
                    self.shared.playing.store(false, Ordering::Relaxed);
                }
                Err(error) => {
                    log::warn!("Playback of {} stopped: {error}", self.source);
                    playing = false;
                    decoder.set_paused(true);
                    self.shared.playing.store(false, Ordering::Relaxed);
                }
            }
        }
        log::trace!("Decoder for {} exited", self.source);
    }
}

struct Frame {
    handle: image::Handle,
    position: Duration,
}

struct Decoder {
    source: String,
    input: ffmpeg_next::format::context::Input,
    video_index: usize,
    video: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    time_base: f64,
    audio: Option<AudioTrack>,
    /// End of input was sent to the video decoder.
    drained: bool,
}

impl Decoder {
    fn open(
        source: &str,
        input: &Path,
        remote: bool,
        muted: Arc<AtomicBool>,
    ) -> std::result::Result<Self, MediaLoadError> {
        init_ffmpeg().map_err(|e| MediaLoadError::Io(e.to_string()))?;
        if !remote {
            std::fs::metadata(input).map_err(|e| MediaLoadError::from_io(source, &e))?;
        }

        let ictx =
            ffmpeg_next::format::input(input).map_err(|e| open_error(source, e, remote))?;
        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| MediaLoadError::UnsupportedFormat(source.to_string()))?;
        let video_index = stream.index();
        let time_base = stream.time_base();
        let time_base = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let video = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .and_then(|context| context.decoder().video())
            .map_err(|e| open_error(source, e, remote))?;
        let scaler = ffmpeg_next::software::scaling::Context::get(
            video.format(),
            video.width(),
            video.height(),
            ffmpeg_next::format::Pixel::RGBA,
            video.width(),
            video.height(),
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| MediaLoadError::Io(format!("{source}: {e}")))?;

        let audio = AudioTrack::open(&ictx, muted);

        Ok(Self {
            source: source.to_string(),
            input: ictx,
            video_index,
            video,
            scaler,
            time_base,
            audio,
            drained: false,
        })
    }

    /// Decodes the next picture, feeding audio packets met on the way.
    /// `None` once the input is exhausted.
    fn next_frame(&mut self) -> std::result::Result<Option<Frame>, MediaLoadError> {
        loop {
            if let Some(frame) = self.receive_video()? {
                return Ok(Some(frame));
            }
            if self.drained {
                return Ok(None);
            }

            let next = self
                .input
                .packets()
                .next()
                .map(|(stream, packet)| (stream.index(), packet));
            match next {
                Some((index, packet)) if index == self.video_index => {
                    if let Err(e) = self.video.send_packet(&packet) {
                        log::debug!("Skipping video packet of {}: {e}", self.source);
                    }
                }
                Some((index, packet)) => {
                    if let Some(audio) = self.audio.as_mut().filter(|a| a.index == index) {
                        audio.feed(&packet);
                    }
                }
                None => {
                    let _ = self.video.send_eof();
                    self.drained = true;
                }
            }
        }
    }

    fn receive_video(&mut self) -> std::result::Result<Option<Frame>, MediaLoadError> {
        let mut decoded = ffmpeg_next::frame::Video::empty();
        if self.video.receive_frame(&mut decoded).is_err() {
            return Ok(None);
        }
        let mut rgba = ffmpeg_next::frame::Video::empty();
        self.scaler
            .run(&decoded, &mut rgba)
            .map_err(|e| MediaLoadError::Io(format!("{}: {e}", self.source)))?;

        #[allow(clippy::cast_precision_loss)]
        let seconds = decoded
            .timestamp()
            .map_or(0.0, |pts| pts as f64 * self.time_base);
        Ok(Some(Frame {
            handle: image::Handle::from_rgba(rgba.width(), rgba.height(), extract_rgba_data(&rgba)),
            position: Duration::from_secs_f64(seconds.max(0.0)),
        }))
    }

    /// Seeks back to the start and drops everything buffered.
    fn rewind(&mut self) {
        if let Err(e) = self.input.seek(0, ..0) {
            log::warn!("Rewinding {} failed: {e}", self.source);
        }
        self.video.flush();
        self.drained = false;
        if let Some(audio) = self.audio.as_mut() {
            audio.decoder.flush();
            audio.output.set_paused(true);
            audio.output.clear();
        }
    }

    fn set_paused(&self, paused: bool) {
        if let Some(audio) = &self.audio {
            audio.output.set_paused(paused);
        }
    }
}

/// Extracts RGBA rows from a scaled frame, dropping the stride padding.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);
    let row_len = width * 4;

    let mut rgba = Vec::with_capacity(row_len * height);
    for row in data.chunks(stride.max(1)).take(height) {
        rgba.extend_from_slice(&row[..row_len.min(row.len())]);
    }
    rgba
}

/// Decoded audio on its way to the output device.
struct AudioTrack {
    index: usize,
    decoder: ffmpeg_next::decoder::Audio,
    resampler: ffmpeg_next::software::resampling::Context,
    output: AudioOutput,
}

impl AudioTrack {
    /// Opens the best audio stream. Plays silently (returns `None`) when the
    /// source has no audio or no device is available.
    fn open(input: &ffmpeg_next::format::context::Input, muted: Arc<AtomicBool>) -> Option<Self> {
        let stream = input.streams().best(ffmpeg_next::media::Type::Audio)?;
        let index = stream.index();
        let decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .and_then(|context| context.decoder().audio())
            .map_err(|e| log::debug!("Audio track not decodable: {e}"))
            .ok()?;
        let output = AudioOutput::new(muted)
            .map_err(|e| log::debug!("Playing without sound: {e}"))
            .ok()?;

        let layout = match output.channels() {
            1 => ffmpeg_next::ChannelLayout::MONO,
            _ => ffmpeg_next::ChannelLayout::STEREO,
        };
        let resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
            layout,
            output.sample_rate(),
        )
        .map_err(|e| log::debug!("Audio resampler unavailable: {e}"))
        .ok()?;

        Some(Self {
            index,
            decoder,
            resampler,
            output,
        })
    }

    fn feed(&mut self, packet: &ffmpeg_next::Packet) {
        if self.decoder.send_packet(packet).is_err() {
            return;
        }
        let mut decoded = ffmpeg_next::frame::Audio::empty();
        while self.decoder.receive_frame(&mut decoded).is_ok() {
            let mut resampled = ffmpeg_next::frame::Audio::empty();
            if let Err(e) = self.resampler.run(&decoded, &mut resampled) {
                log::debug!("Resampling failed: {e}");
                continue;
            }
            let channels = usize::from(self.output.channels());
            self.output.queue(&packed_samples(&resampled, channels));
        }
    }
}

/// Reads packed little-endian f32 samples.
fn packed_samples(frame: &ffmpeg_next::frame::Audio, channels: usize) -> Vec<f32> {
    frame
        .data(0)
        .chunks_exact(4)
        .take(frame.samples() * channels)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn http_errors_keep_their_status() {
        assert_eq!(
            open_error("v.mp4", ffmpeg_next::Error::HttpNotFound, true),
            MediaLoadError::Status(404)
        );
        assert_eq!(
            open_error("v.mp4", ffmpeg_next::Error::HttpForbidden, true),
            MediaLoadError::Status(403)
        );
        assert_eq!(
            open_error("v.mp4", ffmpeg_next::Error::HttpServerError, true),
            MediaLoadError::Status(500)
        );
    }

    #[test]
    fn undecodable_input_is_unsupported() {
        assert_eq!(
            open_error("v.mp4", ffmpeg_next::Error::InvalidData, false),
            MediaLoadError::UnsupportedFormat("v.mp4".into())
        );
        assert_eq!(
            open_error("v.mp4", ffmpeg_next::Error::DecoderNotFound, true),
            MediaLoadError::UnsupportedFormat("v.mp4".into())
        );
    }

    #[test]
    fn other_failures_depend_on_origin() {
        let err = ffmpeg_next::Error::Other { errno: 5 };
        assert!(matches!(
            open_error("v.mp4", err, true),
            MediaLoadError::Network(_)
        ));
        assert!(matches!(open_error("v.mp4", err, false), MediaLoadError::Io(_)));
    }

    #[tokio::test]
    async fn missing_file_fails_as_not_found() {
        let dir = tempdir().expect("failed to create temp dir");
        let session = Session::spawn(
            "missing.mp4",
            dir.path().join("missing.mp4"),
            false,
            Arc::default(),
        );

        let mut readiness = session.readiness();
        let outcome = readiness
            .wait_for(|r| *r != Readiness::Pending)
            .await
            .map(|r| r.clone());
        assert_eq!(
            outcome.ok(),
            Some(Readiness::Failed(MediaLoadError::NotFound(
                "missing.mp4".into()
            )))
        );
        assert!(session.frame().is_none());
    }

    #[tokio::test]
    async fn garbage_file_never_becomes_ready() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("fake.mp4");
        std::fs::write(&path, b"<html><body>not a video</body></html>").expect("write");

        let session = Session::spawn("fake.mp4", path, false, Arc::default());
        let mut readiness = session.readiness();
        let outcome = readiness
            .wait_for(|r| *r != Readiness::Pending)
            .await
            .map(|r| r.clone());
        assert!(matches!(outcome, Ok(Readiness::Failed(_))));
    }
}
