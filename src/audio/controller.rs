use flume::Sender;
use rodio::Sink;
use std::{
    sync::{
        Arc, Mutex, PoisonError, RwLock,
        atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering},
    },
    time::Duration,
};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    audio::{
        commands::AudioCommand,
        config::AudioConfig,
        error::AudioError,
        playback::PlaybackEngine,
        state::PlaybackState,
        traits::{PlaybackControl, PreviewLoader},
    },
    event::events::Event,
    library::Track,
};

const MONITOR_INTERVAL: Duration = Duration::from_millis(100);

/// Loads previews, hands them to the sink and watches for the end of
/// playback.
///
/// Every `start` or `stop` opens a new generation. The generation is bumped
/// under the state lock, and a pending load only touches the sink if its
/// generation is still current when it takes that lock.
pub struct AudioController {
    _engine: Option<PlaybackEngine>,
    sink: Option<Arc<Sink>>,
    loader: Arc<dyn PreviewLoader>,
    state: Arc<RwLock<PlaybackState>>,
    event_tx: Sender<Event>,
    current_playback_task: Mutex<Option<JoinHandle<()>>>,
    generation: Arc<AtomicU64>,
    volume: AtomicU8,
    is_muted: AtomicBool,
}

impl AudioController {
    /// Runs without output when no device could be opened; every `start`
    /// then fails with [`AudioError::DeviceError`].
    pub fn new(
        engine: Option<PlaybackEngine>,
        loader: Arc<dyn PreviewLoader>,
        event_tx: Sender<Event>,
        config: &AudioConfig,
    ) -> Self {
        let sink = engine.as_ref().map(PlaybackEngine::sink);
        let mut controller = Self::with_sink(sink, loader, event_tx, config);
        controller._engine = engine;
        controller
    }

    /// Drives an existing sink. The caller keeps whatever output the sink is
    /// connected to alive.
    pub fn with_sink(
        sink: Option<Arc<Sink>>,
        loader: Arc<dyn PreviewLoader>,
        event_tx: Sender<Event>,
        config: &AudioConfig,
    ) -> Self {
        let controller = Self {
            _engine: None,
            sink,
            loader,
            state: Arc::new(RwLock::new(PlaybackState::Stopped)),
            event_tx,
            current_playback_task: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
            volume: AtomicU8::new(config.volume.min(100)),
            is_muted: AtomicBool::new(false),
        };

        controller.apply_volume();
        if let Some(sink) = &controller.sink {
            controller.start_monitor(sink.clone());
        }
        controller
    }

    fn start_monitor(&self, sink: Arc<Sink>) {
        let state = self.state.clone();
        let generation = self.generation.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(MONITOR_INTERVAL);
            loop {
                interval.tick().await;
                if event_tx.is_disconnected() {
                    break;
                }

                let finished = {
                    let Ok(mut guard) = state.write() else {
                        break;
                    };
                    if matches!(*guard, PlaybackState::Playing(_)) && sink.empty() {
                        *guard = PlaybackState::Stopped;
                        Some(generation.load(Ordering::SeqCst))
                    } else {
                        None
                    }
                };

                if let Some(generation) = finished {
                    debug!(generation, "audio_track_ended");
                    let _ = event_tx.send(Event::TrackEnded(generation));
                }
            }
        });
    }

    pub fn handle_command(&self, cmd: AudioCommand) -> Result<(), AudioError> {
        match cmd {
            AudioCommand::PlayTrack(track) => self.play_track(track)?,
            AudioCommand::Pause => self.pause(),
            AudioCommand::Resume => self.resume(),
            AudioCommand::Stop => {
                self.supersede();
            }
        }
        Ok(())
    }

    fn play_track(&self, track: Track) -> Result<(), AudioError> {
        let generation = self.supersede();

        let sink = self
            .sink
            .clone()
            .ok_or_else(|| AudioError::DeviceError("no audio output device".to_string()))?;
        if track.preview_url.is_empty() {
            return Err(AudioError::NoPreview(track.title));
        }

        self.set_state(PlaybackState::Buffering(track.clone()));
        info!(title = track.title.as_str(), generation, "audio_preview_requested");

        let loader = self.loader.clone();
        let state = self.state.clone();
        let current_generation = self.generation.clone();
        let event_tx = self.event_tx.clone();

        let task = tokio::spawn(async move {
            let result = loader.load(&track.preview_url).await;

            let Ok(mut guard) = state.write() else {
                return;
            };
            // A newer request owns the sink now.
            if current_generation.load(Ordering::SeqCst) != generation {
                debug!(generation, "audio_preview_superseded");
                return;
            }

            match result {
                Ok(source) => {
                    sink.append(source);
                    sink.play();
                    *guard = PlaybackState::Playing(track.clone());
                    let _ = event_tx.send(Event::TrackStarted(track, generation));
                }
                Err(e) => {
                    warn!(title = track.title.as_str(), error = %e, "audio_preview_failed");
                    *guard = PlaybackState::Stopped;
                    let _ = event_tx.send(Event::PlaybackFailed(e.to_string(), generation));
                }
            }
        });

        if let Ok(mut guard) = self.current_playback_task.lock() {
            *guard = Some(task);
        }
        Ok(())
    }

    /// Cancels whatever is loading or playing and opens a new generation.
    fn supersede(&self) -> u64 {
        self.abort_pending();

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *state = PlaybackState::Stopped;
        if let Some(sink) = &self.sink
            && !sink.empty()
        {
            sink.clear();
        }
        generation
    }

    fn abort_pending(&self) {
        if let Ok(mut guard) = self.current_playback_task.lock()
            && let Some(task) = guard.take()
        {
            task.abort();
        }
    }

    fn pause(&self) {
        let Some(sink) = &self.sink else { return };
        if let Ok(mut state) = self.state.write()
            && let PlaybackState::Playing(track) = &*state
        {
            sink.pause();
            *state = PlaybackState::Paused(track.clone());
        }
    }

    fn resume(&self) {
        let Some(sink) = &self.sink else { return };
        if let Ok(mut state) = self.state.write()
            && let PlaybackState::Paused(track) = &*state
        {
            sink.play();
            *state = PlaybackState::Playing(track.clone());
        }
    }

    fn set_state(&self, new_state: PlaybackState) {
        if let Ok(mut state) = self.state.write() {
            *state = new_state;
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
            .read()
            .map(|s| s.clone())
            .unwrap_or(PlaybackState::Stopped)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state(), PlaybackState::Playing(_))
    }

    pub fn has_output(&self) -> bool {
        self.sink.is_some()
    }

    pub fn volume(&self) -> u8 {
        self.volume.load(Ordering::Relaxed)
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted.load(Ordering::Relaxed)
    }

    pub fn set_volume(&self, volume: u8) {
        self.volume.store(volume.min(100), Ordering::Relaxed);
        self.is_muted.store(false, Ordering::Relaxed);
        self.apply_volume();
    }

    pub fn volume_up(&self, amount: u8) {
        self.set_volume(self.volume().saturating_add(amount));
    }

    pub fn volume_down(&self, amount: u8) {
        self.set_volume(self.volume().saturating_sub(amount));
    }

    pub fn toggle_mute(&self) {
        let muted = self.is_muted.load(Ordering::Relaxed);
        self.is_muted.store(!muted, Ordering::Relaxed);
        self.apply_volume();
    }

    fn apply_volume(&self) {
        let Some(sink) = &self.sink else { return };
        let volume = if self.is_muted() {
            0.0
        } else {
            self.volume() as f32 / 100.0
        };
        sink.set_volume(volume);
    }
}

impl PlaybackControl for AudioController {
    fn start(&self, track: &Track) -> Result<(), AudioError> {
        self.handle_command(AudioCommand::PlayTrack(track.clone()))
    }

    fn toggle_pause(&self) {
        let cmd = match self.state() {
            PlaybackState::Playing(_) => AudioCommand::Pause,
            _ => AudioCommand::Resume,
        };
        let _ = self.handle_command(cmd);
    }

    fn stop(&self) {
        let _ = self.handle_command(AudioCommand::Stop);
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl Drop for AudioController {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
