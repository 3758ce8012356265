use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    audio::{AudioController, HttpPreviewLoader, PlaybackControl, playback::PlaybackEngine},
    config::{self, AppConfig},
    event::events::Event,
    http::{self, ApiService, CatalogSource},
    session::Session,
    storage::FileStore,
};

use super::{
    layout::AppLayout,
    state::UiState,
    tui,
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub source: Arc<dyn CatalogSource>,
    pub session: Session<AudioController, FileStore>,
    pub state: UiState,
    pub config: AppConfig,
    pub has_focus: bool,
    pub should_quit: bool,
    fetch_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let source: Arc<dyn CatalogSource> =
            Arc::new(ApiService::new(http.clone(), config.source.clone()));

        let engine = match PlaybackEngine::new() {
            Ok(engine) => Some(engine),
            Err(e) => {
                warn!(error = %e, "audio_output_unavailable");
                None
            }
        };
        let loader = Arc::new(HttpPreviewLoader::new(http));
        let audio = AudioController::new(engine, loader, event_tx.clone(), &config.audio);

        let store = FileStore::new(config::storage_dir());
        info!(dir = %store.dir().display(), "playlist_store_opened");
        let session = Session::new(audio, store);

        let mut state = UiState::default();
        if !session.player().has_output() {
            state.error("No audio output device, playback is unavailable");
        }

        Ok(Self {
            event_rx,
            event_tx,
            source,
            session,
            state,
            config,
            has_focus: true,
            should_quit: false,
            fetch_task: None,
        })
    }

    /// Starts the one catalog fetch of this session.
    pub fn fetch_catalog(&mut self) {
        if self.fetch_task.is_some() {
            return;
        }
        self.state.is_loading = true;

        self.fetch_task = Some(http::spawn_fetch(
            self.source.clone(),
            self.event_tx.clone(),
        ));
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.paste(true);
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| self.ui(f))?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.session.player().stop();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }
}
