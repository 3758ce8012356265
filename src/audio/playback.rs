use rodio::{OutputStream, OutputStreamBuilder, Sink};
use std::sync::Arc;

/// Owns the output stream and the single sink previews are queued on.
pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
}

impl PlaybackEngine {
    pub fn new() -> color_eyre::Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
        })
    }

    pub fn sink(&self) -> Arc<Sink> {
        self.sink.clone()
    }
}
