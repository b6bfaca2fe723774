pub mod client;
pub mod script;
pub mod shared_file;

pub use client::{ClientConfig, ClientError, EmacsClient, EvalClient, DEFAULT_PROGRAM};
pub use script::{display_buffer_script, normalize_display_path, DISPLAY_BUFFER};
pub use shared_file::SharedTempFile;

use figure::{Backend, BackendError, FigureCanvas, FigureId, FigureManager};

/// Display backend that ships figures to a running Emacs through
/// `emacsclient`. The host instantiates one of these and asks it for a
/// manager per figure it opens.
#[derive(Debug, Clone, Default)]
pub struct EmacsBackend {
    client: EmacsClient,
}

impl EmacsBackend {
    pub fn new(config: ClientConfig) -> Self {
        log::debug!("initializing emacs display backend");
        Self {
            client: EmacsClient::new(config),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn client(&self) -> &EmacsClient {
        &self.client
    }
}

impl<C: FigureCanvas> Backend<C> for EmacsBackend {
    type Manager = EmacsFigureManager<C>;

    fn new_manager(&self, canvas: C, id: FigureId) -> Self::Manager {
        EmacsFigureManager::with_client(canvas, id, self.client.clone())
    }

    fn mainloop(&self) {
        log::debug!("mainloop requested; emacs owns the event loop");
    }
}

/// One per open figure. Holds the host's canvas and the client used to
/// notify the editor.
pub struct EmacsFigureManager<C, E = EmacsClient> {
    canvas: C,
    id: FigureId,
    client: E,
}

impl<C: FigureCanvas> EmacsFigureManager<C> {
    pub fn new(canvas: C, id: FigureId) -> Self {
        Self::with_client(canvas, id, EmacsClient::default())
    }
}

impl<C: FigureCanvas, E: EvalClient> EmacsFigureManager<C, E> {
    pub fn with_client(canvas: C, id: FigureId, client: E) -> Self {
        log::debug!("initializing figure manager for figure {id}");
        Self { canvas, id, client }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }
}

impl<C: FigureCanvas, E: EvalClient> FigureManager for EmacsFigureManager<C, E> {
    fn id(&self) -> FigureId {
        self.id
    }

    /// Single-shot transaction: export the figure into a scoped temp file,
    /// tell Emacs to load it, drop the file. Export and temp-file errors
    /// propagate; the editor notification is best effort. The file is
    /// deleted right after the synchronous client call returns, so the
    /// editor must have read it by the time its client exits.
    fn show(&mut self) -> Result<(), BackendError> {
        let file = SharedTempFile::with_suffix(".svg").map_err(BackendError::Resource)?;
        self.canvas.export_svg(file.path())?;
        self.client.eval(&[display_buffer_script(file.path())]);
        Ok(())
    }

    fn trigger_redraw(&mut self) {
        log::debug!("redraw requested for figure {}", self.id);
    }
}
