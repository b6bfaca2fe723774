use std::fs;
use std::path::Path;

/// Identifier the host assigns to an open figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FigureId(pub u64);

impl std::fmt::Display for FigureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CanvasError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render failed: {0}")]
    Render(String),
}

#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("figure export failed: {0}")]
    Render(#[from] CanvasError),
    #[error("display resource unavailable: {0}")]
    Resource(#[from] std::io::Error),
}

/// Rendering surface owned by the host. The only capability a display
/// backend relies on is exporting the current visual state as a static
/// vector image.
pub trait FigureCanvas {
    fn export_svg(&self, target: &Path) -> Result<(), CanvasError>;
}

/// Per-figure handle a display backend hands back to the host. One manager
/// exists per open figure and is dropped when the host closes it.
pub trait FigureManager {
    fn id(&self) -> FigureId;

    /// Render the figure and bring it into view. Export and resource
    /// failures surface to the caller; display-channel failures do not.
    fn show(&mut self) -> Result<(), BackendError>;

    /// Host-driven redraw notification.
    fn trigger_redraw(&mut self);
}

/// Registration surface a display backend exposes to the host. The host
/// owns discovery and instantiation; implementations only provide managers
/// for the canvases the host opens.
pub trait Backend<C: FigureCanvas> {
    type Manager: FigureManager;

    fn new_manager(&self, canvas: C, id: FigureId) -> Self::Manager;

    /// Event-loop hook. Backends that delegate display to an external
    /// process typically have nothing to run here.
    fn mainloop(&self);
}

/// Canvas holding already-serialized SVG markup. Pass-through for hosts and
/// tests that hand a backend finished markup instead of a live surface.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    markup: String,
}

impl SvgDocument {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CanvasError> {
        let markup = fs::read_to_string(path)?;
        Ok(Self { markup })
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl FigureCanvas for SvgDocument {
    fn export_svg(&self, target: &Path) -> Result<(), CanvasError> {
        fs::write(target, self.markup.as_bytes())?;
        Ok(())
    }
}
