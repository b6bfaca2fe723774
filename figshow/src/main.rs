use clap::Parser;
use emacs_backend_plugin::{ClientConfig, EmacsBackend};
use figure::{Backend, FigureId, FigureManager, SvgDocument};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figshow", version, about = "Display an SVG figure in a running Emacs")]
struct Cli {
    /// SVG file to display; omit for a built-in sample figure
    file: Option<PathBuf>,
    /// Client program to invoke instead of emacsclient
    #[arg(long)]
    program: Option<String>,
    /// Emacs server socket name (emacsclient -s)
    #[arg(long)]
    socket: Option<String>,
    /// TOML file with client settings (program, socket, extra_args)
    #[arg(long)]
    config: Option<PathBuf>,
}

const SAMPLE_FIGURE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="200" viewBox="0 0 320 200">
  <rect width="320" height="200" fill="white"/>
  <line x1="20" y1="100" x2="300" y2="100" stroke="#888" stroke-width="1"/>
  <line x1="20" y1="20" x2="20" y2="180" stroke="#888" stroke-width="1"/>
  <polyline fill="none" stroke="steelblue" stroke-width="2"
    points="20,100 48,44 76,22 104,44 132,100 160,156 188,178 216,156 244,100 272,44 300,22"/>
</svg>
"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => toml::from_str::<ClientConfig>(&std::fs::read_to_string(path)?)?,
        None => ClientConfig::from_env(),
    };
    if let Some(program) = cli.program {
        config.program = program;
    }
    if let Some(socket) = cli.socket {
        config.socket = Some(socket);
    }

    let canvas = match &cli.file {
        Some(path) => {
            log::debug!("showing figure from {}", path.display());
            SvgDocument::from_file(path)?
        }
        None => SvgDocument::new(SAMPLE_FIGURE),
    };

    let backend = EmacsBackend::new(config);
    let mut manager = backend.new_manager(canvas, FigureId(1));
    manager.show()?;
    Ok(())
}
