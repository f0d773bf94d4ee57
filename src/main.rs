//! Pixel Operations CLI
//!
//! Command-line interface for running and exporting the pixel operation
//! suites, either one-shot or from an interactive menu.

use clap::{Parser, Subcommand, ValueEnum};
use pixel_ops::{DemoError, Exporter, FileConfig, ImagePair, ImageSource, Workbench};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "pixel-ops", version, about = "Pixel-wise operations on grayscale images")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory; overrides the configuration file.
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Where the image pair comes from.
    #[arg(long, value_enum, default_value_t = SourceKind::Synthetic, global = true)]
    source: SourceKind,

    /// First image, for `--source files`.
    #[arg(long, global = true)]
    first: Option<PathBuf>,

    /// Second image, for `--source files`.
    #[arg(long, global = true)]
    second: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    Synthetic,
    MotionDemo,
    Files,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Absolute and offset subtraction.
    Subtract,
    /// AND, OR, XOR and NOT on binarized images.
    Boolean,
    /// Motion detection between two frames.
    Motion,
    /// Weighted blending.
    Blend,
    /// All four families in one run.
    Demo,
    /// Interactive menu (default).
    Menu,
}

/// A workbench bound to the image source chosen on the command line.
struct Session {
    workbench: Workbench,
    source: ImageSource,
}

impl Session {
    fn pair(&self) -> Result<ImagePair, DemoError> {
        Ok(self.source.load()?)
    }

    /// Frames for motion detection. Built-in sources use the motion demo
    /// scene; files are used as given.
    fn frames(&self) -> Result<ImagePair, DemoError> {
        match self.source {
            ImageSource::Files { .. } => self.pair(),
            _ => Ok(ImageSource::MotionDemo.load()?),
        }
    }

    fn run(&mut self, command: Command) -> Result<usize, DemoError> {
        match command {
            Command::Subtract => {
                let pair = self.pair()?;
                self.workbench.subtraction(&pair)
            }
            Command::Boolean => {
                let pair = self.pair()?;
                self.workbench.boolean(&pair)
            }
            Command::Motion => {
                let frames = self.frames()?;
                self.workbench.motion(&frames)
            }
            Command::Blend => {
                let pair = self.pair()?;
                self.workbench.blending(&pair)
            }
            Command::Demo => {
                let pair = self.pair()?;
                let frames = self.frames()?;
                self.workbench.full(&pair, &frames)
            }
            Command::Menu => Ok(0),
        }
    }

    fn files_written(&self) -> usize {
        self.workbench.exporter().files_written()
    }
}

fn build_session(cli: &Cli) -> Result<Session, String> {
    let config = match &cli.config {
        Some(path) => FileConfig::from_file(path).map_err(|e| e.to_string())?,
        None => FileConfig::default(),
    };

    let source = match cli.source {
        SourceKind::Synthetic => ImageSource::Synthetic,
        SourceKind::MotionDemo => ImageSource::MotionDemo,
        SourceKind::Files => match (&cli.first, &cli.second) {
            (Some(first), Some(second)) => ImageSource::Files {
                first: first.clone(),
                second: second.clone(),
            },
            _ => return Err(pixel_ops::SourceError::MissingPaths.to_string()),
        },
    };

    let directory = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());
    info!("Output directory: {}", directory.display());

    Ok(Session {
        workbench: Workbench::new(config.operations, Exporter::new(directory)),
        source,
    })
}

const MENU: &str = "
Pixel Operations
  1. Image subtraction
  2. Image blending
  3. Boolean operations
  4. Motion detection
  5. Full demo
  6. Exit";

fn menu_choice(input: &str) -> Option<Command> {
    match input.trim() {
        "1" => Some(Command::Subtract),
        "2" => Some(Command::Blend),
        "3" => Some(Command::Boolean),
        "4" => Some(Command::Motion),
        "5" => Some(Command::Demo),
        _ => None,
    }
}

/// Writes the menu prompt and flushes it so it shows before input is read.
fn prompt(out: &mut impl Write) {
    if let Err(e) = write!(out, "Choose (1-6): ").and_then(|()| out.flush()) {
        warn!("Failed to write prompt: {}", e);
    }
}

fn run_menu(session: &mut Session) {
    let total = Arc::new(AtomicUsize::new(0));
    let handler_total = Arc::clone(&total);
    if let Err(e) = ctrlc::set_handler(move || {
        println!(
            "\nInterrupted. Files written: {}",
            handler_total.load(Ordering::SeqCst)
        );
        std::process::exit(0);
    }) {
        error!("Failed to install Ctrl-C handler: {}", e);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{MENU}");
        prompt(&mut io::stdout());

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!("Failed to read input: {}", e);
                break;
            }
            None => break,
        };

        if line.trim() == "6" {
            break;
        }
        let Some(command) = menu_choice(&line) else {
            println!("Invalid choice: {}", line.trim());
            continue;
        };

        match session.run(command) {
            Ok(written) => println!("Done. {written} files written."),
            Err(e) => error!("Operation failed: {}", e),
        }
        total.store(session.files_written(), Ordering::SeqCst);
    }

    println!("Files written: {}", session.files_written());
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    info!("Pixel Operations v{}", pixel_ops::VERSION);

    let mut session = match build_session(&cli) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(&mut session),
        command => match session.run(command) {
            Ok(written) => info!("Done. {} files written", written),
            Err(e) => {
                error!("Operation failed: {}", e);
                std::process::exit(1);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbering() {
        assert!(matches!(menu_choice("1"), Some(Command::Subtract)));
        assert!(matches!(menu_choice(" 2\n"), Some(Command::Blend)));
        assert!(matches!(menu_choice("3"), Some(Command::Boolean)));
        assert!(matches!(menu_choice("4"), Some(Command::Motion)));
        assert!(matches!(menu_choice("5"), Some(Command::Demo)));
        assert!(menu_choice("7").is_none());
    }

    struct UnflushableWriter(Vec<u8>);

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_prompt_written_and_flush_failure_tolerated() {
        let mut out = Vec::new();
        prompt(&mut out);
        assert_eq!(out, b"Choose (1-6): ");

        let mut broken = UnflushableWriter(Vec::new());
        prompt(&mut broken);
        assert_eq!(broken.0, b"Choose (1-6): ");
    }

    #[test]
    fn test_cli_parses_files_source() {
        let cli = Cli::parse_from([
            "pixel-ops",
            "--source",
            "files",
            "--first",
            "a.png",
            "--second",
            "b.png",
            "boolean",
        ]);
        assert_eq!(cli.source, SourceKind::Files);
        assert!(matches!(cli.command, Some(Command::Boolean)));
        assert!(build_session(&cli).is_ok());
    }

    #[test]
    fn test_files_source_requires_paths() {
        let cli = Cli::parse_from(["pixel-ops", "--source", "files", "demo"]);
        assert!(build_session(&cli).is_err());
    }

    #[test]
    fn test_motion_demo_source_name() {
        let cli = Cli::parse_from(["pixel-ops", "--source", "motion-demo", "motion"]);
        assert_eq!(cli.source, SourceKind::MotionDemo);
    }
}
