//! starc-drv - Driver for the Star tokenizer.
//!
//! The driver is the front end's outermost shell: it loads source files
//! into a [`SourceMap`], runs the lexer (and optionally the keyword
//! classification pass) over each file, emits the token stream in the
//! requested format, and reports collected diagnostics. The lexer never
//! fails; whether lexical errors fail the run is decided here, by
//! `--strict`.

#![warn(missing_docs)]

mod error;
mod output;

pub use error::DriverError;
pub use output::TokenRecord;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;

use starc_lex::{Classifier, Lexer};
use starc_util::{Handler, SourceMap};

/// Tokenize Star source files.
#[derive(Parser, Debug)]
#[command(name = "starc")]
#[command(author = "Star Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Star source files", long_about = None)]
pub struct Cli {
    /// Star source files to tokenize
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format for the token stream
    #[arg(short, long, value_enum, default_value = "text")]
    pub emit: Emit,

    /// Exit with an error if any lexical diagnostics were recorded
    #[arg(long)]
    pub strict: bool,

    /// Skip whitespace, line separator, and comment tokens in the output
    #[arg(long)]
    pub skip_trivia: bool,

    /// Directive name (without '#') to classify as a meta directive
    #[arg(long = "meta", value_name = "NAME")]
    pub meta_directives: Vec<String>,

    /// Identifier to classify as a resource name
    #[arg(long = "resource", value_name = "NAME")]
    pub resources: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, env = "STARC_VERBOSE")]
    pub verbose: bool,
}

/// Output format for the token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// One `file:line:column: Kind lexeme` row per token
    Text,
    /// One JSON object per file (JSON Lines style)
    Json,
    /// Per-kind token counts
    Summary,
}

/// A tokenization session over a set of loaded source files.
pub struct Session {
    /// Loaded source files.
    pub sources: SourceMap,
    /// Diagnostics collected across all files.
    pub diagnostics: Handler,
    /// Keyword classification configuration.
    pub classifier: Classifier,
}

impl Session {
    /// Loads every input file and builds the classifier.
    pub fn new(cli: &Cli) -> Result<Self, DriverError> {
        let mut sources = SourceMap::new();
        for path in &cli.inputs {
            let content = std::fs::read_to_string(path).map_err(|e| DriverError::Read {
                path: path.clone(),
                source: e,
            })?;
            debug!(file = %path.display(), bytes = content.len(), "loaded source file");
            sources.add(path.display().to_string(), content);
        }

        let mut classifier = Classifier::new();
        for name in &cli.meta_directives {
            classifier.register_meta_directive(name.clone());
        }
        for name in &cli.resources {
            classifier.register_resource(name.clone());
        }

        Ok(Self {
            sources,
            diagnostics: Handler::new(),
            classifier,
        })
    }

    /// Tokenizes every file and writes the requested emission to `out`.
    pub fn emit(&self, emit: Emit, skip_trivia: bool, out: &mut impl Write) -> Result<(), DriverError> {
        for file in self.sources.iter() {
            debug!(file = file.name(), "tokenizing");
            let lexer = Lexer::with_file_id(file.content(), &self.diagnostics, file.id());
            let tokens = self
                .classifier
                .classify_all(lexer)
                .filter(move |t| !skip_trivia || !t.kind.is_trivia());

            match emit {
                Emit::Text => output::emit_text(file, tokens, out)?,
                Emit::Json => output::emit_json(file, tokens, out)?,
                Emit::Summary => output::emit_summary(file, tokens, out)?,
            }
        }
        Ok(())
    }

    /// Prints collected diagnostics to stderr with file/line/column.
    pub fn report_diagnostics(&self) {
        for diag in self.diagnostics.diagnostics() {
            let code = diag
                .code
                .map(|c| format!("[{}]", c))
                .unwrap_or_default();
            match self.sources.get(diag.span.file_id) {
                Some(file) => eprintln!(
                    "{}{}: {} --> {}:{}:{}",
                    diag.level,
                    code,
                    diag.message,
                    file.name(),
                    diag.span.line,
                    diag.span.column
                ),
                None => eprintln!("{}{}: {}", diag.level, code, diag.message),
            }
        }
    }
}

/// Entry point for the `starc` binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session = Session::new(&cli)?;
    let stdout = std::io::stdout();
    session.emit(cli.emit, cli.skip_trivia, &mut stdout.lock())?;
    session.report_diagnostics();

    if cli.strict && session.diagnostics.has_errors() {
        return Err(DriverError::Strict {
            errors: session.diagnostics.error_count(),
        }
        .into());
    }
    Ok(())
}

/// Installs the tracing subscriber. `--verbose` lowers the filter to
/// debug; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
