use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use svdf::{Document, ParseOptions, RenderOptions, Verbosity, Warning, report};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "svdf-cli",
    about = "Inspect and validate simple VDF files (Steam app manifests, libraryfolders.vdf, sku.sis)",
    version
)]
struct Args {
    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Do not print formatting warnings
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Include offsets, found characters and node previews in diagnostics
    #[arg(long, global = true)]
    detailed: bool,

    /// Show full file paths instead of file names in diagnostics
    #[arg(long, global = true)]
    full_paths: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse each file and report warnings and errors
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Accepted root name (repeatable; any root is accepted when omitted)
        #[arg(long = "root", value_name = "NAME")]
        roots: Vec<String>,
    },
    /// Print the string at a key path
    Get {
        file: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
        #[arg(long = "root", value_name = "NAME")]
        roots: Vec<String>,
    },
    /// Print the sorted keys of the node at a key path (the root when empty)
    Keys {
        file: PathBuf,
        keys: Vec<String>,
        #[arg(long = "root", value_name = "NAME")]
        roots: Vec<String>,
    },
    /// Print the whole tree as JSON
    Dump {
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
        #[arg(long = "root", value_name = "NAME")]
        roots: Vec<String>,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

struct Session {
    render: RenderOptions,
    quiet: bool,
}

impl Session {
    fn load(&self, path: &Path, roots: &[String]) -> Result<Document, svdf::Error> {
        let options = roots
            .iter()
            .fold(ParseOptions::new(), |opts, name| opts.expect_root(name.as_str()));
        let mut warnings: Vec<Warning> = Vec::new();
        let result = svdf::from_file(path, &options, &mut warnings);
        if !self.quiet {
            for w in &warnings {
                eprintln!("{}", report::render_warning(w, Some(path), &self.render));
            }
        }
        tracing::debug!(path = %path.display(), warnings = warnings.len(), ok = result.is_ok(), "loaded");
        result
    }

    fn fail(&self, err: &svdf::Error, path: &Path) -> anyhow::Error {
        anyhow!(report::render_error(err, Some(path), &self.render))
    }

    fn check(&self, files: &[PathBuf], roots: &[String]) -> Result<bool> {
        let mut all_ok = true;
        for file in files {
            match self.load(file, roots) {
                Ok(doc) => {
                    if !self.quiet {
                        println!("{}: ok ({:?})", file.display(), doc.root_name());
                    }
                }
                Err(e) => {
                    all_ok = false;
                    eprintln!("{}", report::render_error(&e, Some(file), &self.render));
                }
            }
        }
        Ok(all_ok)
    }

    fn get(&self, file: &Path, keys: &[String], roots: &[String]) -> Result<()> {
        let doc = self.load(file, roots).map_err(|e| self.fail(&e, file))?;
        let value = doc
            .lookup_string(keys)
            .map_err(|e| self.fail(&svdf::Error::from(e), file))?;
        println!("{value}");
        Ok(())
    }

    fn keys(&self, file: &Path, keys: &[String], roots: &[String]) -> Result<()> {
        let doc = self.load(file, roots).map_err(|e| self.fail(&e, file))?;
        let names = doc.lookup_keys(keys).map_err(|e| self.fail(&svdf::Error::from(e), file))?;
        for name in names {
            println!("{name}");
        }
        Ok(())
    }

    fn dump(&self, file: &Path, pretty: bool, roots: &[String]) -> Result<()> {
        let doc = self.load(file, roots).map_err(|e| self.fail(&e, file))?;
        let json = doc.to_json();
        let text = if pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        }
        .context("serializing document as JSON")?;
        println!("{text}");
        Ok(())
    }
}

fn run(args: Args) -> Result<bool> {
    let session = Session {
        render: RenderOptions {
            verbosity: if args.detailed { Verbosity::Detailed } else { Verbosity::Brief },
            full_paths: args.full_paths,
        },
        quiet: args.quiet,
    };
    match &args.command {
        Command::Check { files, roots } => session.check(files, roots),
        Command::Get { file, keys, roots } => session.get(file, keys, roots).map(|()| true),
        Command::Keys { file, keys, roots } => session.keys(file, keys, roots).map(|()| true),
        Command::Dump { file, pretty, roots } => session.dump(file, *pretty, roots).map(|()| true),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
