use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use voice_listing::batch;
use voice_listing::listing::{ListingForm, ListingStatus};

#[derive(Parser)]
#[command(name = "voice_listing", about = "Structured property listings from dictated text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a listing record from one transcript
    Extract {
        /// Transcript text (read from stdin when omitted)
        text: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Extract every line of a transcript file to JSON Lines
    Batch {
        /// File with one transcript per line
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Max transcripts to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Extract, fill a listing form and validate it for submission
    Draft {
        /// Transcript text (read from stdin when omitted)
        text: Option<String>,
        #[arg(long)]
        title: String,
        #[arg(long)]
        address: String,
        /// Active, Pending, Sold or Withdrawn
        #[arg(long, default_value = "Active")]
        status: String,
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { text, pretty } => {
            let text = text_or_stdin(text)?;
            let result = voice_listing::extract(&text);
            print_json(&result, pretty)
        }
        Commands::Batch { input, output, limit } => {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("extracting [{bar:30}] {pos}/{len} transcripts, eta {eta}")?
                    .progress_chars("=> "),
            );

            let counts = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    batch::run(&input, limit, BufWriter::new(file), &pb)?
                }
                None => batch::run(&input, limit, BufWriter::new(io::stdout().lock()), &pb)?,
            };
            counts.print();
            Ok(())
        }
        Commands::Draft {
            text,
            title,
            address,
            status,
            pretty,
        } => {
            let status: ListingStatus = status.parse()?;
            let text = text_or_stdin(text)?;
            let mut form = ListingForm::default();
            form.apply(&voice_listing::extract(&text));

            let draft = form.to_draft(&title, &address, status);
            draft.validate().context("Listing is not ready for submission")?;
            print_json(&draft, pretty)
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transcript from stdin")?;
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
