//! NKJP Corpus Extraction Tool
//!
//! Walks an NKJP-style corpus tree, reconciles the per-document annotation
//! layers into labeled token sequences, and writes the aggregate dataset.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use kosa_core::{CorpusConfig, CorpusWalker, ExtractionMode};
use kosa_dataset::{DatasetFormat, DatasetWriter};

/// CLI arguments
#[derive(Parser)]
#[command(name = "nkjp-extract")]
#[command(about = "Extract labeled token sequences from an NKJP-style corpus")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Corpus root directory
    #[arg(short, long, env = "NKJP_CORPUS_ROOT")]
    root: PathBuf,

    /// Namespace prefix stripped by the sanitizer
    #[arg(long, default_value = "nkjp")]
    namespace_prefix: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the corpus and write the dataset
    Extract {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Output format: jsonl or conll
        #[arg(short, long, default_value = "jsonl")]
        format: String,
    },
    /// List discovered document ids
    List,
    /// Dump one annotation layer of one document
    Inspect {
        /// Document id (root-relative directory)
        id: String,

        /// Layer to dump: words, named, or sentences
        #[arg(short, long, default_value = "words")]
        mode: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = CorpusConfig::new(&cli.root).with_namespace_prefix(&cli.namespace_prefix);
    let walker = CorpusWalker::new(config).context("building corpus walker")?;

    match cli.command {
        Commands::Extract { output, format } => {
            let format: DatasetFormat = format.parse()?;
            info!("walking corpus at {}", cli.root.display());

            // Documents stream straight to disk; memory stays bounded by
            // one document regardless of corpus size.
            let mut writer = DatasetWriter::create(&output, format)
                .with_context(|| format!("creating {}", output.display()))?;
            let summary = walker
                .for_each_document(|document| {
                    writer.write_document(&document).map_err(anyhow::Error::from)
                })
                .context("corpus walk failed")?;
            writer.finish()?;

            println!(
                "Processed {} documents, extracted {} records ({} written as {}).",
                summary.documents,
                summary.records,
                output.display(),
                format
            );
            for skipped in &summary.skipped {
                println!("  skipped {}: {}", skipped.id, skipped.reason);
            }
        }
        Commands::List => {
            for id in walker.document_ids().context("discovering documents")? {
                println!("{id}");
            }
        }
        Commands::Inspect { id, mode } => {
            let mode: ExtractionMode = mode.parse()?;
            let dir = cli.root.join(&id);
            let reader = walker.reader();

            match mode {
                ExtractionMode::Words => {
                    for token in reader.words(&dir)? {
                        println!("{}\t{}", token.orth, token.ctag);
                    }
                }
                ExtractionMode::NamedEntities => {
                    for mention in reader.named_entities(&dir)? {
                        println!("{}\t{}", mention.text, mention.category);
                    }
                }
                ExtractionMode::Sentences => {
                    for sentence in reader.sentences(&dir)? {
                        println!("{sentence}");
                    }
                }
            }
        }
    }

    Ok(())
}
