//! Command-line interface for citemark.
//!
//! Provides commands for annotating responses with citations, inspecting
//! sentence segmentation, scoring similarity between texts, and showing
//! the resolved configuration.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::EngineConfig;
use crate::domain::{DocumentManifest, SourceDocument};
use crate::engine::{segment, similarity, CitationEngine};

/// citemark - Citation extraction and highlighting engine
#[derive(Parser, Debug)]
#[command(name = "citemark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Annotate a response with citations from source documents
    Annotate {
        /// Response text file ("-" reads from stdin)
        response: PathBuf,

        /// Document file to cite against (repeatable)
        #[arg(long = "doc")]
        docs: Vec<PathBuf>,

        /// Glob pattern of document files
        #[arg(long)]
        glob: Option<String>,

        /// YAML manifest listing documents
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Maximum number of citations to keep
        #[arg(long)]
        max_citations: Option<usize>,

        /// Emit the full processed response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the citation-eligible sentences of a text, one per line
    Segment {
        /// Text file ("-" reads from stdin)
        file: PathBuf,
    },

    /// Score textual similarity between two files
    Score {
        /// First text file
        a: PathBuf,

        /// Second text file
        b: PathBuf,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = EngineConfig::discover()?;

        match self.command {
            Commands::Annotate {
                response,
                docs,
                glob,
                manifest,
                max_citations,
                json,
            } => {
                let response_text = read_input(&response)?;
                let documents = load_documents(&docs, glob.as_deref(), manifest.as_deref())?;
                info!(documents = documents.len(), "loaded documents");

                let engine = CitationEngine::new(config);
                let result = engine.process_response(&response_text, &documents, max_citations);
                info!(citations = result.citations.len(), "processed response");

                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    println!("{}", result.highlighted_content);
                    if !result.citations.is_empty() {
                        println!();
                        println!("Citations:");
                        for (i, c) in result.citations.iter().enumerate() {
                            println!(
                                "  [{}] {} ({}) confidence={:.2}",
                                i + 1,
                                c.source_document,
                                c.source_type,
                                c.confidence
                            );
                        }
                    }
                }
                Ok(())
            }

            Commands::Segment { file } => {
                let text = read_input(&file)?;
                for sentence in segment::segment(&text, config.min_sentence_chars) {
                    println!("{}", sentence);
                }
                Ok(())
            }

            Commands::Score { a, b } => {
                let text_a = read_input(&a)?;
                let text_b = read_input(&b)?;
                println!("{:.4}", similarity::score(&text_a, &text_b));
                Ok(())
            }

            Commands::Config => {
                println!("{}", serde_yaml::to_string(&config)?);
                Ok(())
            }
        }
    }
}

/// Read a file, or stdin when the path is "-"
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))
    }
}

/// Collect documents from explicit files, a glob pattern, and a manifest
fn load_documents(
    docs: &[PathBuf],
    glob_pattern: Option<&str>,
    manifest: Option<&Path>,
) -> Result<Vec<SourceDocument>> {
    let mut documents = Vec::new();

    for path in docs {
        documents.push(SourceDocument::from_file(path)?);
    }

    if let Some(pattern) = glob_pattern {
        for entry in glob::glob(pattern).context("Invalid glob pattern")? {
            let path = entry.context("Failed to read glob entry")?;
            if path.is_file() {
                documents.push(SourceDocument::from_file(&path)?);
            }
        }
    }

    if let Some(path) = manifest {
        documents.extend(DocumentManifest::load(path)?);
    }

    if documents.is_empty() {
        bail!("No documents supplied; use --doc, --glob, or --manifest");
    }

    Ok(documents)
}
