//! Command-line front end for pasteview detection and previews.

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pasteview_core::{
    classify_traced, normalize_hint, preview_etag, render_preview, resolve_content_type,
    ContentType, TypeHint,
};
use serde_json::json;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "pview",
    about = "pasteview content detection and preview CLI",
    version
)]
struct Cli {
    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print the resolved content type
    Detect {
        /// Read content from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Declared type hint (md, markdown, svg, mermaid, html, xml, auto)
        #[arg(long)]
        hint: Option<String>,
    },
    /// Render a preview document
    Render {
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Content type hint; detected when absent or `auto`
        #[arg(short = 't', long = "type")]
        content_type: Option<String>,
        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the preview cache key
    Etag {
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(short = 't', long = "type")]
        content_type: Option<String>,
    },
}

fn read_input(file: Option<&Path>, stdin: &mut dyn Read) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Resolve a type and report how it was decided.
fn resolve_with_source(content: &str, hint: Option<&str>) -> (ContentType, &'static str) {
    match normalize_hint(hint).and_then(TypeHint::concrete) {
        Some(content_type) => (content_type, "hint"),
        None => {
            let classification = classify_traced(content);
            (classification.content_type, classification.rule)
        }
    }
}

fn format_detect_output(
    content_type: ContentType,
    rule: &str,
    hint: Option<&str>,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        let value = json!({
            "content_type": content_type,
            "rule": rule,
            "hint": hint,
        });
        return serde_json::to_string_pretty(&value).context("response encoding error");
    }
    Ok(content_type.to_string())
}

fn format_etag_output(resolved: ContentType, etag: &str, json: bool) -> anyhow::Result<String> {
    if json {
        let value = json!({ "content_type": resolved, "etag": etag });
        return serde_json::to_string_pretty(&value).context("response encoding error");
    }
    Ok(etag.to_string())
}

fn write_document(document: &str, output: Option<&Path>) -> anyhow::Result<Option<String>> {
    match output {
        Some(path) => {
            fs::write(path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote preview to {}", path.display());
            Ok(None)
        }
        None => Ok(Some(document.to_string())),
    }
}

/// Run one command and return what should be printed to stdout.
fn execute(cli: Cli, stdin: &mut dyn Read) -> anyhow::Result<Option<String>> {
    match cli.command {
        Commands::Completions { shell } => {
            let mut buffer = Vec::new();
            generate(shell, &mut Cli::command(), "pview", &mut buffer);
            let script = String::from_utf8(buffer).context("completion script is not UTF-8")?;
            Ok(Some(script))
        }
        Commands::Detect { file, hint } => {
            let content = read_input(file.as_deref(), stdin)?;
            let (content_type, rule) = resolve_with_source(&content, hint.as_deref());
            format_detect_output(content_type, rule, hint.as_deref(), cli.json).map(Some)
        }
        Commands::Render {
            file,
            content_type,
            output,
        } => {
            let content = read_input(file.as_deref(), stdin)?;
            let resolved = resolve_content_type(&content, content_type.as_deref());
            tracing::debug!("Rendering {} bytes as {}", content.len(), resolved);
            write_document(&render_preview(&content, resolved), output.as_deref())
        }
        Commands::Etag { file, content_type } => {
            let content = read_input(file.as_deref(), stdin)?;
            let resolved = resolve_content_type(&content, content_type.as_deref());
            format_etag_output(resolved, &preview_etag(&content, resolved), cli.json).map(Some)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pasteview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut stdin = io::stdin().lock();
    if let Some(output) = execute(cli, &mut stdin)? {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
