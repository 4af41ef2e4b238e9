//! labeldoc: validate labeled-markup essays and render them to other formats.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `labeldoc -f html < essay.ldoc`
//! - **file mode**: `labeldoc -d site -f html essays/*.ldoc`

use anyhow::{bail, Context, Result};
use clap::Parser;
use labeldoc::config::Config;
use labeldoc::parser::{self, InputFormat};
use labeldoc::render::{self, Renderer};
use labeldoc::{filter, Document};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "labeldoc",
    version,
    about = "Validate labeled-markup essays and render them as markup, markdown, HTML, JSON or text"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Write the rendering to this file instead of stdout (single input only)
    #[arg(short = 'o', long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Output directory; one rendered file per input
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Output format: markup (default), markdown, html, json, text
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Input syntax. Defaults to the file extension, or markup for stdin.
    #[arg(long, value_enum)]
    from: Option<InputFormat>,

    /// Keep only sections with this heading. Prefix with ! to drop it instead.
    /// Can be specified multiple times.
    #[arg(long = "section")]
    sections: Vec<String>,

    /// Config file (default: ./labeldoc.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only parse and validate; print "<input>: ok" per input
    #[arg(long, conflicts_with_all = ["output", "output_dir"])]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let config = Config::load(cli.config.as_deref())?;
    let format = cli
        .format
        .clone()
        .or_else(|| config.format.clone())
        .unwrap_or_else(|| "markup".to_string());
    let renderer = render::create_renderer(&format, &config)?;
    debug!(format = %format, "renderer selected");

    if cli.files.is_empty() {
        return stdin_mode(&cli, renderer.as_ref());
    }

    file_mode(&cli, renderer.as_ref())
}

/// Logs go to stderr so stdout only ever carries rendered output.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();
}

/// stdin mode: read one document from stdin, write to stdout or `-o`.
fn stdin_mode(cli: &Cli, renderer: &dyn Renderer) -> Result<()> {
    if cli.output_dir.is_some() {
        bail!("--output-dir requires input files");
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = parser::parse_as(cli.from.unwrap_or(InputFormat::Markup), "<stdin>", &input)?;
    debug!(
        sections = doc.sections().len(),
        entries = doc.entry_count(),
        "parsed <stdin>"
    );

    if cli.check {
        println!("<stdin>: ok");
        return Ok(());
    }

    render_single(cli, renderer, &doc)
}

/// file mode: parse every input first, then render each one.
fn file_mode(cli: &Cli, renderer: &dyn Renderer) -> Result<()> {
    let input_files = expand_globs(&cli.files)?;
    if input_files.is_empty() {
        bail!("no input files found");
    }
    if !cli.check && cli.output_dir.is_none() && input_files.len() > 1 {
        bail!("--output-dir is required when more than one file is given");
    }

    let mut parsed: Vec<(PathBuf, Document)> = Vec::new();
    for path in input_files {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let doc = match cli.from {
            Some(format) => parser::parse_as(format, &path.display().to_string(), &content)?,
            None => parser::parse_file(&path, &content)?,
        };
        debug!(
            sections = doc.sections().len(),
            entries = doc.entry_count(),
            "parsed {}",
            path.display()
        );
        parsed.push((path, doc));
    }

    if cli.check {
        for (path, _) in &parsed {
            println!("{}: ok", path.display());
        }
        return Ok(());
    }

    let Some(output_dir) = cli.output_dir.as_deref() else {
        // Exactly one input, checked above.
        return match parsed.as_slice() {
            [(_, doc)] => render_single(cli, renderer, doc),
            _ => bail!("--output-dir is required when more than one file is given"),
        };
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let ext = renderer.file_extension();
    let mut planned: Vec<(PathBuf, Document)> = Vec::new();
    let mut targets: HashMap<PathBuf, &Path> = HashMap::new();
    for (path, doc) in &parsed {
        // Skip documents the section filter empties out
        let Some(doc) = filter::select(doc, &cli.sections) else {
            warn!("skipping {}: no sections left after --section filters", path.display());
            continue;
        };

        let name = derive_output_name(path);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        if let Some(other) = targets.insert(out_path.clone(), path.as_path()) {
            bail!(
                "inputs {} and {} both render to {}",
                other.display(),
                path.display(),
                out_path.display()
            );
        }
        planned.push((out_path, doc));
    }

    for (out_path, doc) in &planned {
        let output = renderer.render(doc)?;
        fs::write(out_path, &output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        debug!("wrote {}", out_path.display());
    }

    Ok(())
}

/// Render one document to `-o` or stdout.
fn render_single(cli: &Cli, renderer: &dyn Renderer, doc: &Document) -> Result<()> {
    let Some(doc) = filter::select(doc, &cli.sections) else {
        bail!("no sections left after --section filters");
    };
    let output = renderer.render(&doc)?;

    match cli.output.as_deref() {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}

/// File extensions recognized as inputs when scanning a directory.
const SUPPORTED_EXTENSIONS: &[&str] = &["ldoc", "md", "markdown", "txt", "json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "essays/paradigms.ldoc" becomes "paradigms"
fn derive_output_name(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_from_ldoc() {
        assert_eq!(derive_output_name(Path::new("essays/paradigms.ldoc")), "paradigms");
        assert_eq!(derive_output_name(Path::new("paradigms.ldoc")), "paradigms");
    }

    #[test]
    fn output_name_from_json() {
        assert_eq!(derive_output_name(Path::new("out/paradigms.json")), "paradigms");
    }

    #[test]
    fn output_name_no_extension() {
        assert_eq!(derive_output_name(Path::new("README")), "README");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
