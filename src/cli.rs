use crate::adjacency::PageOffsets;
use crate::config::load_config;
use crate::document::GraphStore;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output_png, write_output_svg};
use crate::renderer::SubgraphRenderer;
use crate::theme::Theme;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sgr", version, about = "Render the neighborhood of one vertex of a directed graph")]
pub struct Args {
    /// Input graph document (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png/json). Defaults to stdout for SVG and JSON if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Id of the vertex to center on
    #[arg(short = 'f', long = "focus")]
    pub focus: String,

    /// First incoming neighbor to show
    #[arg(long = "incoming-offset", default_value_t = 0)]
    pub incoming_offset: usize,

    /// First outgoing neighbor to show
    #[arg(long = "outgoing-offset", default_value_t = 0)]
    pub outgoing_offset: usize,

    /// Neighbors per column
    #[arg(short = 'p', long = "page-size")]
    pub page_size: Option<usize>,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Theme name (light, dark)
    #[arg(short = 't', long = "theme")]
    pub theme: Option<String>,

    /// Width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Log layout decisions to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(name) = args.theme.as_deref() {
        config.theme = Theme::from_name(name).ok_or_else(|| anyhow::anyhow!("Unknown theme `{name}`"))?;
    }
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    if let Some(page_size) = args.page_size {
        config.render.page_size = page_size;
    }

    let input = read_input(args.input.as_deref())?;
    let store = GraphStore::parse(&input)?;
    if store.vertex(&args.focus).is_none() {
        return Err(anyhow::anyhow!("Focus vertex `{}` not found in input", args.focus));
    }

    let settings = store.settings(&args.focus, config.render.page_size);
    let renderer = SubgraphRenderer::new(store.subgraph(), settings, config)?;
    let offsets = PageOffsets::new(args.incoming_offset, args.outgoing_offset);
    let rendered = renderer.layout(offsets, renderer.config().render.width)?;
    tracing::info!(
        incoming = rendered.incoming_total,
        outgoing = rendered.outgoing_total,
        drawn = rendered.layout.vertices.len(),
        "layout complete"
    );

    match args.output_format {
        OutputFormat::Json => write_layout_dump(args.output.as_deref(), &rendered)?,
        OutputFormat::Svg => {
            let svg = render_svg(&rendered.layout, renderer.images(), &renderer.config().theme, renderer.config())?;
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = render_svg(&rendered.layout, renderer.images(), &renderer.config().theme, renderer.config())?;
            write_output_png(&svg, &output, &renderer.config().render)?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pagination_flags() {
        let args = Args::try_parse_from([
            "sgr",
            "-i",
            "graph.json5",
            "-f",
            "v0",
            "--incoming-offset",
            "10",
            "-p",
            "5",
            "-e",
            "json",
        ])
        .unwrap();
        assert_eq!(args.focus, "v0");
        assert_eq!(args.incoming_offset, 10);
        assert_eq!(args.outgoing_offset, 0);
        assert_eq!(args.page_size, Some(5));
        assert!(matches!(args.output_format, OutputFormat::Json));
    }

    #[test]
    fn focus_is_required() {
        assert!(Args::try_parse_from(["sgr", "-i", "graph.json5"]).is_err());
    }

    #[test]
    fn png_needs_an_output_path() {
        assert!(ensure_output(&None, "png").is_err());
        assert_eq!(
            ensure_output(&Some(PathBuf::from("out.png")), "png").unwrap(),
            PathBuf::from("out.png")
        );
    }
}
