use std::path::PathBuf;

use anyhow::Context as _;
use autograph::{
    FontCatalog, Fps, HanziWriterSource, OutlineFont, OutputFormat, RasterOptions, RenderOptions,
    Signature, StrokeCache, StyleConfig, fetch_font_bytes, with_placeholder_text,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "autograph", version, about = "Render animated signatures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a signature to SVG, JSON, PNG or GIF.
    Render(RenderArgs),
    /// Print the share URL for a style query.
    Url(UrlArgs),
    /// List the font catalog.
    Fonts,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Style as a query string, e.g. `text=Ada&theme=laser`.
    #[arg(long, default_value = "")]
    query: String,

    /// Override the text from the query.
    #[arg(long)]
    text: Option<String>,

    /// Local TrueType/OpenType file instead of the catalog font.
    #[arg(long)]
    font_file: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// GIF frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Raster width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Raster height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Prefix for identifiers inside the SVG.
    #[arg(long, default_value = "")]
    prefix: String,

    /// Emit SVG without animation.
    #[arg(long = "static", default_value_t = false)]
    static_svg: bool,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct UrlArgs {
    /// Style as a query string.
    #[arg(long, default_value = "")]
    query: String,

    /// Origin of the signing endpoint.
    #[arg(long, default_value = "http://localhost:3000")]
    origin: String,

    /// Output format appended to the URL.
    #[arg(long)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Url(args) => cmd_url(args),
        Command::Fonts => cmd_fonts(),
    }
}

fn load_font(args: &RenderArgs, style: &StyleConfig) -> anyhow::Result<OutlineFont> {
    if let Some(path) = &args.font_file {
        return Ok(OutlineFont::from_path(path)?);
    }
    let entry = FontCatalog::resolve(&style.font);
    tracing::info!(font = entry.id, url = entry.url, "downloading font");
    let bytes = fetch_font_bytes(entry.url)?;
    Ok(OutlineFont::from_bytes(bytes)?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut style = StyleConfig::from_query(&args.query);
    if let Some(text) = &args.text {
        style.text = text.clone();
        style.backfill_char_colors();
    }
    let style = with_placeholder_text(style);

    let font = load_font(&args, &style)?;
    let strokes = if style.use_hanzi_data {
        let cache = StrokeCache::new(HanziWriterSource::new()?);
        cache.prefetch(&style.text);
        Some(cache)
    } else {
        None
    };

    let signature = Signature::build(
        &font,
        strokes.as_ref().map(|s| s as &dyn autograph::StrokeSource),
        &style,
    );
    let opts = RenderOptions {
        static_svg: args.static_svg,
        id_prefix: args.prefix.clone(),
        raster: RasterOptions {
            fps: Fps::new(args.fps, 1)?,
            width: args.width,
            height: args.height,
            ..RasterOptions::default()
        },
    };
    let output = signature.render(args.format, &opts)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &output.bytes)
        .with_context(|| format!("write {} '{}'", args.format, args.out.display()))?;

    eprintln!(
        "wrote {} ({}, {} paths, {:.2}s)",
        args.out.display(),
        output.mime,
        signature.paths().len(),
        signature.duration_secs()
    );
    Ok(())
}

fn cmd_url(args: UrlArgs) -> anyhow::Result<()> {
    let style = StyleConfig::from_query(&args.query);
    let format = args.format.map(|f| f.as_str());
    println!("{}", style.sign_api_url(&args.origin, format));
    Ok(())
}

fn cmd_fonts() -> anyhow::Result<()> {
    for entry in FontCatalog::entries() {
        println!("{:<20} {:<24} {}", entry.id, entry.label, entry.category);
    }
    Ok(())
}
