#![warn(clippy::all, clippy::pedantic)]

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use icy_bmfont::{AtlasPage, ExportOptions, ExportRequest, FontDescriptor, FormatConfig, PixelFormat, export_font, package};

#[derive(Parser)]
#[command(version, about = "Exports packed bitmap font atlases to BMFont descriptors or C sources.")]
pub struct Cli {
    #[arg(help = "Enables debug output.", long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Exports a font descriptor (JSON) and its atlas pages")]
    Export(ExportArgs),

    #[command(about = "Lists the available output formats")]
    Formats,
}

#[derive(clap::Args)]
struct ExportArgs {
    #[arg(help = "Font descriptor in JSON form.")]
    descriptor: PathBuf,

    #[arg(help = "Atlas page image (PNG), in page order.", long = "page", value_name = "PNG")]
    pages: Vec<PathBuf>,

    #[arg(help = "Output format, extension (fnt, txt, xml, bin, c) or id (e.g. textfnt).", long, short, default_value = "fnt")]
    format: String,

    #[arg(help = "Base name of the produced files, defaults to the descriptor file name.", long)]
    name: Option<String>,

    #[arg(help = "Face name written into the descriptor.", long)]
    font_name: Option<String>,

    #[arg(help = "TOML file with export options.", long)]
    options: Option<PathBuf>,

    #[arg(help = "Pixel format of embedded bitmaps (GRAY8, RGB, RGBA, ARGB, BGR, ABGR, BGRA, RGB565).", long)]
    pixel_format: Option<String>,

    #[arg(help = "Disables the reconstruction filter.", long, default_value_t = false)]
    no_blur: bool,

    #[arg(help = "Emits a separate texture table.", long, default_value_t = false)]
    textures: bool,

    #[arg(help = "Uses 16 bit fields and keeps code points above 0xFFFF.", long, default_value_t = false)]
    extended: bool,

    #[arg(help = "Output directory.", long, short, default_value = ".")]
    out: PathBuf,

    #[arg(help = "Writes loose files instead of a zip archive.", long, default_value_t = false)]
    dir: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let _logger = Logger::try_with_env_or_str(level)?.log_to_stderr().start()?;

    match args.command {
        Commands::Export(export) => run_export(&export),
        Commands::Formats => {
            list_formats();
            Ok(())
        }
    }
}

fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    let format = FormatConfig::lookup(&args.format)?;
    let font = FontDescriptor::load(&args.descriptor).with_context(|| format!("loading {}", args.descriptor.display()))?;

    let mut options = match &args.options {
        Some(path) => ExportOptions::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => ExportOptions::default(),
    };
    if let Some(pixel_format) = &args.pixel_format {
        options.pixel_format = PixelFormat::from_name_or_default(pixel_format);
    }
    if args.no_blur {
        options.blur = false;
    }
    if args.textures {
        options.include_textures = true;
    }
    if args.extended {
        options.extended = true;
    }

    let pages = args.pages.iter().map(PathBuf::as_path).map(load_page).collect::<anyhow::Result<Vec<_>>>()?;
    if pages.len() < font.page_count() {
        log::warn!("Descriptor declares {} page(s), {} given", font.page_count(), pages.len());
    }

    let file_name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .descriptor
            .file_stem()
            .map_or_else(|| "font".to_string(), |stem| stem.to_string_lossy().to_string()),
    };

    let mut request = ExportRequest::new(format, file_name);
    request.font_name = args.font_name.clone().unwrap_or_default();
    request.options = options;

    let bundle = export_font(&request, &font, &pages)?;
    if args.dir {
        for path in package::write_dir(&bundle, &pages, &args.out)? {
            println!("{}", path.display());
        }
    } else {
        println!("{}", package::save_zip(&bundle, &pages, &args.out)?.display());
    }
    Ok(())
}

fn load_page(path: &Path) -> anyhow::Result<AtlasPage> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    AtlasPage::from_png(BufReader::new(file)).with_context(|| format!("decoding {}", path.display()))
}

fn list_formats() {
    println!("{:<10} {:<5} {:<14} {:<7} OPTIONS", "ID", "EXT", "NAME", "PAGES");
    for config in FormatConfig::all() {
        let format = config.format;
        let mut options = Vec::new();
        if format.supports_pixel_format() {
            options.push("pixel-format");
        }
        if format.supports_blur() {
            options.push("blur");
        }
        if format.supports_textures() {
            options.push("textures");
        }
        if format.supports_extended() {
            options.push("extended");
        }
        println!(
            "{:<10} {:<5} {:<14} {:<7} {}",
            config.id,
            config.ext,
            format.name(),
            if format.include_pages() { "png" } else { "-" },
            if options.is_empty() { "-".to_string() } else { options.join(", ") }
        );
    }
}
