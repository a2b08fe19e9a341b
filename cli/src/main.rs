//! hocr2eocr CLI - hOCR to eOCR conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use hocr2eocr::{
    checksum, container, CharacterRange, ConvertOptions, Converter, JsonFormat, Page, SourceOrder,
};

#[derive(Parser)]
#[command(name = "hocr2eocr")]
#[command(version)]
#[command(about = "Convert hOCR folders into eOCR containers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a folder of .hocr files into an eOCR container
    Convert {
        /// Folder containing .hocr files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output file (defaults to <DIR>.eocr)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Original source file the hOCR was produced from (hashed with MD5)
        #[arg(short, long, value_name = "FILE", conflicts_with = "md5")]
        source: Option<PathBuf>,

        /// MD5 of the original source file, as hex
        #[arg(long, env = "HOCR2EOCR_MD5")]
        md5: Option<String>,

        /// Source ordering
        #[arg(long, value_enum, default_value = "natural")]
        order: OrderMode,

        /// Page resolution (dots per inch)
        #[arg(long, default_value = "300")]
        dpi: u32,

        /// Read sources one at a time
        #[arg(long)]
        sequential: bool,

        /// Also write the document as JSON next to the container
        #[arg(long)]
        json: bool,
    },

    /// Show container information
    Info {
        /// Input eOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert a container to JSON
    Json {
        /// Input eOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the characters of a span with their pages and bounding boxes
    Lookup {
        /// Input eOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// First character index of the span
        #[arg(long)]
        start: u64,

        /// Character index one past the end of the span
        #[arg(long)]
        end: u64,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OrderMode {
    /// Sort by the numbers in each file name
    Natural,
    /// Keep directory listing order (sorted by name)
    Explicit,
}

impl From<OrderMode> for SourceOrder {
    fn from(mode: OrderMode) -> Self {
        match mode {
            OrderMode::Natural => SourceOrder::Natural,
            OrderMode::Explicit => SourceOrder::Explicit,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            source,
            md5,
            order,
            dpi,
            sequential,
            json,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            source.as_deref(),
            md5.as_deref(),
            order,
            dpi,
            sequential,
            json,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Lookup {
            input,
            start,
            end,
            json,
        }) => cmd_lookup(&input, start, end, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!(
                "{}",
                "Usage: hocr2eocr convert <DIR> --source <FILE>".yellow()
            );
            println!("       hocr2eocr --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    source: Option<&Path>,
    md5: Option<&str>,
    order: OrderMode,
    dpi: u32,
    sequential: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let digest = match (source, md5) {
        (Some(path), _) => checksum::md5_file(path)?,
        (None, Some(hex)) => checksum::from_hex(hex)?,
        (None, None) => return Err("either --source or --md5 must be given".into()),
    };

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(input)?,
    };

    let options = ConvertOptions::new()
        .with_md5(digest)
        .with_source_dir(input)
        .with_order(order.into())
        .with_dpi(dpi, dpi)
        .with_parallel(!sequential);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let doc = Converter::new(options).run_with_progress(|report| {
        pb.set_length(report.total as u64);
        pb.set_message(
            report
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        pb.inc(1);
    })?;
    pb.finish_with_message("Done!");

    log::debug!("writing container to {}", output.display());
    container::write_file(&output, &doc)?;

    println!("\n{}", "Output files:".green().bold());
    if json {
        let json_path = output.with_extension("json");
        fs::write(&json_path, hocr2eocr::render::to_json(&doc, JsonFormat::Pretty)?)?;
        println!("  {} {}", "├─".dimmed(), output.display());
        println!("  {} {}", "└─".dimmed(), json_path.display());
    } else {
        println!("  {} {}", "└─".dimmed(), output.display());
    }

    println!(
        "\n{} page(s), {} character(s)",
        doc.page_count(),
        doc.character_count()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = hocr2eocr::detect_container_from_path(input)?;
    let doc = container::read_file(input)?;

    println!("{}", "Container Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Version".bold(), doc.version);
    println!("{}: {}", "Source MD5".bold(), doc.md5_hex());
    println!("{}: {}", "SHA-1".bold(), checksum::to_hex(&format.digest));
    println!("{}: {} bytes", "Payload".bold(), format.payload_len);
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Characters".bold(), doc.character_count());

    println!();
    println!("{}", "Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (index, page) in doc.pages.iter().enumerate() {
        println!("{:>4}  {}", index, describe_page(page));
    }

    Ok(())
}

/// `<DIR>.eocr` in the working directory, named after the resolved folder.
fn default_output(input: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let resolved = fs::canonicalize(input)?;
    let name = resolved
        .file_name()
        .ok_or("cannot derive an output name from the input folder, use --output")?;
    Ok(PathBuf::from(format!("{}.eocr", name.to_string_lossy())))
}

fn describe_page(page: &Page) -> String {
    let (width, height) = page.dimensions();
    let orientation = if page.is_landscape() {
        "landscape"
    } else {
        "portrait"
    };
    format!(
        "chars {}..{} ({})  {}x{} px {} @ {}x{} dpi",
        page.range.start,
        page.range.end,
        page.character_count(),
        width,
        height,
        orientation,
        page.dpi_x,
        page.dpi_y
    )
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = container::read_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = hocr2eocr::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_lookup(
    input: &Path,
    start: u64,
    end: u64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = container::read_file(input)?;
    let located = doc.span_characters(start, end)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&located)?);
        return Ok(());
    }

    let span = doc.pages_for_range(start, end);
    let text: String = located.iter().map(|c| c.character).collect();
    println!("{}: {:?}", "Text".bold(), text);
    if let (Some(first), Some(last)) = (span.start, span.end) {
        println!("{}: {}-{}", "Pages".bold(), first, last);
    }

    for c in &located {
        let b = c.bounding_box;
        println!(
            "  [{}] [Page: {}] [Character: {:?}] [BoundingBox: x1={}, y1={}, x2={}, y2={}]",
            c.index.to_string().blue(),
            c.page,
            c.character,
            b.x1,
            b.y1,
            b.x2,
            b.y2
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "hocr2eocr".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("hOCR to eOCR conversion tool");
    println!();
    println!("License: Apache-2.0");
}
