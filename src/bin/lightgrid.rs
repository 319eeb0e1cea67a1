use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lightgrid", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode an image, crop it and fit it to the configured frame.
    Import(ImportArgs),
    /// Render the light layout of a frame image to a PNG.
    Preview(PreviewArgs),
    /// Print the color displayed at a cell.
    Pick(PickArgs),
    /// Paint one cell and write the edited frame image.
    Edit(EditArgs),
    /// Save the frame image to the settings directory and print the paste record.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct FrameInput {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Settings JSON (frame size, element type, export directory).
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Copy)]
struct OffsetArgs {
    /// Horizontal offset in cells (positive moves right).
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    dx: i32,

    /// Vertical offset in cells (positive moves down).
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    dy: i32,

    /// Treat --dy as relative to an image vertically centered in the frame.
    #[arg(long)]
    center: bool,
}

impl OffsetArgs {
    fn offset(self, editor: &lightgrid::PixelEditor) -> lightgrid::Offset {
        let frame = editor.frame();
        if self.center {
            let content_rows = editor.buffer().content_rows(frame);
            lightgrid::Offset::from_centered_slider(self.dx, self.dy, frame, content_rows)
        } else {
            lightgrid::Offset::new(self.dx, self.dy).clamp_to(frame)
        }
    }
}

#[derive(Parser, Debug)]
struct ImportArgs {
    #[command(flatten)]
    input: FrameInput,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Crop area in percent: x,y,width,height.
    #[arg(long)]
    crop: Option<String>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    input: FrameInput,

    #[command(flatten)]
    offset: OffsetArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Background color.
    #[arg(long, default_value = "#12141c")]
    background: String,
}

#[derive(Parser, Debug)]
struct PickArgs {
    #[command(flatten)]
    input: FrameInput,

    #[command(flatten)]
    offset: OffsetArgs,

    #[arg(long)]
    row: usize,

    #[arg(long)]
    col: usize,
}

#[derive(Parser, Debug)]
struct EditArgs {
    #[command(flatten)]
    input: FrameInput,

    #[command(flatten)]
    offset: OffsetArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Hex color (#rrggbb, #rrggbbaa) or palette name.
    #[arg(long)]
    color: String,

    #[arg(long, requires = "col", conflicts_with = "at")]
    row: Option<usize>,

    #[arg(long, requires = "row")]
    col: Option<usize>,

    /// Physical click position in layout units: x,y.
    #[arg(long)]
    at: Option<String>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    input: FrameInput,

    #[command(flatten)]
    offset: OffsetArgs,

    /// File name inside the settings directory.
    #[arg(long, default_value = "lightgrid.png")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Import(args) => cmd_import(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Pick(args) => cmd_pick(args),
        Command::Edit(args) => cmd_edit(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<lightgrid::Settings> {
    match path {
        Some(p) => Ok(lightgrid::Settings::load(p)?),
        None => Ok(lightgrid::Settings::default()),
    }
}

fn open_editor(input: &FrameInput) -> anyhow::Result<(lightgrid::Settings, lightgrid::PixelEditor)> {
    let settings = read_settings(input.settings.as_deref())?;
    let frame = settings.frame()?;
    let decoded = lightgrid::load_pixel_buffer(&input.in_path)?;
    if decoded.width != frame.columns {
        tracing::warn!(
            image_width = decoded.width,
            columns = frame.columns,
            "image width differs from frame columns; rows will wrap"
        );
    }
    Ok((settings, lightgrid::PixelEditor::new(decoded.buffer, frame)))
}

fn save_png(buffer: &lightgrid::PixelBuffer, columns: u32, out: &Path) -> anyhow::Result<()> {
    let png = lightgrid::encode_png(buffer, columns)?;
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, png).with_context(|| format!("write png '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_import(args: ImportArgs) -> anyhow::Result<()> {
    let settings = read_settings(args.input.settings.as_deref())?;
    let frame = settings.frame()?;
    let crop = args
        .crop
        .as_deref()
        .map(lightgrid::CropArea::parse)
        .transpose()?;

    let bytes = std::fs::read(&args.input.in_path)
        .with_context(|| format!("read image '{}'", args.input.in_path.display()))?;
    let decoded = lightgrid::prepare_frame_image(&bytes, frame, crop)?;

    save_png(&decoded.buffer, decoded.width, &args.out)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let (settings, editor) = open_editor(&args.input)?;
    let offset = args.offset.offset(&editor);
    let background = lightgrid::parse_color(&args.background)?;

    let layout = settings.layout()?;
    let grid = editor.render(offset);
    let img = lightgrid::render_preview(&grid, &layout, background)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_pick(args: PickArgs) -> anyhow::Result<()> {
    let (_, editor) = open_editor(&args.input)?;
    let offset = args.offset.offset(&editor);
    let cell = lightgrid::CellPos::new(args.row, args.col);
    if !editor.frame().contains(cell) {
        anyhow::bail!("cell ({}, {}) is outside the frame", args.row, args.col);
    }

    match editor.pick(cell, offset) {
        Some(c) => println!("{}\t{}", c.to_hex(), c),
        None => println!("transparent"),
    }
    Ok(())
}

fn cmd_edit(args: EditArgs) -> anyhow::Result<()> {
    let (settings, mut editor) = open_editor(&args.input)?;
    let offset = args.offset.offset(&editor);
    let color = lightgrid::parse_color(&args.color)?;

    let cell = match (args.row, args.col, args.at.as_deref()) {
        (Some(row), Some(col), _) => {
            let cell = lightgrid::CellPos::new(row, col);
            editor.edit(cell, color, offset)?;
            cell
        }
        (_, _, Some(at)) => {
            let p = parse_point(at)?;
            let layout = settings.layout()?;
            editor
                .edit_at_point(&layout, p, color, offset)?
                .with_context(|| format!("position {at} is outside every row"))?
        }
        _ => anyhow::bail!("pass either --row/--col or --at"),
    };
    eprintln!("painted ({}, {}) {}", cell.row, cell.col, color.to_hex());

    let columns = editor.frame().columns;
    save_png(editor.buffer(), columns, &args.out)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let (settings, editor) = open_editor(&args.input)?;
    if !settings.is_export_ready() {
        anyhow::bail!("settings have no export directory");
    }
    let offset = args.offset.offset(&editor);

    let out = lightgrid::export_frame(
        &editor,
        offset,
        Path::new(&settings.directory),
        &args.name,
    )?;
    eprintln!("wrote {}", out.image_path.display());
    println!("{}", out.descriptor);
    Ok(())
}

fn parse_point(s: &str) -> anyhow::Result<lightgrid::Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("position '{s}' must be x,y"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in '{s}'"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in '{s}'"))?;
    Ok(lightgrid::Point::new(x, y))
}
