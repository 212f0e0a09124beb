use std::{
    io::Read as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "chiasm", version, about = "Ring-composition diagrams of verse ranges")]
struct Cli {
    /// JSON config file (see `Config`); flags below override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read API documents from this directory instead of the network.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Canvas width.
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Canvas height.
    #[arg(long, global = true)]
    height: Option<u32>,

    /// More logging (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available collections.
    Collections,
    /// Draw a verse range of one collection.
    Load(LoadArgs),
    /// Draw pasted text, one item per non-empty line.
    Text(TextArgs),
    /// Write a PDF named after the dataset title into a directory.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct LoadArgs {
    /// Collection id.
    #[arg(long)]
    collection: u32,

    /// First verse (inclusive).
    #[arg(long)]
    from: u32,

    /// Last verse (inclusive).
    #[arg(long)]
    to: u32,

    #[command(flatten)]
    draw: DrawArgs,

    /// Output file; the extension picks the format (svg, png, pdf, json).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TextArgs {
    /// Input text file, or `-` for stdin.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    draw: DrawArgs,

    /// Output file; the extension picks the format (svg, png, pdf, json).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Collection id (with --from/--to).
    #[arg(long, conflicts_with = "in_path", requires_all = ["from", "to"])]
    collection: Option<u32>,

    /// First verse (inclusive).
    #[arg(long)]
    from: Option<u32>,

    /// Last verse (inclusive).
    #[arg(long)]
    to: Option<u32>,

    /// Input text file, or `-` for stdin.
    #[arg(long = "in", required_unless_present = "collection")]
    in_path: Option<PathBuf>,

    #[command(flatten)]
    draw: DrawArgs,

    /// Directory the PDF is written into.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Layout.
    #[arg(long, value_enum, default_value_t = ViewChoice::Ring)]
    view: ViewChoice,

    /// Draw item N (1-based) in its hovered state.
    #[arg(long, value_name = "N")]
    hover: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewChoice {
    Ring,
    Tree,
    Timeline,
}

impl From<ViewChoice> for chiasm::ViewMode {
    fn from(v: ViewChoice) -> Self {
        match v {
            ViewChoice::Ring => chiasm::ViewMode::Ring,
            ViewChoice::Tree => chiasm::ViewMode::Tree,
            ViewChoice::Timeline => chiasm::ViewMode::Timeline,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = load_config(&cli)?;
    match &cli.cmd {
        Command::Collections => cmd_collections(&cli, &cfg),
        Command::Load(args) => cmd_load(&cli, &cfg, args),
        Command::Text(args) => cmd_text(&cfg, args),
        Command::Export(args) => cmd_export(&cli, &cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<chiasm::Config> {
    let mut cfg = match &cli.config {
        Some(path) => chiasm::Config::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => chiasm::Config::default(),
    };
    if let Some(w) = cli.width {
        cfg.width = w;
    }
    if let Some(h) = cli.height {
        cfg.height = h;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn make_source(cli: &Cli, cfg: &chiasm::Config) -> anyhow::Result<Box<dyn chiasm::VerseSource>> {
    let source: Box<dyn chiasm::VerseSource> = match &cli.data_dir {
        Some(dir) => Box::new(chiasm::JsonDirSource::open(dir.clone(), cfg)),
        None => Box::new(chiasm::AlQuranCloud::from_config(cfg)?),
    };
    Ok(source)
}

fn find_collection(source: &dyn chiasm::VerseSource, id: u32) -> chiasm::Collection {
    source
        .list_collections()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| chiasm::Collection::unnamed(id))
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read text '{}'", path.display()))
}

fn cmd_collections(cli: &Cli, cfg: &chiasm::Config) -> anyhow::Result<()> {
    let source = make_source(cli, cfg)?;
    let list = source.list_collections();
    if list.is_empty() {
        anyhow::bail!("no collections available");
    }
    for c in list {
        println!("{}", c.label());
    }
    Ok(())
}

fn cmd_load(cli: &Cli, cfg: &chiasm::Config, args: &LoadArgs) -> anyhow::Result<()> {
    let source = make_source(cli, cfg)?;
    let collection = find_collection(source.as_ref(), args.collection);
    let mut session = chiasm::Session::new(cfg.layout_opts());
    session.load_collection(source.as_ref(), &collection, args.from, args.to)?;
    write_output(&mut session, cfg, &args.draw, &args.out)
}

fn cmd_text(cfg: &chiasm::Config, args: &TextArgs) -> anyhow::Result<()> {
    let text = read_text(&args.in_path)?;
    let mut session = chiasm::Session::new(cfg.layout_opts());
    session.visualize_text(&text)?;
    write_output(&mut session, cfg, &args.draw, &args.out)
}

fn cmd_export(cli: &Cli, cfg: &chiasm::Config, args: &ExportArgs) -> anyhow::Result<()> {
    let mut session = chiasm::Session::new(cfg.layout_opts());
    match (&args.in_path, args.collection, args.from, args.to) {
        (Some(path), _, _, _) => {
            session.visualize_text(&read_text(path)?)?;
        }
        (None, Some(id), Some(from), Some(to)) => {
            let source = make_source(cli, cfg)?;
            let collection = find_collection(source.as_ref(), id);
            session.load_collection(source.as_ref(), &collection, from, to)?;
        }
        _ => anyhow::bail!("export needs --in or --collection with --from and --to"),
    }
    session.switch_view(args.draw.view.into());
    if args.draw.hover.is_some() {
        tracing::warn!("--hover is ignored by export");
    }

    let path = session.export(&args.out_dir, &cfg.raster_opts())?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn write_output(
    session: &mut chiasm::Session,
    cfg: &chiasm::Config,
    draw: &DrawArgs,
    out: &Path,
) -> anyhow::Result<()> {
    session.switch_view(draw.view.into());
    let mut model = session.render().context("nothing to render")?;
    if let Some(n) = draw.hover {
        let highlight = n
            .checked_sub(1)
            .and_then(|i| session.hover(i))
            .with_context(|| format!("--hover {n} is not an item of this dataset"))?;
        chiasm::apply_highlight(&mut model, &highlight);
    }
    let title = session
        .current()
        .map(|ds| ds.title.clone())
        .unwrap_or_default();

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "svg" => {
            let svg = chiasm::render_svg(&model, cfg.background);
            std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
        }
        "png" => {
            let svg = chiasm::render_svg(&model, cfg.background);
            let image = chiasm::rasterize_svg(&svg, &cfg.raster_opts())?;
            chiasm::write_png(&image, out)?;
        }
        "pdf" => chiasm::export_pdf(&model, &title, &cfg.raster_opts(), out)?,
        "json" => {
            let json = serde_json::to_string_pretty(&model).context("serialize render model")?;
            std::fs::write(out, json).with_context(|| format!("write json '{}'", out.display()))?;
        }
        other => anyhow::bail!("unsupported output extension '{other}' (use svg, png, pdf or json)"),
    }

    eprintln!("wrote {}", out.display());
    Ok(())
}
