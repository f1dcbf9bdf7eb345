use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use honocoroko_cli::{commands, CategoryArg, DirectionArg};
use honocoroko_core::{Direction, TransliterationOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "honocoroko")]
#[command(about = "Honocoroko - Latin <-> Javanese script transliteration", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input file ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Text to convert instead of reading a file
    #[arg(short, long)]
    text: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Run preserved symbols (? ! @ ...) through the mapping tables
    #[arg(long)]
    convert_special_chars: bool,

    /// Fail on the first character with no mapping
    #[arg(long)]
    strict: bool,

    /// Write unmapped-character diagnostics as JSON
    #[arg(long)]
    report: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Latin to Javanese script
    To(ConvertArgs),

    /// Javanese script to Latin
    From(ConvertArgs),

    /// Convert in an explicit direction
    Convert {
        /// Direction tag
        #[arg(short, long, value_enum)]
        direction: DirectionArg,

        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Show the mapping tables
    Table {
        /// Only this category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::To(args) => convert(args, Direction::ToHonocoroko),
        Commands::From(args) => convert(args, Direction::FromHonocoroko),
        Commands::Convert { direction, args } => convert(args, direction.into()),
        Commands::Table { category, output } => {
            commands::table::execute(category.map(Into::into), output.as_deref())
        }
    }
}

fn convert(args: ConvertArgs, direction: Direction) -> Result<()> {
    let options = TransliterationOptions::new()
        .convert_special_chars(args.convert_special_chars)
        .strict(args.strict);

    let source = match args.text.as_deref() {
        Some(text) => commands::convert::Source::Text(text),
        None => commands::convert::Source::Path(&args.input),
    };

    commands::convert::execute(
        source,
        args.output.as_deref(),
        direction,
        &options,
        args.report.as_deref(),
    )?;

    Ok(())
}
