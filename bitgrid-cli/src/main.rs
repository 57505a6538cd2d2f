use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use bitgrid::numeric::parse_literal;
use bitgrid::{
    BitDisplay, BitWidth, DisplayOptions, Endianness, Grid, GrowthDirection, Interpretation,
    ViewConfig,
};

mod render_text;
mod repl;

/// Bit pattern visualizer: lay bits out on a grid and read them back as numbers
#[derive(Parser)]
#[command(name = "bitgrid", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List supported bit widths and their row-width choices
    Widths,
    /// List legal bits-per-row values for a bit width
    Divisors {
        /// Bit width (8, 16, 32, 64 or 128)
        #[arg(long, default_value = "16")]
        bits: BitWidth,
    },
    /// Print the grid and the binary, decimal and hex readings of a pattern
    Show {
        #[command(flatten)]
        view: ViewArgs,
        /// Canonical bit indices to set (e.g. "0", "0-7", "0,3,5-7")
        #[arg(long)]
        set: Option<String>,
        /// Value to load (0x.., 0b.., 0o.. or decimal)
        #[arg(long, conflicts_with = "set")]
        value: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
    /// Interactive session reading commands from stdin
    Repl {
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Args)]
struct ViewArgs {
    /// TOML view description; command-line flags override its values
    #[arg(long)]
    config: Option<String>,
    /// Bit width (8, 16, 32, 64 or 128)
    #[arg(short, long)]
    bits: Option<BitWidth>,
    /// Bits per row (defaults to the whole width on one row)
    #[arg(short = 'r', long)]
    per_row: Option<usize>,
    /// Endianness: big or little
    #[arg(short, long)]
    endian: Option<Endianness>,
    /// Growth direction: row or column
    #[arg(short, long)]
    growth: Option<GrowthDirection>,
    /// Hide bit indices above cells
    #[arg(long)]
    no_indices: bool,
    /// Hide numerals inside cells
    #[arg(long)]
    no_numerals: bool,
}

#[derive(Serialize)]
struct ShowOutput {
    config: ViewConfig,
    grid: Grid,
    values: Interpretation,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Widths => cmd_widths(),
        Command::Divisors { bits } => cmd_divisors(bits),
        Command::Show {
            view,
            set,
            value,
            json,
            pretty,
        } => cmd_show(&view, set.as_deref(), value.as_deref(), json, pretty),
        Command::Repl { view } => cmd_repl(&view),
    }
}

/// Build a session from an optional TOML file plus command-line overrides.
fn build_display(args: &ViewArgs) -> Result<BitDisplay> {
    let (mut config, mut options) = match &args.config {
        Some(path) => {
            let toml_str =
                std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
            ViewConfig::from_toml(&toml_str).with_context(|| format!("parsing view from {}", path))?
        }
        None => (ViewConfig::default(), DisplayOptions::default()),
    };

    if let Some(bits) = args.bits {
        config = config.with_bit_width(bits);
    }
    if let Some(per_row) = args.per_row {
        config = config.with_bits_per_row(per_row)?;
    }
    if let Some(endian) = args.endian {
        config = config.with_endianness(endian);
    }
    if let Some(growth) = args.growth {
        config = config.with_growth(growth);
    }
    options.show_bit_indices &= !args.no_indices;
    options.show_numerals &= !args.no_numerals;

    tracing::debug!(?config, ?options, "view configured");
    Ok(BitDisplay::from_config(config, options))
}

/// Parse an index specification like "0", "0-9", "0,3,5", "0-4,7,10-12".
fn parse_ids(spec: &str, max_id: usize) -> Result<Vec<usize>> {
    let mut ids = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if let Some((start, end)) = part.split_once('-') {
            let start: usize = start.trim().parse().context("invalid index range start")?;
            let end: usize = end.trim().parse().context("invalid index range end")?;
            anyhow::ensure!(start <= end, "index range {}-{} is reversed", start, end);
            anyhow::ensure!(
                end < max_id,
                "index {} exceeds max {} for this width",
                end,
                max_id - 1
            );
            ids.extend(start..=end);
        } else {
            let id: usize = part.parse().context("invalid index")?;
            anyhow::ensure!(
                id < max_id,
                "index {} exceeds max {} for this width",
                id,
                max_id - 1
            );
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Table of supported widths and their legal row widths.
fn widths_table() -> String {
    let mut table = String::from(" Bits  Bits per row\n");
    table.push_str(&"-".repeat(40));
    table.push('\n');
    for width in BitWidth::ALL {
        let choices: Vec<String> = bitgrid::layout::divisors(width.bits())
            .iter()
            .map(|d| d.to_string())
            .collect();
        table.push_str(&format!("{:>5}  {}\n", width.bits(), choices.join(", ")));
    }
    table
}

fn cmd_widths() -> Result<()> {
    print!("{}", widths_table());
    Ok(())
}

fn cmd_divisors(bits: BitWidth) -> Result<()> {
    for d in bitgrid::layout::divisors(bits.bits()) {
        println!("{}", d);
    }
    Ok(())
}

fn cmd_show(
    view: &ViewArgs,
    set: Option<&str>,
    value: Option<&str>,
    json: bool,
    pretty: bool,
) -> Result<()> {
    let mut display = build_display(view)?;

    if let Some(spec) = set {
        // Repeated indices toggle back, so set rather than flip.
        for id in parse_ids(spec, display.config().bit_count())? {
            if display.store().get(id) == 0 {
                display.toggle_index(id)?;
            }
        }
    }
    if let Some(literal) = value {
        let parsed = parse_literal(literal)?;
        display
            .load_value(&parsed)
            .with_context(|| format!("loading {}", literal))?;
    }

    if json {
        let output = ShowOutput {
            config: *display.config(),
            grid: display.grid(),
            values: display.interpretation(),
        };
        let text = if pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        println!("{}", text);
    } else {
        print!("{}", render_text::render_grid(&display.grid()));
        println!();
        print!("{}", render_text::render_values(&display.interpretation()));
    }
    Ok(())
}

fn cmd_repl(view: &ViewArgs) -> Result<()> {
    let mut display = build_display(view)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    repl::run(&mut display, stdin.lock(), &mut stdout)
}
