//! Line-oriented interactive session.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use bitgrid::numeric::parse_literal;
use bitgrid::{BitDisplay, BitWidth, Endianness, GrowthDirection};

use crate::render_text;

const HELP: &str = "\
commands:
  toggle ROW COL      flip the bit shown at (ROW, COL)
  flip INDEX          flip the bit at a canonical index
  bits N              set the bit width (8, 16, 32, 64, 128); clears the pattern
  per-row N           set bits per row (must divide the width)
  endian big|little   set endianness
  growth row|column   set growth direction
  indices on|off      show or hide bit indices
  numerals on|off     show or hide in-cell numerals
  value LITERAL       load a value (0x.., 0b.., 0o.. or decimal)
  clear               zero every bit
  show                print the grid again
  help                print this message
  quit                leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Toggle(usize, usize),
    Flip(usize),
    Bits(BitWidth),
    PerRow(usize),
    Endian(Endianness),
    Growth(GrowthDirection),
    Indices(bool),
    Numerals(bool),
    Value(String),
    Clear,
    Show,
    Help,
    Quit,
}

fn parse_switch(arg: &str) -> Result<bool> {
    match arg {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => bail!("expected on or off, got '{}'", other),
    }
}

fn parse_usize(arg: &str, what: &str) -> Result<usize> {
    arg.parse().with_context(|| format!("invalid {} '{}'", what, arg))
}

fn parse_command(line: &str) -> Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };
    let command = match (name, args) {
        ("toggle" | "t", [row, col]) => Command::Toggle(
            parse_usize(row, "row")?,
            parse_usize(col, "column")?,
        ),
        ("flip" | "f", [index]) => Command::Flip(parse_usize(index, "index")?),
        ("bits", [width]) => Command::Bits(width.parse()?),
        ("per-row" | "row", [n]) => Command::PerRow(parse_usize(n, "bits per row")?),
        ("endian", [e]) => Command::Endian(e.parse()?),
        ("growth", [g]) => Command::Growth(g.parse()?),
        ("indices", [switch]) => Command::Indices(parse_switch(switch)?),
        ("numerals", [switch]) => Command::Numerals(parse_switch(switch)?),
        ("value", [literal]) => Command::Value(literal.to_string()),
        ("clear", []) => Command::Clear,
        ("show", []) => Command::Show,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        (
            "toggle" | "t" | "flip" | "f" | "bits" | "per-row" | "row" | "endian" | "growth"
            | "indices" | "numerals" | "value" | "clear" | "show" | "help" | "?" | "quit"
            | "exit" | "q",
            _,
        ) => bail!("wrong number of arguments for '{}', try 'help'", name),
        (other, _) => bail!("unknown command '{}', try 'help'", other),
    };
    Ok(Some(command))
}

fn print_state<W: Write>(display: &BitDisplay, out: &mut W) -> Result<()> {
    write!(out, "{}", render_text::render_grid(&display.grid()))?;
    writeln!(out)?;
    write!(out, "{}", render_text::render_values(&display.interpretation()))?;
    Ok(())
}

/// Apply one command. Returns `false` when the session should end.
fn apply<W: Write>(display: &mut BitDisplay, command: Command, out: &mut W) -> Result<bool> {
    match command {
        Command::Toggle(row, col) => {
            display.toggle_cell(row, col)?;
        }
        Command::Flip(index) => {
            display.toggle_index(index)?;
        }
        Command::Bits(width) => display.set_bit_width(width),
        Command::PerRow(n) => display.set_bits_per_row(n)?,
        Command::Endian(e) => display.set_endianness(e),
        Command::Growth(g) => display.set_growth_direction(g),
        Command::Indices(on) => display.set_show_bit_indices(on),
        Command::Numerals(on) => display.set_show_numerals(on),
        Command::Value(literal) => display.load_value(&parse_literal(&literal)?)?,
        Command::Clear => display.clear(),
        Command::Show => {}
        Command::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    }
    print_state(display, out)?;
    Ok(true)
}

/// Run the session until `quit` or end of input.
///
/// Bad commands are reported on `out` and leave the state unchanged.
pub fn run<R: BufRead, W: Write>(display: &mut BitDisplay, input: R, out: &mut W) -> Result<()> {
    print_state(display, out)?;
    for line in input.lines() {
        let line = line.context("reading command")?;
        let result = parse_command(&line).and_then(|cmd| match cmd {
            Some(cmd) => apply(display, cmd, out),
            None => Ok(true),
        });
        match result {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::debug!(line = %line, error = %e, "rejected command");
                writeln!(out, "error: {:#}", e)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (BitDisplay, String) {
        let mut display = BitDisplay::new();
        let mut out = Vec::new();
        run(&mut display, script.as_bytes(), &mut out).unwrap();
        (display, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("toggle 1 2").unwrap(), Some(Command::Toggle(1, 2)));
        assert_eq!(parse_command("bits 32").unwrap(), Some(Command::Bits(BitWidth::W32)));
        assert_eq!(
            parse_command("growth column").unwrap(),
            Some(Command::Growth(GrowthDirection::Column))
        );
        assert_eq!(parse_command("numerals off").unwrap(), Some(Command::Numerals(false)));
        assert_eq!(parse_command("   ").unwrap(), None);
        assert!(parse_command("bits 24").is_err());
        assert!(parse_command("toggle 1").is_err());
        assert!(parse_command("clear now").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn argumentless_commands_reject_extra_words() {
        for line in ["clear now", "show me", "help toggle", "quit now", "toggle 1 2 3", "bits"] {
            let err = parse_command(line).unwrap_err();
            assert!(
                err.to_string().contains("wrong number of arguments"),
                "{line}: {err}"
            );
        }
    }

    #[test]
    fn quit_with_argument_does_not_end_session() {
        let (display, out) = run_script("bits 8\nquit now\nflip 0\n");
        assert!(out.contains("error: wrong number of arguments for 'quit'"));
        assert_eq!(display.store().get(0), 1);
    }

    #[test]
    fn toggles_and_reports_values() {
        let (display, out) = run_script("bits 8\ntoggle 0 0\nquit\ntoggle 0 1\n");
        assert_eq!(display.interpretation().hex, "80");
        assert!(out.contains("Decimal: 128"));
        assert!(out.contains("Hexadecimal: 0x80"));
    }

    #[test]
    fn errors_leave_state_untouched() {
        let (display, out) = run_script("per-row 4\ntoggle 9 9\nper-row 5\nflip 3\n");
        assert!(out.contains("error: cell (9, 9) is outside the 4x4 grid"));
        assert!(out.contains("error: 5 bits per row does not divide a 16-bit pattern"));
        assert_eq!(display.config().bits_per_row(), 4);
        assert_eq!(display.store().count_ones(), 1);
    }

    #[test]
    fn little_endian_value_load() {
        let (display, out) = run_script("bits 8\nendian little\nvalue 0x3\n");
        assert_eq!(display.store().get(0), 1);
        assert_eq!(display.store().get(1), 1);
        assert!(out.contains("Binary: 00000011"));
    }
}
