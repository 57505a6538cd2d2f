//! Plain-text rendering of a grid and its numeric readings.

use bitgrid::{Grid, GridCell, Interpretation};

const SET_FILL: char = '#';
const CLEAR_FILL: char = ' ';

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Center `text` in `width` columns, padding with `fill`.
fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len);
    let left = pad / 2;
    let right = pad - left;
    let mut s = String::with_capacity(width);
    s.extend(std::iter::repeat(fill).take(left));
    s.push_str(text);
    s.extend(std::iter::repeat(fill).take(right));
    s
}

/// Width of the inside of a cell: room for the widest numeral plus one pad each side.
fn inner_width(grid: &Grid) -> usize {
    digits(grid.cells.len()) + 2
}

fn render_cell(cell: &GridCell, inner: usize) -> String {
    let fill = if cell.bit != 0 { SET_FILL } else { CLEAR_FILL };
    let text = cell.numeral.map(|n| n.to_string()).unwrap_or_default();
    format!("[{}]", center(&text, inner, fill))
}

/// Render the grid, one label line (when labels are on) above each cell line.
///
/// Set bits are drawn with `#` padding, clear bits with spaces.
pub fn render_grid(grid: &Grid) -> String {
    let inner = inner_width(grid);
    let cell_width = inner + 2;
    let mut out = String::new();
    for row in grid.iter_rows() {
        if row.iter().any(|c| c.label.is_some()) {
            let labels: Vec<String> = row
                .iter()
                .map(|c| center(&c.label.map(|l| l.to_string()).unwrap_or_default(), cell_width, ' '))
                .collect();
            out.push_str(labels.join(" ").trim_end());
            out.push('\n');
        }
        let cells: Vec<String> = row.iter().map(|c| render_cell(c, inner)).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// The Binary / Decimal / Hexadecimal lines.
pub fn render_values(values: &Interpretation) -> String {
    format!(
        "Binary: {}\nDecimal: {}\nHexadecimal: {}\n",
        values.binary,
        values.decimal,
        values.hex_prefixed()
    )
}
