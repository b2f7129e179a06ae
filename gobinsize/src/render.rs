use std::io::IsTerminal;

use gobinsize_core::buildinfo::PackageRecord;
use gobinsize_core::nm::SymbolTable;
use terminal_size::{Width, terminal_size_of};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 4;
const MIN_NAME_WIDTH: usize = 50;
const MAX_NAME_WIDTH: usize = 256;
const DEFAULT_NAME_WIDTH: usize = 60;
// Width of everything to the right of the name column in the symbol table.
const FIXED_COLUMNS_WIDTH: usize = 8 + 4 + 11 + 15 + 4 * COLUMN_GAP;

pub fn is_output_terminal() -> bool {
    std::io::stdout().is_terminal() || std::io::stderr().is_terminal()
}

fn detect_terminal_cols() -> Option<usize> {
    let stdout = std::io::stdout();
    stdout
        .is_terminal()
        .then(|| terminal_size_of(stdout).map(|(Width(w), _)| w as usize))
        .flatten()
}

pub fn resolve_name_width(requested: Option<usize>) -> usize {
    requested
        .or_else(|| detect_terminal_cols().map(|cols| cols.saturating_sub(FIXED_COLUMNS_WIDTH)))
        .unwrap_or(DEFAULT_NAME_WIDTH)
        .clamp(MIN_NAME_WIDTH, MAX_NAME_WIDTH)
}

pub fn symbol_table(table: &SymbolTable, binary: &str, top_n: usize, name_width: usize) -> String {
    let widths = [
        name_width + COLUMN_GAP,
        8 + COLUMN_GAP,
        4 + COLUMN_GAP,
        11 + COLUMN_GAP,
        15 + COLUMN_GAP,
    ];
    let header = [
        pad("Symbol", widths[0]),
        pad("Address", widths[1]),
        pad("Type", widths[2]),
        pad("Size(bytes)", widths[3]),
        pad("Percentage(size)", widths[4]),
    ]
    .concat();
    let rule = "-".repeat(header.len().saturating_sub(4));
    let shown = table.symbols.len().min(top_n);

    let mut out = String::new();
    out.push_str(&format!(
        "\nparse binary file \"{binary}\" results:\ntotal size: {} bytes,  total rows: {},  show top {} rows:\n",
        table.total_size,
        table.symbols.len(),
        shown
    ));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for symbol in table.symbols.iter().take(shown) {
        let name = if symbol.symbol.chars().count() >= widths[0] {
            shorten(&symbol.symbol, widths[0])
        } else {
            symbol.symbol.clone()
        };
        out.push_str(
            &[
                pad(&name, widths[0]),
                pad(&symbol.address, widths[1]),
                pad(&symbol.kind, widths[2]),
                pad(&symbol.size.to_string(), widths[3]),
                pad(&format!("{:.3}%", symbol.size_pct), widths[4]),
            ]
            .concat(),
        );
        out.push('\n');
    }
    if shown > 0 {
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

pub fn package_table(
    packages: &[PackageRecord],
    total_size: i64,
    top_n: usize,
    name_width: usize,
) -> String {
    let widths = [
        name_width + COLUMN_GAP,
        11 + COLUMN_GAP,
        11 + COLUMN_GAP,
        15 + COLUMN_GAP,
    ];
    let dep_size: i64 = packages.iter().filter(|p| !p.is_root).map(|p| p.size).sum();
    let mod_size: i64 = packages.iter().filter(|p| p.is_root).map(|p| p.size).sum();
    let sum_size = dep_size + mod_size;

    let header = [
        pad("Package", widths[0]),
        pad("Count Rows", widths[1]),
        pad("Size(bytes)", widths[2]),
        pad("Percentage(size)", widths[3]),
    ]
    .concat();
    let rule = "-".repeat(header.len().saturating_sub(4));
    let shown = packages.len().min(top_n);

    let mut out = String::new();
    out.push_str(&format!(
        "\nparse go mod package results:\nsum size: {sum_size} bytes, dep size: {dep_size} bytes, mod size: {mod_size} bytes, percentage(sum/total): {:.2}%,\ntotal rows: {}, show top {} rows:\n",
        pct(sum_size, total_size),
        packages.len(),
        shown
    ));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for package in packages.iter().take(shown) {
        let mut name = if package.is_root {
            format!("{} (mod)", package.name.trim_end_matches('/'))
        } else {
            package.name.clone()
        };
        if name.chars().count() > widths[0] {
            name = shorten(&name, widths[0]);
        }
        out.push_str(
            &[
                pad(&name, widths[0]),
                pad(&package.matched.to_string(), widths[1]),
                pad(&package.size.to_string(), widths[2]),
                pad(&format!("{:.2}%", pct(package.size, sum_size)), widths[3]),
            ]
            .concat(),
        );
        out.push('\n');
    }
    if shown > 0 {
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

fn pct(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    let mut padded = String::with_capacity(value.len() + fill);
    padded.push_str(value);
    padded.extend(std::iter::repeat(' ').take(fill));
    padded
}

fn shorten(value: &str, cap: usize) -> String {
    let chars = value.chars().collect::<Vec<_>>();
    let head = chars.iter().take(20).collect::<String>();
    let keep = cap.saturating_sub(29).min(chars.len());
    let tail = chars[chars.len() - keep..].iter().collect::<String>();
    format!("{head} ... {tail}")
}
