use gobinsize_core::buildinfo::parse_version_listing;
use gobinsize_core::nm::parse_symbol_listing;

use crate::render::{package_table, resolve_name_width, symbol_table};

#[test]
fn name_width_is_clamped_to_a_sane_range() {
    assert_eq!(resolve_name_width(Some(10)), 50);
    assert_eq!(resolve_name_width(Some(80)), 80);
    assert_eq!(resolve_name_width(Some(9999)), 256);
}

#[test]
fn symbol_table_lays_out_summary_header_and_rows() {
    let table = parse_symbol_listing("10a0 24 T main.main\n", "");
    let out = symbol_table(&table, "app", 100, 50);
    let lines = out.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "parse binary file \"app\" results:");
    similar_asserts::assert_eq!(
        lines[2],
        "total size: 24 bytes,  total rows: 1,  show top 1 rows:"
    );

    let header = lines[4];
    assert!(header.starts_with("Symbol"));
    assert!(header.contains("Address"));
    assert!(header.contains("Percentage(size)"));
    // Separator rules are four columns shorter than the header.
    assert_eq!(lines[3].len(), header.len() - 4);
    assert_eq!(lines[3], lines[5]);
    assert_eq!(lines[3], lines[7]);

    let row = lines[6];
    assert!(row.starts_with("main.main"));
    // Name column is the requested width plus the column gap.
    assert_eq!(&row[54..58], "10a0");
    assert!(row.trim_end().ends_with("100.000%"));
}

#[test]
fn symbol_table_without_rows_has_no_trailing_rule() {
    let table = parse_symbol_listing("", "");
    let out = symbol_table(&table, "app", 100, 50);
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 6);
    assert!(out.contains("total size: 0 bytes,  total rows: 0,  show top 0 rows:"));
}

#[test]
fn symbol_table_respects_top_n() {
    let table = parse_symbol_listing("1000 10 T foo.Bar\n2000 5 T baz.Qux\n", "");
    let out = symbol_table(&table, "app", 1, 50);
    assert!(out.contains("total rows: 2,  show top 1 rows:"));
    assert!(out.contains("foo.Bar"));
    assert!(!out.contains("baz.Qux"));
}

#[test]
fn long_symbols_are_shortened_with_a_gap_marker() {
    let long = "a".repeat(40) + &"b".repeat(40);
    let listing = format!("1000 10 T {long}\n");
    let table = parse_symbol_listing(&listing, "");
    let out = symbol_table(&table, "app", 100, 50);
    // Cap is the 54-column name field: 20 head chars, the marker, 25 tail chars.
    let shortened = format!("{} ... {}", "a".repeat(20), "b".repeat(25));
    assert!(out.contains(&shortened));
    assert!(!out.contains(&long));
}

#[test]
fn package_table_reports_sum_dep_and_mod_sizes() {
    let raw = "mod example.com/app (devel)\ndep github.com/x/y v1.2.3 h1:a=\n";
    let (mut packages, _) = parse_version_listing(raw, "");
    packages[0].size = 10;
    packages[0].matched = 2;
    packages[1].size = 5;
    packages[1].matched = 1;

    let out = package_table(&packages, 20, 100, 50);
    assert!(out.contains("parse go mod package results:"));
    assert!(out.contains(
        "sum size: 15 bytes, dep size: 5 bytes, mod size: 10 bytes, percentage(sum/total): 75.00%,"
    ));
    assert!(out.contains("total rows: 2, show top 2 rows:"));

    let root_row = out
        .lines()
        .find(|l| l.contains("(mod)"))
        .expect("root row");
    assert!(root_row.starts_with("example.com/app (mod)"));
    assert!(root_row.trim_end().ends_with("66.67%"));

    let dep_row = out
        .lines()
        .find(|l| l.starts_with("github.com/x/y"))
        .expect("dep row");
    assert!(dep_row.trim_end().ends_with("33.33%"));
}

#[test]
fn package_table_with_zero_sum_renders_zero_percentages() {
    let raw = "dep github.com/x/y v1.2.3 h1:a=\n";
    let (packages, _) = parse_version_listing(raw, "");
    let out = package_table(&packages, 0, 100, 50);
    assert!(out.contains("percentage(sum/total): 0.00%,"));
    assert!(out.contains("0.00%"));
}
