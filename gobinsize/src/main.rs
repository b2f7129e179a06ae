mod args;
mod process;
mod render;
mod toolchain;

#[cfg(test)]
mod args_test;
#[cfg(test)]
mod render_test;
#[cfg(test)]
mod toolchain_test;

use std::time::Duration;

use clap::Parser;
use gobinsize_core::attribution::{attribute_sizes, subtract_sub_packages};
use gobinsize_core::buildinfo::parse_version_listing;
use gobinsize_core::nm::parse_symbol_listing;
use gobinsize_core::sort::{
    PackageSortKey, SortOrder, SymbolSortKey, sort_packages, sort_symbols,
};

fn main() {
    let cli = args::Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &args::Cli) -> i32 {
    let name_width = render::resolve_name_width(cli.max_width);
    if cli.verbose {
        eprintln!(
            "gobinsize: core={} binary={} sort={} asc={} width={} tty={}",
            gobinsize_core::core_version(),
            cli.binary_file.display(),
            cli.sort,
            cli.asc,
            name_width,
            render::is_output_terminal(),
        );
    }

    let timeout = Duration::from_secs(cli.timeout_secs);
    let listings = match toolchain::collect_listings(&cli.binary_file, timeout) {
        Ok(listings) => listings,
        Err(err) => {
            eprintln!("Error: {err}");
            return 1;
        }
    };

    let mut table = parse_symbol_listing(&listings.nm, &cli.grep);
    let (mut packages, index) = parse_version_listing(&listings.buildinfo, &cli.grep);
    attribute_sizes(&mut packages, &table);
    subtract_sub_packages(&mut packages, &index);

    let order = if cli.asc { SortOrder::Asc } else { SortOrder::Desc };
    sort_symbols(&mut table.symbols, SymbolSortKey::parse(&cli.sort), order);
    sort_packages(&mut packages, PackageSortKey::Size, SortOrder::Desc);

    let binary = cli.binary_file.to_string_lossy();
    print!(
        "{}",
        render::symbol_table(&table, &binary, cli.top_n, name_width)
    );
    println!();
    print!(
        "{}",
        render::package_table(&packages, table.total_size, cli.top_n, name_width)
    );
    0
}
