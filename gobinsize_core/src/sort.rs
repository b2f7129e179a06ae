use std::cmp::Ordering;

use crate::buildinfo::PackageRecord;
use crate::nm::SymbolRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolSortKey {
    #[default]
    Size,
    Address,
    Symbol,
}

impl SymbolSortKey {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "address" | "addr" => Self::Address,
            "symbol" | "sym" => Self::Symbol,
            _ => Self::Size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageSortKey {
    #[default]
    Size,
    Name,
}

pub fn sort_symbols(symbols: &mut [SymbolRecord], key: SymbolSortKey, order: SortOrder) {
    symbols.sort_by(|a, b| {
        let ordering = match key {
            SymbolSortKey::Size => a.size.cmp(&b.size),
            SymbolSortKey::Symbol => a.symbol.cmp(&b.symbol),
            SymbolSortKey::Address => address_value(&a.address).cmp(&address_value(&b.address)),
        };
        oriented(ordering, order)
    });
}

pub fn sort_packages(packages: &mut [PackageRecord], key: PackageSortKey, order: SortOrder) {
    packages.sort_by(|a, b| {
        let ordering = match key {
            PackageSortKey::Size => a.size.cmp(&b.size),
            PackageSortKey::Name => a.name.cmp(&b.name),
        };
        oriented(ordering, order)
    });
}

fn oriented(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn address_value(address: &str) -> i64 {
    i64::from_str_radix(address, 16).unwrap_or(0)
}
