use crate::buildinfo::{PackageRecord, SubPackageIndex};
use crate::nm::SymbolTable;

pub fn attribute_sizes(packages: &mut [PackageRecord], table: &SymbolTable) {
    for package in packages.iter_mut() {
        if package.is_root {
            // Type-descriptor symbols for root-module types carry the
            // package path behind a "type:.eq." marker.
            let type_eq_marker = format!("type:.eq.{}", package.name);
            for symbol in &table.symbols {
                if symbol.symbol.starts_with(&package.name)
                    || symbol.symbol.contains(&type_eq_marker)
                {
                    package.size += symbol.size;
                    package.matched += 1;
                }
            }
        } else {
            for symbol in &table.symbols {
                if symbol.symbol.contains(&package.name) {
                    package.size += symbol.size;
                    package.matched += 1;
                }
            }
        }
        package.size_pct = crate::pct_of(package.size, table.total_size);
    }
}

pub fn subtract_sub_packages(packages: &mut [PackageRecord], index: &SubPackageIndex) {
    for (ancestor, descendants) in index.iter() {
        let mut ancestor_at: Option<usize> = None;
        let mut nested_size: i64 = 0;
        let mut nested_matched: i64 = 0;

        for (position, package) in packages.iter().enumerate() {
            if package.name == ancestor {
                ancestor_at = Some(position);
            }
            for descendant in descendants {
                if *descendant == package.name {
                    nested_size += package.size;
                    nested_matched += package.matched;
                }
            }
        }

        if let Some(position) = ancestor_at {
            packages[position].size -= nested_size;
            packages[position].matched -= nested_matched;
        }
    }
}
