use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolRecord {
    pub symbol: String,
    pub address: String,
    pub kind: String,
    pub size: i64,
    pub size_pct: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    pub symbols: Vec<SymbolRecord>,
    pub total_size: i64,
}

pub fn parse_symbol_listing(raw: &str, grep: &str) -> SymbolTable {
    let mut symbols: Vec<SymbolRecord> = vec![];
    let mut total_size: i64 = 0;

    for line in raw.lines() {
        let fields = line.split_whitespace().collect::<Vec<_>>();
        if fields.len() < 4 {
            continue;
        }
        // Every well-formed line counts toward the total, even ones the
        // grep filter drops from the report.
        let size = fields[1].parse::<i64>().unwrap_or(0);
        total_size += size;
        if !grep.is_empty() && !line.contains(grep) {
            continue;
        }
        symbols.push(SymbolRecord {
            symbol: fields[3..].concat(),
            address: fields[0].to_string(),
            kind: fields[2].to_string(),
            size,
            size_pct: 0.0,
        });
    }

    for record in symbols.iter_mut() {
        record.size_pct = crate::pct_of(record.size, total_size);
    }

    SymbolTable {
        symbols,
        total_size,
    }
}
