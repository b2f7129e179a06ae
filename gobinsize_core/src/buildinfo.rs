use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub is_root: bool,
    pub size: i64,
    pub matched: i64,
    pub size_pct: f64,
}

impl PackageRecord {
    fn dependency(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            is_root: false,
            size: 0,
            matched: 0,
            size_pct: 0.0,
        }
    }

    fn root_module(name: &str) -> Self {
        Self {
            name: format!("{name}/"),
            version: String::new(),
            is_root: true,
            size: 0,
            matched: 0,
            size_pct: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubPackageIndex {
    by_ancestor: IndexMap<String, Vec<String>>,
}

impl SubPackageIndex {
    pub fn extend_with(&mut self, current: &str, previously_seen: &[String]) {
        for name in previously_seen {
            if name.len() > current.len() {
                if name.contains(current) {
                    self.by_ancestor
                        .entry(current.to_string())
                        .or_default()
                        .push(name.clone());
                }
            } else if current.contains(name.as_str()) {
                self.by_ancestor
                    .entry(name.clone())
                    .or_default()
                    .push(current.to_string());
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_ancestor
            .iter()
            .map(|(ancestor, descendants)| (ancestor.as_str(), descendants.as_slice()))
    }

    pub fn descendants(&self, ancestor: &str) -> Option<&[String]> {
        self.by_ancestor.get(ancestor).map(|v| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.by_ancestor.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_ancestor.len()
    }
}

pub fn parse_version_listing(raw: &str, grep: &str) -> (Vec<PackageRecord>, SubPackageIndex) {
    let mut packages: Vec<PackageRecord> = vec![];
    let mut seen_dependency_names: Vec<String> = vec![];
    let mut index = SubPackageIndex::default();

    for line in raw.lines() {
        if !grep.is_empty() && !line.contains(grep) {
            continue;
        }
        let fields = line.split_whitespace().collect::<Vec<_>>();
        match fields.as_slice() {
            ["dep", name, version, _] => {
                packages.push(PackageRecord::dependency(name, version));
                // Each dependency is compared against names seen before it,
                // never against names added after it in this pass.
                index.extend_with(name, &seen_dependency_names);
                seen_dependency_names.push((*name).to_string());
            }
            ["mod", name, _, ..] => {
                packages.push(PackageRecord::root_module(name));
            }
            ["dep", name, "(devel)"] => {
                packages.push(PackageRecord::root_module(name));
            }
            _ => {}
        }
    }

    (packages, index)
}
