pub mod attribution;
pub mod buildinfo;
pub mod nm;
pub mod sort;


pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub(crate) fn pct_of(size: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        size as f64 / total as f64 * 100.0
    }
}
