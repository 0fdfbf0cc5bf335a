use std::sync::OnceLock;

use super::Checked;

static TABLE: OnceLock<Vec<u64>> = OnceLock::new();

fn build() -> Vec<u64> {
    let mut table = vec![1];
    let mut acc = Checked::new(1);
    let mut k = 0;

    loop {
        k += 1;
        if acc.mul(k) {
            return table;
        }
        table.push(acc.get());
    }
}

/// Exact `n!`, or 0 when `n!` does not fit in `u64` (n > 20).
///
/// The table is built on first use and read-only afterwards.
pub fn factorial(n: u64) -> u64 {
    let table = TABLE.get_or_init(build);

    usize::try_from(n)
        .ok()
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or(0)
}
