//! Small helpers: index combinations and float sorting.

use std::cmp::Ordering;

/// k-combinations of `0..n` in lexicographic order.
pub(crate) fn index_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 || k > n {
        return Vec::new();
    }
    let mut idxs: Vec<usize> = (0..k).collect();
    let mut out = Vec::new();
    loop {
        out.push(idxs.clone());
        // Rightmost position that can still advance.
        let Some(i) = (0..k).rev().find(|&i| idxs[i] != i + n - k) else {
            break;
        };
        idxs[i] += 1;
        for j in i + 1..k {
            idxs[j] = idxs[j - 1] + 1;
        }
    }
    out
}

/// Total order on finite floats; NaN compares equal so sorting stays stable.
#[inline]
pub(crate) fn cmp_f64(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Sum of the `k` smallest and `k` largest values.
pub(crate) fn extreme_sums(values: &[f64], k: usize) -> (f64, f64) {
    let mut sorted = values.to_vec();
    sorted.sort_by(cmp_f64);
    let k = k.min(sorted.len());
    let low = sorted[..k].iter().sum();
    let high = sorted[sorted.len() - k..].iter().sum();
    (low, high)
}
