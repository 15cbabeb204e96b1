// ============================================================
// 2D Projection (PCA via power iteration)
// ============================================================
// Projects high-dimensional embedding rows onto their two
// principal axes so neighbouring vectors land near each other
// on the plot.
//
// The covariance matrix is never materialised: one power
// iteration step computes (Xᵀ X) v as a sum of row-scaled rows,
// which is O(n·d) per iteration instead of O(d²) memory. The
// second component comes from deflating the first out of the
// data and iterating again.
//
// The starting vector is fixed, so the projection is fully
// deterministic: the same embedding table always produces the
// same picture.

const POWER_ITERATIONS: usize = 100;
const EPS: f32 = 1e-9;

/// Project each row onto the two principal axes of the row set.
/// Rows must all share one dimension. Returns one (x, y) per row.
pub fn project_2d(rows: &[Vec<f32>]) -> Vec<(f32, f32)> {
    if rows.is_empty() {
        return Vec::new();
    }
    let dim = rows[0].len();
    if dim == 0 {
        return vec![(0.0, 0.0); rows.len()];
    }

    // ── Centre the data ───────────────────────────────────────────────────────
    let mut mean = vec![0.0f32; dim];
    for row in rows {
        for (m, v) in mean.iter_mut().zip(row) {
            *m += v;
        }
    }
    for m in mean.iter_mut() {
        *m /= rows.len() as f32;
    }

    let centered: Vec<Vec<f32>> = rows
        .iter()
        .map(|row| row.iter().zip(&mean).map(|(v, m)| v - m).collect())
        .collect();

    // ── First principal axis ──────────────────────────────────────────────────
    let first = principal_component(&centered, dim);

    // ── Deflate and find the second ───────────────────────────────────────────
    let deflated: Vec<Vec<f32>> = centered
        .iter()
        .map(|row| {
            let along = dot(row, &first);
            row.iter()
                .zip(&first)
                .map(|(v, f)| v - along * f)
                .collect()
        })
        .collect();
    let second = principal_component(&deflated, dim);

    // y comes from the deflated rows: when the data is effectively
    // one-dimensional the power iteration returns its start vector,
    // and projecting the deflated (near-zero) rows keeps y at 0
    // instead of leaking first-axis spread into it.
    centered
        .iter()
        .zip(&deflated)
        .map(|(c, d)| (dot(c, &first), dot(d, &second)))
        .collect()
}

/// Dominant eigenvector of XᵀX by power iteration, unit length.
/// Data with no variance left returns the (arbitrary) start
/// vector; every projection onto it is then 0.
fn principal_component(rows: &[Vec<f32>], dim: usize) -> Vec<f32> {
    let mut v = vec![1.0 / (dim as f32).sqrt(); dim];

    for _ in 0..POWER_ITERATIONS {
        // w = (Xᵀ X) v, accumulated row by row
        let mut w = vec![0.0f32; dim];
        for row in rows {
            let coeff = dot(row, &v);
            for (wi, ri) in w.iter_mut().zip(row) {
                *wi += coeff * ri;
            }
        }

        let len = norm(&w);
        if len < EPS {
            return v;
        }
        for (vi, wi) in v.iter_mut().zip(&w) {
            *vi = wi / len;
        }
    }

    v
}

pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn norm(a: &[f32]) -> f32 {
    dot(a, a).sqrt()
}
