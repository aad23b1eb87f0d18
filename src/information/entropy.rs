use crate::dataset::Dataset;
use crate::error::Result;
use ndarray::ArrayView1;
use std::collections::HashMap;
use std::hash::Hash;

/// Shannon entropy of the label column, in bits.
///
/// Returns 0.0 for a pure dataset and `log2(k)` when all `k` distinct labels
/// are equally frequent. Infallible: a `Dataset` always has at least one row.
pub fn entropy<V: Eq + Hash>(dataset: &Dataset<V>) -> f64 {
    entropy_of(dataset.labels().iter(), dataset.n_rows())
}

/// Weighted average entropy after partitioning rows by the values of one
/// attribute column, aka the conditional entropy of the labels given the
/// attribute.
pub fn average_info<V: Eq + Hash>(dataset: &Dataset<V>, attribute: usize) -> Result<f64> {
    let column = dataset.attribute(attribute)?;
    Ok(average_info_of_column(
        dataset.labels(),
        column,
        dataset.n_rows(),
    ))
}

pub(crate) fn average_info_of_column<V: Eq + Hash>(
    labels: ArrayView1<'_, V>,
    column: ArrayView1<'_, V>,
    n_rows: usize,
) -> f64 {
    // Group row indices by attribute value, keeping first-encounter order so
    // the summation order is stable from run to run.
    let mut order: Vec<&V> = Vec::new();
    let mut groups: HashMap<&V, Vec<usize>> = HashMap::new();
    for (row, value) in column.iter().enumerate() {
        groups
            .entry(value)
            .or_insert_with(|| {
                order.push(value);
                Vec::new()
            })
            .push(row);
    }

    let total = n_rows as f64;
    let mut avg_info = 0.0;
    for value in order {
        let rows = &groups[value];
        let weight = rows.len() as f64 / total;
        let local = entropy_of(rows.iter().map(|&r| &labels[r]), rows.len());
        avg_info += weight * local;
    }
    avg_info
}

// Only observed labels are counted, so every probability is > 0 and log2
// stays defined; absent labels contribute 0 by convention.
fn entropy_of<'a, V, I>(labels: I, total: usize) -> f64
where
    V: Eq + Hash + 'a,
    I: Iterator<Item = &'a V>,
{
    let mut counts: HashMap<&V, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}
