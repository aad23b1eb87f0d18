use crate::dataset::Dataset;
use crate::error::Result;
use crate::information::entropy::{average_info, average_info_of_column, entropy};
use std::hash::Hash;
use tracing::debug;

/// Entropy reduction achieved by partitioning on one attribute, rounded to
/// 4 decimal places (half away from zero).
///
/// Floating-point cancellation can make a theoretically-zero gain come out
/// as a tiny negative number; it is returned as-is, not clamped.
pub fn information_gain<V: Eq + Hash>(dataset: &Dataset<V>, attribute: usize) -> Result<f64> {
    let avg_info = average_info(dataset, attribute)?;
    Ok(round4(entropy(dataset) - avg_info))
}

/// Rounded information gain for every attribute, plus the index of the best
/// one. Ties resolve to the lowest attribute index.
pub fn select_best_attribute<V: Eq + Hash>(dataset: &Dataset<V>) -> (Vec<f64>, usize) {
    let total_entropy = entropy(dataset);
    let labels = dataset.labels();

    let mut gains = Vec::with_capacity(dataset.n_attributes());
    for (attribute, column) in dataset.attribute_columns() {
        let avg_info = average_info_of_column(labels.view(), column, dataset.n_rows());
        let gain = round4(total_entropy - avg_info);
        debug!(attribute, gain, "computed information gain");
        gains.push(gain);
    }

    // Strict > keeps the lowest index among tied maxima.
    let mut best = 0;
    for (attribute, &gain) in gains.iter().enumerate() {
        if gain > gains[best] {
            best = attribute;
        }
    }
    debug!(best, gain = gains[best], "selected best attribute");

    (gains, best)
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // The classic 14-row play-tennis table: attributes are Outlook,
    // Temperature, Humidity, Wind; the label is whether to play.
    fn play_tennis() -> Dataset<&'static str> {
        Dataset::new(array![
            ["Sunny", "Hot", "High", "Weak", "No"],
            ["Sunny", "Hot", "High", "Strong", "No"],
            ["Overcast", "Hot", "High", "Weak", "Yes"],
            ["Rain", "Mild", "High", "Weak", "Yes"],
            ["Rain", "Cool", "Normal", "Weak", "Yes"],
            ["Rain", "Cool", "Normal", "Strong", "No"],
            ["Overcast", "Cool", "Normal", "Strong", "Yes"],
            ["Sunny", "Mild", "High", "Weak", "No"],
            ["Sunny", "Cool", "Normal", "Weak", "Yes"],
            ["Rain", "Mild", "Normal", "Weak", "Yes"],
            ["Sunny", "Mild", "Normal", "Strong", "Yes"],
            ["Overcast", "Mild", "High", "Strong", "Yes"],
            ["Overcast", "Hot", "Normal", "Weak", "Yes"],
            ["Rain", "Mild", "High", "Strong", "No"],
        ])
        .unwrap()
    }

    #[test]
    fn test_play_tennis_gains() {
        let data = play_tennis();
        let (gains, best) = select_best_attribute(&data);

        assert_eq!(gains, vec![0.2467, 0.0292, 0.1518, 0.0481]);
        assert_eq!(best, 0); // Outlook
    }

    #[test]
    fn test_gain_matches_definition_before_rounding() {
        let data = play_tennis();
        for attr in 0..data.n_attributes() {
            let raw = entropy(&data) - average_info(&data, attr).unwrap();
            assert_eq!(information_gain(&data, attr).unwrap(), round4(raw));
        }
    }

    #[test]
    fn test_best_gain_is_maximum_of_table() {
        let data = play_tennis();
        let (gains, best) = select_best_attribute(&data);
        let max = gains.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(gains[best], max);
    }

    #[test]
    fn test_perfectly_separating_attribute() {
        let data = Dataset::new(array![
            ["a", "x", "Yes"],
            ["a", "y", "Yes"],
            ["b", "x", "No"],
            ["b", "y", "No"],
        ])
        .unwrap();

        assert_eq!(average_info(&data, 0).unwrap(), 0.0);
        assert_eq!(information_gain(&data, 0).unwrap(), 1.0);
        // The second attribute is independent of the labels.
        assert_eq!(information_gain(&data, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_pure_dataset_has_zero_gains() {
        let data = Dataset::new(array![
            ["a", "x", "Yes"],
            ["b", "y", "Yes"],
            ["c", "x", "Yes"],
        ])
        .unwrap();

        let (gains, best) = select_best_attribute(&data);
        assert_eq!(gains, vec![0.0, 0.0]);
        assert_eq!(best, 0);
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        // Both attributes produce identical partitions, so their gains tie.
        let data = Dataset::new(array![
            ["x", "x", "Yes"],
            ["x", "x", "Yes"],
            ["y", "y", "No"],
            ["y", "y", "No"],
        ])
        .unwrap();

        let (gains, best) = select_best_attribute(&data);
        assert_eq!(gains[0], gains[1]);
        assert_eq!(best, 0);
    }

    #[test]
    fn test_integer_valued_dataset() {
        let data = Dataset::new(array![
            [0_u32, 7, 1],
            [0, 8, 1],
            [1, 7, 0],
            [1, 8, 0],
        ])
        .unwrap();

        let (gains, best) = select_best_attribute(&data);
        assert_eq!(best, 0);
        assert_eq!(gains[0], 1.0);
    }

    #[test]
    fn test_information_gain_invalid_attribute() {
        let data = play_tennis();
        assert!(information_gain(&data, 9).is_err());
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.31127812445913283), 0.3113);
        assert_eq!(round4(0.04812703040826949), 0.0481);
        assert_eq!(round4(1.0), 1.0);
        assert_eq!(round4(-0.00004), -0.0); // near-zero negatives survive rounding
    }
}
