use crate::types::{Frequency, Label, Weight};

/// Converts ranked counts into renderer weights, dropping zero counts.
pub fn to_weights<K: ToString>(ranked: &[(K, Frequency)]) -> Vec<(Label, Weight)> {
    ranked
        .iter()
        .filter(|(_, frequency)| *frequency > 0)
        .map(|(label, frequency)| (label.to_string(), *frequency as Weight))
        .collect()
}
