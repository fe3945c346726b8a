use std::collections::HashSet;

use tracing::debug;

/// Binary feature vector in the model's training column order
///
/// Entry `i` is `1.0` when `order[i]` was submitted. Submitted symptoms the
/// model does not know are dropped.
pub fn vectorize_symptoms<S: AsRef<str>>(symptoms: &[S], order: &[String]) -> Vec<f64> {
    let selected: HashSet<&str> = symptoms.iter().map(|s| s.as_ref()).collect();

    let vector: Vec<f64> = order
        .iter()
        .map(|name| if selected.contains(name.as_str()) { 1.0 } else { 0.0 })
        .collect();

    let matched = vector.iter().filter(|v| **v > 0.0).count();
    if matched < selected.len() {
        let known: HashSet<&str> = order.iter().map(|s| s.as_str()).collect();
        let unknown: Vec<&str> = selected
            .iter()
            .copied()
            .filter(|s| !known.contains(s))
            .collect();
        debug!("Ignoring {} unknown symptoms: {:?}", unknown.len(), unknown);
    }

    vector
}
