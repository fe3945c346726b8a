/// One ranked class with its probability expressed in percent
#[derive(Debug, Clone, PartialEq)]
pub struct RankedClass {
    pub label: String,
    pub probability: f64,
}

/// Top `top_k` classes by descending probability
///
/// Equal probabilities are ordered by descending class index.
pub fn rank(probs: &[f64], classes: &[String], top_k: usize) -> Vec<RankedClass> {
    let mut indices: Vec<usize> = (0..probs.len().min(classes.len())).collect();
    indices.sort_by(|&a, &b| probs[b].total_cmp(&probs[a]).then(b.cmp(&a)));

    indices
        .into_iter()
        .take(top_k)
        .map(|idx| RankedClass {
            label: classes[idx].clone(),
            probability: probs[idx] * 100.0,
        })
        .collect()
}
