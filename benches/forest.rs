//! 随机森林推理基准测试

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use symptomatic::prediction::{DecisionTree, RandomForest, rank, vectorize_symptoms};

const N_FEATURES: usize = 130;
const N_CLASSES: usize = 40;

/// 满二叉树，第 i 个内部节点按 (i * 7 + seed) % N_FEATURES 分裂
fn complete_tree(depth: u32, seed: usize) -> DecisionTree {
    let n_nodes = (1usize << (depth + 1)) - 1;
    let n_internal = (1usize << depth) - 1;

    let mut tree = DecisionTree {
        children_left: Vec::with_capacity(n_nodes),
        children_right: Vec::with_capacity(n_nodes),
        feature: Vec::with_capacity(n_nodes),
        threshold: Vec::with_capacity(n_nodes),
        value: Vec::with_capacity(n_nodes),
    };

    for i in 0..n_nodes {
        if i < n_internal {
            tree.children_left.push((2 * i + 1) as i64);
            tree.children_right.push((2 * i + 2) as i64);
            tree.feature.push(((i * 7 + seed) % N_FEATURES) as i64);
            tree.threshold.push(0.5);
        } else {
            tree.children_left.push(-1);
            tree.children_right.push(-1);
            tree.feature.push(-2);
            tree.threshold.push(-2.0);
        }
        let mut weights = vec![0.0; N_CLASSES];
        weights[(i + seed) % N_CLASSES] = 3.0;
        weights[(i * 3 + seed) % N_CLASSES] += 1.0;
        tree.value.push(weights);
    }
    tree
}

fn forest(n_trees: usize) -> RandomForest {
    RandomForest {
        n_features: N_FEATURES,
        n_classes: N_CLASSES,
        trees: (0..n_trees).map(|seed| complete_tree(10, seed)).collect(),
    }
}

fn symptom_order() -> Vec<String> {
    (0..N_FEATURES).map(|i| format!("symptom_{}", i)).collect()
}

fn bench_predict_proba(c: &mut Criterion) {
    let order = symptom_order();
    let x = vectorize_symptoms(&["symptom_3", "symptom_17", "symptom_64", "symptom_99"], &order);

    let mut group = c.benchmark_group("forest/predict_proba");
    for n_trees in [10, 100, 300] {
        let model = forest(n_trees);
        assert!(model.validate().is_ok());
        group.throughput(Throughput::Elements(n_trees as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_trees), &model, |b, model| {
            b.iter(|| model.predict_proba(black_box(&x)).unwrap());
        });
    }
    group.finish();
}

fn bench_vectorize_and_rank(c: &mut Criterion) {
    let order = symptom_order();
    let classes: Vec<String> = (0..N_CLASSES).map(|i| format!("disease_{}", i)).collect();
    let symptoms: Vec<String> = (0..12).map(|i| format!("symptom_{}", i * 9)).collect();
    let probs: Vec<f64> = (0..N_CLASSES).map(|i| ((i * 37) % 101) as f64 / 101.0).collect();

    c.bench_function("vectorize/12_of_130", |b| {
        b.iter(|| vectorize_symptoms(black_box(symptoms.as_slice()), &order));
    });

    c.bench_function("rank/top5_of_40", |b| {
        b.iter(|| rank(black_box(&probs), &classes, 5));
    });
}

criterion_group!(benches, bench_predict_proba, bench_vectorize_and_rank);
criterion_main!(benches);
