use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nn_functions::functions::{
    activation::{get_activation, ActivationType},
    cost::{get_cost_function, CostType},
};

fn forward_backward(ty: ActivationType, z: &[f64]) -> f64 {
    let f = get_activation(ty);
    let mut sum = 0.0;
    for i in 0..z.len() {
        sum += f.activate(z, i) + f.derivative(z, i);
    }
    sum
}

fn cost_and_gradient(ty: CostType, output: &[f64], expected: &[f64]) -> f64 {
    let f = get_cost_function(ty);
    let mut sum = f.calc_cost(output, expected);
    for i in 0..output.len() {
        sum += f.calc_derivative(output, expected, i);
    }
    sum
}

fn bench_activations(c: &mut Criterion) {
    let small: Vec<f64> = (0..10).map(|i| i as f64 / 10.0 - 0.5).collect();
    let large: Vec<f64> = (0..1_000).map(|i| i as f64 / 1_000.0 - 0.5).collect();

    for ty in [
        ActivationType::Sigmoid,
        ActivationType::TanH,
        ActivationType::ReLU,
        ActivationType::SiLU,
        ActivationType::Softmax,
        ActivationType::Linear,
    ] {
        c.bench_function(&format!("{ty:?} 10 units"), |b| {
            b.iter(|| forward_backward(black_box(ty), black_box(&small)))
        });
        c.bench_function(&format!("{ty:?} 1,000 units"), |b| {
            b.iter(|| forward_backward(black_box(ty), black_box(&large)))
        });
    }
}

fn bench_costs(c: &mut Criterion) {
    let output: Vec<f64> = (0..1_000).map(|i| (i as f64 + 1.0) / 1_000.0).collect();
    let expected: Vec<f64> = output.iter().map(|x| x * 1.1).collect();

    for ty in [
        CostType::MSE,
        CostType::CrossEntropy,
        CostType::MSLE,
        CostType::MAPE,
    ] {
        c.bench_function(&format!("{ty:?} 1,000 outputs"), |b| {
            b.iter(|| cost_and_gradient(black_box(ty), black_box(&output), black_box(&expected)))
        });
    }
}

criterion_group!(benches, bench_activations, bench_costs);
criterion_main!(benches);
