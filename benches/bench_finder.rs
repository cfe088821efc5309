use criterion::{criterion_group, criterion_main, Criterion};
use rack_solver::search::Strategy;
use rack_solver::{BoardConstraint, Finder, Mode, Rack};

const WORDFILE: &str = "wordlists/words.txt";

fn finder() -> Finder {
    Finder::new(Mode::Scrabble)
        .with_dictionary_from_file(WORDFILE)
        .unwrap()
}

fn bench_find(c: &mut Criterion, name: &str, rack: &str, pattern: &str) {
    let finder = finder();
    let rack: Rack = rack.parse().unwrap();
    let constraint: BoardConstraint = pattern.parse().unwrap();
    c.bench_function(&format!("finder.{}", name), |b| {
        b.iter(|| finder.find(&rack, &constraint))
    });
}

fn bench_strategy(c: &mut Criterion, strategy: Strategy, rack: &str) {
    let finder = finder();
    let rack: Rack = rack.parse().unwrap();
    let constraint = BoardConstraint::unconstrained();
    c.bench_function(&format!("{}.{}", strategy, rack), |b| {
        b.iter(|| finder.find_with(strategy, &rack, &constraint))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_find(c, "1", "tea", "");
    bench_find(c, "2", "stare", "^c");
    bench_strategy(c, Strategy::RackPermutations, "tears");
    bench_strategy(c, Strategy::DictionaryScan, "tears");
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_find(c, "3", "retains*", "");
    bench_find(c, "4", "st**", "a.e");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
