//! Criterion micro-benchmarks for source construction and application.

use criterion::{criterion_group, criterion_main, Criterion};
use fvopts_bench::{density_field, reference_mesh, reference_options, REFERENCE_CELLS};
use fvopts_core::{SolverTime, VolScalarField};
use fvopts_function::FunctionLibrary;
use fvopts_source::{SourceContext, SourceList, SourceRegistry};
use fvopts_test_utils::RecordingEquation;
use std::hint::black_box;

/// Benchmark: build the two reference sources from configuration.
fn bench_construct_list(c: &mut Criterion) {
    let mesh = reference_mesh(REFERENCE_CELLS).unwrap();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let options = reference_options();

    c.bench_function("construct_source_list", |b| {
        b.iter(|| {
            let ctx = SourceContext::new(&mesh, &functions);
            let list = SourceList::new(black_box(&options), &registry, ctx).unwrap();
            black_box(list.len());
        });
    });
}

/// Benchmark: incompressible application over 100K cells.
fn bench_add_sup_100k(c: &mut Criterion) {
    let mesh = reference_mesh(REFERENCE_CELLS).unwrap();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let ctx = SourceContext::new(&mesh, &functions);
    let mut list = SourceList::new(&reference_options(), &registry, ctx).unwrap();
    let mut eqn = RecordingEquation::new("U", REFERENCE_CELLS);
    let mut time = SolverTime::new(0.0, 0.01);

    c.bench_function("add_sup_100k", |b| {
        b.iter(|| {
            time.advance();
            list.add_sup(black_box(&time), &mut eqn).unwrap();
        });
    });
    black_box(eqn.total());
}

/// Benchmark: multiphase application over 100K cells.
fn bench_add_alpha_rho_sup_100k(c: &mut Criterion) {
    let mesh = reference_mesh(REFERENCE_CELLS).unwrap();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let ctx = SourceContext::new(&mesh, &functions);
    let mut list = SourceList::new(&reference_options(), &registry, ctx).unwrap();
    let rho = density_field(REFERENCE_CELLS);
    let alpha = VolScalarField::uniform("alpha.water", REFERENCE_CELLS, 0.5);
    let mut eqn = RecordingEquation::new("U", REFERENCE_CELLS);
    let time = SolverTime::at(5.0);

    c.bench_function("add_alpha_rho_sup_100k", |b| {
        b.iter(|| {
            list.add_alpha_rho_sup(&time, black_box(&alpha), black_box(&rho), &mut eqn)
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_construct_list,
    bench_add_sup_100k,
    bench_add_alpha_rho_sup_100k
);
criterion_main!(benches);
