//! Parser performance benchmarks.
//!
//! Measures record extraction across list sizes and identifier validation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use chembl::{Bioactivity, ChemblId, Entity};

/// Generate a `<list>` document with the specified number of bioactivities.
fn generate_list(records: usize) -> String {
    let mut data = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<list>\n");
    for i in 0..records {
        data.push_str(&format!(
            "<bioactivity>\
             <parent__cmpd__chemblid>CHEMBL{}</parent__cmpd__chemblid>\
             <ingredient__cmpd__chemblid>CHEMBL{}</ingredient__cmpd__chemblid>\
             <target__chemblid>CHEMBL240</target__chemblid>\
             <target__confidence>9</target__confidence>\
             <target__name>HERG</target__name>\
             <reference>Bioorg. Med. Chem. Lett., (2010) 20:15:4359</reference>\
             <name__in__reference>{}</name__in__reference>\
             <organism>Homo sapiens</organism>\
             <bioactivity__type>IC50</bioactivity__type>\
             <activity__comment>Unspecified</activity__comment>\
             <operator>=</operator>\
             <units>nM</units>\
             <assay__chemblid>CHEMBL{}</assay__chemblid>\
             <assay__type>B</assay__type>\
             <assay__description>Inhibition of human hERG</assay__description>\
             <value>{}</value>\
             </bioactivity>\n",
            1_000_000 + i,
            1_000_000 + i,
            i % 50,
            2_000_000 + i,
            (i * 37) % 10_000
        ));
    }
    data.push_str("</list>\n");
    data
}

/// Benchmark list parsing at various sizes.
fn bench_parse_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_list");

    for size in [10, 100, 1000] {
        let data = generate_list(size);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Bioactivity::parse_list(black_box(data)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark identifier validation.
fn bench_identifier(c: &mut Criterion) {
    let ids: Vec<String> = (0..1000)
        .map(|i| if i % 4 == 0 { format!("CHEMBLX{}", i) } else { format!("CHEMBL{}", i) })
        .collect();

    c.bench_function("identifier_parse_1000", |b| {
        b.iter(|| {
            ids.iter()
                .filter(|id| ChemblId::parse(black_box(id.as_str())).is_ok())
                .count()
        })
    });
}

criterion_group!(benches, bench_parse_list, bench_identifier);
criterion_main!(benches);
