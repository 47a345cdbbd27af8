use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use svdf::{Ignore, ParseOptions};

fn make_manifest(depots: usize) -> String {
    let mut s = String::from("\"AppState\"\n{\n\t\"appid\"\t\t\"730\"\n\t\"name\"\t\t\"Counter-Strike 2\"\n");
    s.push_str("\t\"InstalledDepots\"\n\t{\n");
    for i in 0..depots {
        s.push_str(&format!(
            "\t\t\"{}\"\n\t\t{{\n\t\t\t\"manifest\"\t\t\"{}\"\n\t\t\t\"size\"\t\t\"{}\"\n\t\t}}\n",
            731 + i,
            7_043_469_183_016_184_477u64.wrapping_add(i as u64),
            i * 4096
        ));
    }
    s.push_str("\t}\n\t\"UserConfig\"\n\t{\n\t\t\"language\"\t\t\"english\"\n\t}\n}\n");
    s
}

fn make_escaped(entries: usize) -> String {
    let mut s = String::from("\"r\"\n{\n");
    for i in 0..entries {
        s.push_str(&format!("\t\"k{i}\"\t\t\"C:\\\\Program Files\\\\Steam\\\\{i}\\t\\\"x\\\"\"\n"));
    }
    s.push_str("}\n");
    s
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let cases = vec![
        ("small_manifest", make_manifest(2)),
        ("manifest_1k_depots", make_manifest(1000)),
        ("escapes_1k", make_escaped(1000)),
    ];
    let opts = ParseOptions::new().expect_root("AppState").expect_root("r");
    let mut group = c.benchmark_group("decode_vdf");
    for (name, text) in cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || text.clone(),
                |s| black_box(svdf::parse_with(s.as_bytes(), &opts, &mut Ignore).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let doc = svdf::parse_with(make_manifest(1000).as_bytes(), &opts, &mut Ignore).unwrap();
    c.bench_function("lookup_nested", |b| {
        b.iter(|| black_box(doc.lookup_string(black_box(&["InstalledDepots", "1500", "size"])).unwrap()))
    });
}

criterion_group!(benches, decode_benchmarks);
criterion_main!(benches);
