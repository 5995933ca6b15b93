use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lindagrades_core::extract::{PatternExtractor, RecordExtractor};

fn grade_row(i: usize) -> String {
    format!(
        "<tr>\n  <td class=\"tabelle1\">{}</td>\n  <td class=\"tabelle1\">{},{}</td>\n  <td>bestanden</td>\n  <td> </td>\n  <td>PL</td>\n  <td>1</td>\n  <td>{}</td>\n  <td>5,0</td>\n  <td>WS{}</td>\n  <td>Modul {i}</td>\n</tr>\n",
        1000 + i,
        1 + i % 4,
        i % 10,
        if i % 2 == 0 { "G" } else { "H" },
        10 + i % 10,
    )
}

fn generate_page(rows: usize) -> String {
    let mut html = String::from("<html><body><table>\n<tr><th>Nr</th><th>Note</th></tr>\n");
    for i in 0..rows {
        html.push_str(&grade_row(i));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_records");
    let extractor = PatternExtractor::qis_v1();

    let small = generate_page(5);
    let typical = generate_page(40);
    let large = generate_page(400);

    group.bench_function("5_rows", |b| {
        b.iter(|| extractor.extract(black_box(&small)).unwrap())
    });

    group.bench_function("40_rows", |b| {
        b.iter(|| extractor.extract(black_box(&typical)).unwrap())
    });

    group.bench_function("400_rows", |b| {
        b.iter(|| extractor.extract(black_box(&large)).unwrap())
    });

    group.finish();
}

fn bench_compile_schema(c: &mut Criterion) {
    c.bench_function("compile_qis_v1", |b| b.iter(PatternExtractor::qis_v1));
}

criterion_group!(benches, bench_extract, bench_compile_schema);
criterion_main!(benches);
