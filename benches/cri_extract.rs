use criterion::{criterion_group, criterion_main, Criterion};
use inplay::extract::extract;

const REPORT: &str = "\
Pre-match
1 X 2
2.10 3.40 3.60
  2:1
(HT 1:0)
  67:12
Stats Live
Attacks
85
70
Dangerous Attacks
40
31
Shots On Target
6
3
Shots Off Target
5
4
Corners
7
2
Ball Possession
58%
42%
";

const FALLBACK_REPORT: &str = "\
Marcador 0 - 1
Minuto de Juego 38
Estadísticas en vivo
Ataques Peligrosos
22
15
Ataques
41
33
";

fn criterion_benchmark(c: &mut Criterion) {
    assert_eq!(67, extract(REPORT).unwrap().live_stats.minute);
    c.bench_function("cri_extract_header", |b| {
        b.iter(|| extract(REPORT));
    });
    assert_eq!(38, extract(FALLBACK_REPORT).unwrap().live_stats.minute);
    c.bench_function("cri_extract_fallback", |b| {
        b.iter(|| extract(FALLBACK_REPORT));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
