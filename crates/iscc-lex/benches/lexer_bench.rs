//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package iscc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iscc_lex::tokenize;

const ASSIGNMENT: &str = "x = 1\n";

const FUNCTION: &str = "\
def add(a, b):
    return a + b
";

const PROGRAM: &str = "\
class Greeter:
    def __init__(self, name):
        self.name = name

    def greet(self):
        print(f\"Hello {self.name}\")

def main():
    g = Greeter(\"world\")
    for i in range(3):
        if i % 2 == 0:
            g.greet()
        else:
            print(i)

main()
";

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("assignment", |b| {
        b.iter(|| tokenize(black_box(ASSIGNMENT)).len())
    });

    group.bench_function("function", |b| {
        b.iter(|| tokenize(black_box(FUNCTION)).len())
    });

    group.bench_function("program", |b| {
        b.iter(|| tokenize(black_box(PROGRAM)).len())
    });

    group.finish();
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
