use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_coerce::{to_float, to_integer, value, walk, Value, ValueMap};

fn benchmark_leaf(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf");

    for input in ["42", "  -1000.125\r\n", "1,000", "not a number"] {
        group.bench_with_input(BenchmarkId::new("to_float", input), &input, |b, s| {
            b.iter(|| to_float(black_box(Value::from(*s))))
        });
    }

    group.bench_function("to_integer_non_string", |b| {
        b.iter(|| to_integer(black_box(Value::Bool(true))))
    });

    group.finish();
}

fn row(i: usize) -> Value {
    let mut map = ValueMap::with_capacity(4);
    map.insert("id".to_string(), Value::from(i.to_string()));
    map.insert("name".to_string(), Value::from(format!("item-{}", i)));
    map.insert("price".to_string(), Value::from(format!("{}.99", i)));
    map.insert("tags".to_string(), value!(["1", "sale", "2"]));
    Value::Object(map)
}

fn benchmark_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for size in [10, 100, 1000].iter() {
        let rows = Value::Array((0..*size).map(row).collect());
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| walk(black_box(rows.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_leaf, benchmark_walk);
criterion_main!(benches);
