//! Coercing single values.
//!
//! Run with: cargo run --example simple

use numeric_coerce::{to_float, to_integer, to_positive_integer, Value};

fn main() {
    let inputs = ["42", " -7 ", "0666", "3.14", "1,000", "1e15", "abc"];

    println!("{:<10} {:<12} {:<12} {:<12}", "input", "integer", "positive", "float");
    for input in inputs {
        println!(
            "{:<10} {:<12} {:<12} {:<12}",
            format!("{:?}", input),
            describe(to_integer(Value::from(input))),
            describe(to_positive_integer(Value::from(input))),
            describe(to_float(Value::from(input))),
        );
    }
}

fn describe(value: Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}
