//! Building coercers from custom checks and fallbacks.
//!
//! Run with: cargo run --example custom_coercer

use numeric_coerce::{value, Classifier, Coercer, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Ages: unsigned integers only, anything else becomes null
    let ages = Coercer::new(Classifier::UnsignedInteger).with_fallback(Value::Null);
    println!("{}", ages.walk(value!(["31", "-4", "unknown", " 58 "])));

    // Prices with exactly two decimal places
    let cents = Classifier::from_pattern(r"^\s*[0-9]+\.[0-9]{2}\s*$")?;
    let prices = Coercer::new(cents);
    println!("{}", prices.walk(value!({ "a": "9.99", "b": "9.9", "c": "10" })));

    // Any closure works as a check
    let bits = Coercer::new(|s: &str| matches!(s.trim(), "0" | "1"));
    println!("{}", bits.walk(value!(["1", "0", "2"])));

    Ok(())
}
