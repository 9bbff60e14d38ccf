//! Walking a nested document parsed from JSON.
//!
//! Run with: cargo run --example nested_walk

use numeric_coerce::{walk, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let raw = r#"{
        "order": "1042",
        "items": [
            { "sku": "W-1", "qty": "2", "price": "9.99" },
            { "sku": "G-2", "qty": "1", "price": "14.50" }
        ],
        "note": "deliver after 5"
    }"#;

    let parsed: Value = serde_json::from_str(raw)?;
    let coerced = walk(parsed);

    println!("{}", serde_json::to_string_pretty(&coerced)?);
    Ok(())
}
