//! Turning string-only query parameters into a typed struct.
//!
//! Run with: cargo run --example typed_records

use numeric_coerce::coerce_into;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Search {
    q: String,
    page: u32,
    per_page: u32,
    min_price: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let query = "q=lamp&page=2&per_page=25&min_price=19.5";

    let params: BTreeMap<&str, &str> = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect();

    let search: Search = coerce_into(&params)?;
    println!("{:#?}", search);
    Ok(())
}
