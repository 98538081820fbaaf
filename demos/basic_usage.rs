//! Basic usage example for countrycodes-rs
//!
//! This example demonstrates how to:
//! - Look up a country by each of its codes
//! - Search names by prefix
//! - Inspect reserved and duplicate entries
//! - Search by dialing code

use countrycodes_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrycodes-rs Basic Usage Example ===\n");

    let registry = Registry::global();
    println!("Loaded {} code elements\n", registry.len());

    // Example 1: Exact lookups
    println!("--- Example 1: Exact lookups ---");
    if let Some(country) = registry.get_by_alpha2("DE") {
        println!("Found: {country}");
        println!("Alpha-3: {}", country.alpha3);
        println!("Numeric: {:?}", country.numeric_str());
        println!("Dialing code: {}", country.dialing_code);
    }
    let by_numeric = registry.require("276")?;
    println!("Numeric 276 is {}", by_numeric.name);
    println!();

    // Example 2: Name prefix search
    println!("--- Example 2: Countries starting with \"united\" ---");
    for country in registry.find_by_name("united") {
        println!("- {} ({}, {})", country.name, country.alpha2, country.assignment);
    }
    println!();

    // Example 3: One name, two codes
    println!("--- Example 3: Finland ---");
    for country in registry.find_by_name("Finland") {
        println!("- {} -> {}", country.alpha2, country.assignment);
    }
    if let Some(fin) = registry.get_by_name("Finland") {
        println!("Exact name lookup returns {}", fin.alpha2);
    }
    println!();

    // Example 4: Dialing codes
    println!("--- Example 4: Countries with dialing code +1 ---");
    let nanp = registry.find_by_dialing_code("+1");
    println!("{} entries share +1", nanp.len());
    for country in nanp.iter().take(5) {
        println!("- {} ({})", country.name, country.dialing_code);
    }
    println!();

    // Example 5: Reserved codes
    println!("--- Example 5: Transitionally reserved codes ---");
    for country in registry.by_assignment(Assignment::TransitionallyReserved) {
        println!("- {} / {}: {}", country.alpha2, country.alpha3, country.name);
    }
    println!();

    // Example 6: Handling misses
    println!("--- Example 6: Unknown code ---");
    match registry.require("ZZ") {
        Ok(c) => println!("Unexpected hit: {c}"),
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
