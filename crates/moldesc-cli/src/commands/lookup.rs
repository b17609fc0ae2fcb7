use crate::cli::LookupArgs;
use crate::error::Result;
use moldesc::core::models::element::{number_to_symbol, symbol_to_number};

/// Resolves one query to its `(symbol, number)` pair; numeric queries are atomic numbers.
fn resolve(query: &str) -> Result<(String, u8)> {
    let query = query.trim();
    match query.parse::<u8>() {
        Ok(number) => Ok((number_to_symbol(number)?.to_string(), number)),
        Err(_) => Ok((query.to_string(), symbol_to_number(query)?)),
    }
}

pub fn run(args: LookupArgs) -> Result<()> {
    let resolved = args
        .queries
        .iter()
        .map(|q| resolve(q))
        .collect::<Result<Vec<_>>>()?;
    for (symbol, number) in resolved {
        println!("{}\t{}", symbol, number);
    }
    Ok(())
}
