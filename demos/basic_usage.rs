// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_rounder::prelude::*;

/// A stored record that renders its price through the rounder.
struct Product {
    name: &'static str,
    price: DecimalValue,
}

impl Product {
    fn formatted_price(&self, rounder: &DecimalRounder) -> String {
        format!("${}", rounder.format(&self.price))
    }
}

fn main() -> Result<(), DecimalError> {
    println!("=== Decimal Rounder Example ===\n");

    // Binary floating point drifts
    let float_sum = 0.1f64 + 0.2f64;
    println!("f64:     0.1 + 0.2 = {:?} (== 0.3: {})", float_sum, float_sum == 0.3);

    // Exact decimals do not
    let a: DecimalValue = "0.1".parse()?;
    let b: DecimalValue = "0.2".parse()?;
    let sum = &a + &b;
    println!("decimal: 0.1 + 0.2 = {} (== 0.3: {})\n", sum, sum == "0.3".parse()?);

    println!("Round half to even, 0 digits:");
    for literal in ["1.5", "2.5", "3.5", "4.5", "-2.5"] {
        let value: DecimalValue = literal.parse()?;
        println!("  {:>5} -> {}", literal, value.round_half_even(0)?);
    }

    println!("\nEvery mode at 2 digits for 2.545:");
    let tie: DecimalValue = "2.545".parse()?;
    for mode in RoundingMode::ALL {
        println!("  {:<9} {}", mode, tie.round(2, mode)?);
    }

    println!("\nFormatted prices:");
    let rounder = DecimalRounder::new(RoundingConfig::currency())?;
    let products = [
        Product { name: "coffee", price: "2.535".parse()? },
        Product { name: "bagel", price: "2.545".parse()? },
        Product { name: "juice", price: "4".parse()? },
    ];
    for product in &products {
        println!("  {:<7} {}", product.name, product.formatted_price(&rounder));
    }

    match "2.5".parse::<DecimalValue>()?.round(-1, RoundingMode::HalfEven) {
        Ok(value) => println!("\nunexpected: {}", value),
        Err(err) => println!("\nrejected: {}", err),
    }

    Ok(())
}
