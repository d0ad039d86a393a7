// ============================================================================
// Basic Usage Example
// ============================================================================

use complex_scalar::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Complex Scalar Example ===\n");

    let z = Complex::new(3.0, 4.0);
    let w = Complex::new(1.0, -2.0);

    println!("z = {:?}", z);
    println!("w = {:?}\n", w);

    println!("Arithmetic:");
    println!("  z + w = {:?}", z + w);
    println!("  z - w = {:?}", z - w);
    println!("  z * w = {:?}", z * w);
    println!("  z / w = {:?}\n", z / w);

    println!("Polar:");
    println!("  |z|     = {}", z.abs());
    println!("  arg(z)  = {}", z.arg());
    // Narrowing gives the magnitude, not z.re
    println!("  to_real = {}\n", z.to_real());

    println!("Transcendental:");
    println!("  exp(z)        = {:?}", Complex::exp(z));
    println!("  ln(z)         = {:?}", Complex::ln(z));
    println!("  sqrt(z)       = {:?}", z.sqrt());
    println!("  sqrt(-1)      = {:?}", Complex::from_real(-1.0).sqrt());
    println!("  i^2           = {:?}", Complex::I.pow(Complex::from_real(2.0)));
    println!("  z^w           = {:?}\n", z.pow(w));

    println!("Degenerate inputs:");
    println!("  z / 0         = {:?}", z / Complex::ZERO);
    println!("  ln(0)         = {:?}", Complex::ln(Complex::ZERO));

    // Checked variants log the rejection at TRACE level
    match z.checked_div(Complex::ZERO) {
        Ok(q) => println!("  checked z / 0 = {:?}", q),
        Err(e) => println!("  checked z / 0 failed: {}", e),
    }
    match Complex::checked_ln(Complex::ZERO) {
        Ok(l) => println!("  checked ln(0) = {:?}", l),
        Err(e) => println!("  checked ln(0) failed: {}", e),
    }
    match f64::try_from(z) {
        Ok(re) => println!("  f64::try_from(z) = {}", re),
        Err(e) => println!("  f64::try_from(z) failed: {}", e),
    }

    println!("\n=== Example Complete ===");
}
