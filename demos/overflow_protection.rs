//! Walks a few sequences across their overflow boundary.
//!
//! Run with: cargo run -p camimath --example overflow_protection
//!
//! Run with `RUST_LOG=camimath::iop=warn` (the default) to see the capture
//! notices, or `RUST_LOG=off` to silence them.

use camimath::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = IopConfig::default();

    for n in [20, 21] {
        let f = bigfactorial(n, cfg);
        println!("{n}! = {f} ({})", if f.is_big() { "Integer" } else { "i64" });
    }

    for n in [92, 93] {
        println!("F_{n} = {}", fibonacci(n, cfg));
    }

    for n in [34, 36, 60] {
        println!("B_{n} = {}", bernoulli_b(n, cfg));
    }

    println!("H_46 = {}", harmonic_number(46, 1, cfg));
    println!("H_47 = {}", harmonic_number(47, 1, cfg));

    // Silent promotion
    let quiet = IopConfig::SILENT;
    println!("Σ k^29, k = 1..5 = {}", faulhaber_polynomial(5, 30, quiet));

    let h = HalfInt::new;
    let w = three_j_symbol(h(3), h(0), h(4), h(-1), h(5), h(1));
    println!("3j(3 4 5; 0 -1 1) = {w} = {}", w.to_f64());
}
