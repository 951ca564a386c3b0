//! Fills a few histograms and walks through arithmetic, integration and projection
//!
//! Run with `RUST_LOG=debug` to see the tracing output of the operations.

use rootplots_hist::{ArithmeticConfig, BinnedContent, Hist1D, Hist3D};
use tracing_subscriber::EnvFilter;

fn main() -> rootplots_hist::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Example 1: a 1-D histogram with weights and overflow
    println!("=== 1-D fill ===");
    let mut signal = Hist1D::new(10, 0.0, 10.0)?.with_title("signal");
    for i in 0..100 {
        let x = (i as f64 * 0.37) % 11.0;
        signal.fill_weighted(x, 1.0 + (i % 3) as f64)?;
    }
    println!("{}", *signal);
    println!("{}", signal.stats());
    for view in signal.cells_iter(false) {
        println!("  bin {:2}: {:6.2} +- {:5.2}", view.bins[0], view.content, view.error);
    }

    // Example 2: ratio with an explicit zero divisor policy
    println!("\n=== Ratio ===");
    let mut background = Hist1D::new(10, 0.0, 10.0)?.with_title("background");
    for i in 0..40 {
        background.fill((i as f64 * 0.53) % 8.0)?;
    }
    match signal.divide(&background) {
        Ok(ratio) => println!("ratio: {ratio}"),
        Err(e) => println!("strict division failed: {e}"),
    }
    let ratio = signal.divide_with(&background, &ArithmeticConfig::zero_on_divide_by_zero())?;
    println!("{ratio}: {:?}", ratio.cells_contents());

    // Example 3: 3-D projections and integrals
    println!("\n=== 3-D projections ===");
    let mut cube = Hist3D::new(4, 0.0, 4.0, 4, 0.0, 4.0, 4, 0.0, 4.0)?.with_title("cube");
    for i in 0..64 {
        let f = i as f64;
        cube.fill(f % 4.0 + 0.5, (f / 4.0) % 4.0 + 0.5, (f / 16.0) % 4.0 + 0.5)?;
    }
    let xy = cube.projection_xy()?;
    let x = xy.projection_x()?;
    println!("{}", *xy);
    println!("projection on x: {:?}", x.cells_contents());
    println!("integral of cube: {}", cube.integral_all());
    println!(
        "integral over [0,2)^3: {}",
        cube.integral_over_pos(&[0.0, 0.0, 0.0], &[1.9, 1.9, 1.9])?
    );

    Ok(())
}
