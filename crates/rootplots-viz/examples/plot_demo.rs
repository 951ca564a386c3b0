//! Renders a 1-D histogram, a 2-D histogram and a 1-D profile to SVG files
//! in the system temp directory

use rootplots_hist::{Hist1D, Hist2D};
use rootplots_profile::Profile1D;
use rootplots_viz::{plot_hist, plot_profile, PlotConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out = std::env::temp_dir();
    let config = PlotConfig::default();

    let mut h1 = Hist1D::new(20, -3.0, 3.0)?.with_title("Triangular");
    let mut h2 = Hist2D::new(20, -3.0, 3.0, 20, -3.0, 3.0)?.with_title("Ring");
    let mut p1 = Profile1D::new(12, 0.0, 6.0)?.with_title("Mean of x^2");
    h1.set_axis_label(0, "x")?;

    for i in 0..2_000 {
        let u = (i as f64 * 0.618_034) % 1.0;
        let v = (i as f64 * 0.414_214) % 1.0;
        h1.fill(3.0 * (u + v - 1.0))?;

        let angle = std::f64::consts::TAU * u;
        let radius = 2.0 + 0.5 * (v - 0.5);
        h2.fill(radius * angle.cos(), radius * angle.sin())?;

        let x = 6.0 * u;
        p1.fill(x, x * x + 4.0 * (v - 0.5))?;
    }

    for (name, result) in [
        ("hist1d.svg", plot_hist(&h1, out.join("hist1d.svg"), &config)),
        ("hist2d.svg", plot_hist(&h2, out.join("hist2d.svg"), &config)),
        ("profile1d.svg", plot_profile(&p1, out.join("profile1d.svg"), &config)),
    ] {
        result?;
        println!("wrote {}", out.join(name).display());
    }
    Ok(())
}
