//! Period search walkthrough on a synthetic variable-star light curve.
//!
//! Run with: cargo run --example period_search
//! Set RUST_LOG=anofox_periodogram=debug to see scan events.

use anofox_periodogram::periodogram::{find_harmonics, FoldedSeries, DEFAULT_HARMONIC_TOLERANCE};
use anofox_periodogram::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== anofox-periodogram Period Search ===\n");

    // 1. Irregularly sampled light curve: period 3.2 days plus a first overtone
    let mut t = 2_450_000.0;
    let times: Vec<f64> = (0..400)
        .map(|i| {
            t += 0.2 + ((i * 37) % 11) as f64 * 0.07;
            t
        })
        .collect();
    let mags: Vec<f64> = times
        .iter()
        .map(|t| {
            let phase = std::f64::consts::TAU * t / 3.2;
            11.0                           // mean magnitude
            + 0.6 * phase.sin()            // fundamental
            + 0.2 * (2.0 * phase).sin()    // first harmonic
        })
        .collect();
    let series = ObservationSeries::from_columns(times, mags).unwrap();
    let summary = series.summary();
    println!(
        "{} observations over {:.1} days, median interval {:.3} days",
        series.len(),
        summary.time_span(),
        summary.median_interval
    );

    // 2. Deeming DFT over the suggested frequency range
    let params = ScanParameters::suggest_frequency_range(&series).unwrap();
    println!(
        "\n--- DFT (Deeming): {:.4} to {:.4} c/d, resolution {:.6} ---",
        params.min, params.max, params.resolution
    );
    let state = RunState::new();
    let dft = PeriodSearch::new(Method::deeming())
        .with_top_hit_limit(TopHitLimit::AtMost(5))
        .run(&series, &params, &state)
        .unwrap();

    println!("{:>12} {:>12} {:>12} {:>12}", "Frequency", "Period", "Power", "Amplitude");
    println!("{:-<52}", "");
    for hit in dft.top_hits.by_significance() {
        println!(
            "{:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            hit.row.frequency, hit.row.period, hit.row.primary, hit.row.secondary
        );
    }

    // 3. Harmonics of the strongest peak
    if let Some(best) = dft.top_hits.best() {
        let harmonics = find_harmonics(
            best.row.frequency,
            dft.results.frequencies(),
            DEFAULT_HARMONIC_TOLERANCE,
        );
        println!("\nHarmonics found: {}", harmonics.len());
        for h in &harmonics {
            println!("  n={}: {:.6} c/d", h.number, h.frequency);
        }
    }

    // 4. AoV refinement around the best period
    println!("\n--- AoV (10 bins) around 3.2 d ---");
    let aov = PeriodSearch::new(Method::aov())
        .with_top_hit_limit(TopHitLimit::AtMost(3))
        .run(&series, &ScanParameters::new(3.0, 3.4, 0.001), &state)
        .unwrap();
    println!("{:>12} {:>14} {:>14}", "Period", "F-statistic", "p-value");
    println!("{:-<42}", "");
    for hit in aov.top_hits.by_significance() {
        println!(
            "{:>12.4} {:>14.2} {:>14.3e}",
            hit.row.period, hit.row.primary, hit.row.secondary
        );
    }

    // 5. Binned phase plot at the best AoV period
    if let Some(best) = aov.top_hits.best() {
        let epoch = EpochStrategy::Earliest.epoch(&series);
        let folded = FoldedSeries::fold(&series, epoch, best.row.period);
        println!("\nPhase-binned means at P = {:.4} d:", best.row.period);
        for bin in folded.bins(10) {
            println!("  phase {:.2}: {:>7.3} ({} points)", bin.centre(10), bin.mean, bin.count);
        }
    }

    // 6. Spectral window of the sampling pattern
    let window = PeriodSearch::new(Method::spectral_window(SpectralWindowNormalization::Deeming))
        .with_top_hit_limit(TopHitLimit::AtMost(3))
        .run(&series, &params, &state)
        .unwrap();
    println!("\n--- Spectral window peaks ---");
    for hit in window.top_hits.by_scan_order() {
        println!("  {:.6} c/d: amplitude {:.4}", hit.row.frequency, hit.row.secondary);
    }

    println!("\n=== Done ===");
}
