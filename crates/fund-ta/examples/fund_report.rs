//! Fund Report Example
//!
//! This example runs every indicator over a short fund history and prints the
//! headline figures, then the JSON report a chart layer would receive.
//!
//! Run with: `cargo run --example fund_report`

use fund_ta::analysis::{analyze, AnalysisConfig};
use fund_ta::indicators::moving_average;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Daily net asset values
    let prices: Vec<f64> = vec![
        1.5234, 1.5301, 1.5287, 1.5356, 1.5412, 1.5398, 1.5467, 1.5521, 1.5489, 1.5543, 1.5612,
        1.5587, 1.5634, 1.5701, 1.5689, 1.5756, 1.5812, 1.5798, 1.5743, 1.5801, 1.5867, 1.5923,
    ];
    let dates: Vec<String> = (1..=prices.len()).map(|d| format!("2024-03-{d:02}")).collect();

    println!("Price data: {} elements", prices.len());
    println!();

    let ma5 = moving_average(&prices, 5)?;
    println!("5-period moving average:");
    for (date, value) in dates.iter().zip(&ma5) {
        match value {
            Some(v) => println!("  {date} {v:.4}"),
            None => println!("  {date}      -"),
        }
    }
    println!();

    let report = analyze(&prices, &dates, &AnalysisConfig::default())?;
    println!(
        "Support {:.4} / Resistance {:.4}",
        report.support_resistance.support, report.support_resistance.resistance
    );
    println!("Trend slope {:.6} per day", report.trend.slope);
    println!("RSI {:.2}", report.rsi);
    println!("Volatility {:.2}%", report.volatility * 100.0);
    if let Some(distance) = report.distance_from_high {
        println!("Distance from high {distance:.2}%");
    }
    println!();

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
