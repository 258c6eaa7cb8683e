use anyhow::{Context, Result};
use serde::Serialize;

/// One row of the generated evaluation file.
#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "Id")]
    id: usize,
    #[serde(rename = "Actual")]
    actual: f64,
    #[serde(rename = "Predicted")]
    predicted: f64,
}

/// SplitMix64: deterministic, good enough for demo data.
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    // Box-Muller
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        mean + std_dev * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

/// A slightly biased model: under-predicts large targets and gets noisier
/// as the target grows, so the residual plot shows a visible pattern.
fn predict(actual: f64, rng: &mut Rng) -> f64 {
    let bias = -0.04 * (actual - 50.0);
    let noise = rng.gauss(0.0, 1.5 + 0.05 * actual);
    actual + bias + noise
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_predictions.csv".to_string());

    let mut rng = Rng(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let n_rows = 200;
    for id in 0..n_rows {
        let actual = rng.uniform(0.0, 100.0);
        let predicted = predict(actual, &mut rng);
        writer
            .serialize(Row {
                id,
                actual: (actual * 1000.0).round() / 1000.0,
                predicted: (predicted * 1000.0).round() / 1000.0,
            })
            .with_context(|| format!("writing row {id}"))?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {n_rows} observations to {output_path}");
    Ok(())
}
