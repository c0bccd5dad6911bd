//! Writes demo tables in each supported dialect:
//!
//! * `exponential.csv` – comma separated with a header, exponential growth
//! * `sparse.tsv`      – tab separated with a header, one mostly missing series
//! * `plain.txt`       – space separated, no header
//!
//! Usage: `generate_sample [OUTPUT_DIR]` (defaults to the current directory).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn writer(path: &Path, delimiter: u8) -> Result<csv::Writer<std::fs::File>> {
    csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))
}

fn num(v: f64) -> String {
    format!("{v:.6}")
}

/// Two growth curves; mean far above median, so the viewer picks a log axis.
fn write_exponential(dir: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let path = dir.join("exponential.csv");
    let mut w = writer(&path, b',')?;
    w.write_record(["hours", "bacteria", "yeast"])?;

    let rows = 200;
    for i in 0..rows {
        let t = i as f64 * 0.5;
        let bacteria = (0.1 * t).exp() * (1.0 + rng.gauss(0.0, 0.02));
        let yeast = 3.0 * (0.08 * t).exp() * (1.0 + rng.gauss(0.0, 0.02));
        w.write_record([num(t), num(bacteria), num(yeast)])?;
    }
    w.flush().with_context(|| format!("writing {}", path.display()))?;
    Ok(rows)
}

/// A dense spectrum plus calibration points every 200 rows; the latter are
/// drawn as markers.
fn write_sparse(dir: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let path = dir.join("sparse.tsv");
    let mut w = writer(&path, b'\t')?;
    w.write_record(["wavelength", "intensity", "calibration"])?;

    let rows = 3000;
    for i in 0..rows {
        let wl = 400.0 + i as f64 * 0.1;
        let peak = (-(wl - 550.0).powi(2) / (2.0 * 20.0f64.powi(2))).exp();
        let intensity = 1.0 + peak + rng.gauss(0.0, 0.01);
        // Empty cells would collapse into the separator, so gaps are "NA".
        let calibration = if i % 200 == 0 {
            num(1.0 + peak)
        } else {
            "NA".to_string()
        };
        w.write_record([num(wl), num(intensity), calibration])?;
    }
    w.flush().with_context(|| format!("writing {}", path.display()))?;
    Ok(rows)
}

/// Three phase-shifted sines without labels.
fn write_plain(dir: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let path = dir.join("plain.txt");
    let mut w = writer(&path, b' ')?;

    let rows = 100;
    for i in 0..rows {
        let x = i as f64 * 0.1;
        let mut record = vec![num(x)];
        for phase in 0..3 {
            let y = 2.0 + (x + phase as f64).sin() + rng.gauss(0.0, 0.05);
            record.push(num(y));
        }
        w.write_record(&record)?;
    }
    w.flush().with_context(|| format!("writing {}", path.display()))?;
    Ok(rows)
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let written = [
        ("exponential.csv", write_exponential(&dir, &mut rng)?),
        ("sparse.tsv", write_sparse(&dir, &mut rng)?),
        ("plain.txt", write_plain(&dir, &mut rng)?),
    ];

    for (name, rows) in written {
        println!("Wrote {rows} rows to {}", dir.join(name).display());
    }
    Ok(())
}
