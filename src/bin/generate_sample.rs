use std::path::Path;

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

/// Strength proposed at each development cycle: a saturating climb towards
/// `ceiling` with noise, so the running maximum is not trivially the last value.
fn generate_run(cycles: usize, start: f64, ceiling: f64, rate: f64, rng: &mut SimpleRng) -> Vec<f64> {
    (0..cycles)
        .map(|c| {
            let trend = ceiling - (ceiling - start) * (-rate * c as f64).exp();
            (trend + rng.gauss(0.0, 3.0)).max(0.0)
        })
        .collect()
}

fn write_run(path: &Path, strengths: &[f64], rng: &mut SimpleRng) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Cycle", "Water Cement Ratio", "Compressive Strength"])?;
    for (cycle, strength) in strengths.iter().enumerate() {
        let ratio = 0.35 + rng.next_f64() * 0.25;
        writer.write_record([
            (cycle + 1).to_string(),
            format!("{ratio:.3}"),
            format!("{strength:.4}"),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let base = Path::new("Results_Concrete");

    // (prompt, start, ceiling, rate, run lengths)
    let prompts: [(&str, f64, f64, f64, &[usize]); 4] = [
        ("baseline_prompt", 30.0, 55.0, 0.25, &[10, 10, 10, 10, 10]),
        ("expert_prompt", 35.0, 68.0, 0.35, &[10, 10, 10, 8]),
        ("few_shot_prompt", 32.0, 62.0, 0.30, &[10, 10, 10]),
        ("mixed_lengths", 30.0, 60.0, 0.30, &[10, 10, 12]),
    ];

    let mut files = 0;
    for (prompt, start, ceiling, rate, lengths) in prompts {
        let dir = base.join(prompt);
        std::fs::create_dir_all(&dir).expect("Failed to create prompt directory");

        for (k, &cycles) in lengths.iter().enumerate() {
            let strengths = generate_run(cycles, start, ceiling, rate, &mut rng);
            let path = dir.join(format!("run_{}.csv", k + 1));
            write_run(&path, &strengths, &mut rng).expect("Failed to write run CSV");
            files += 1;
        }
    }

    std::fs::create_dir_all(base.join("empty_prompt")).expect("Failed to create empty prompt");

    println!(
        "Wrote {files} run files across {} prompts to {}",
        prompts.len() + 1,
        base.display()
    );
}
