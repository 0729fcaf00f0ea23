use std::path::Path;

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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a>(&mut self, pool: &'a [&'a str]) -> &'a str {
        pool[(self.next_u64() % pool.len() as u64) as usize]
    }
}

const FACTORS: [&str; 10] = [
    "Engine Failure",
    "Bird Strike",
    "Adverse Weather",
    "Pilot Error",
    "ATC Miscommunication",
    "Maintenance Lapse",
    "Fuel Exhaustion",
    "Runway Incursion",
    "Instrument Malfunction",
    "Night Operation",
];

const OUTCOMES: [&str; 6] = [
    "Forced Landing",
    "Aborted Takeoff",
    "Runway Excursion",
    "Go-Around",
    "Emergency Descent",
    "Diversion",
];

/// One synthetic rule row: (antecedents, consequents, support, confidence, lift).
type Row = (String, String, f64, f64, f64);

fn generate_rules(rng: &mut SimpleRng, n: usize) -> Vec<Row> {
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let a = rng.pick(&FACTORS);
        let mut b = rng.pick(&FACTORS);
        while b == a {
            b = rng.pick(&FACTORS);
        }
        let antecedents = format!("{a}, {b}");
        let consequents = rng.pick(&OUTCOMES).to_string();

        let support = rng.uniform(0.01, 0.35);
        let confidence = rng.uniform(0.2, 0.95);
        // Lift = confidence / P(consequent); draw the base rate directly.
        let consequent_rate = rng.uniform(0.15, 0.6);
        let lift = confidence / consequent_rate;

        rows.push((antecedents, consequents, support, confidence, lift));
    }
    rows
}

fn write_table(dir: &Path, stem: &str, rows: &[Row]) -> Result<()> {
    let path = dir.join(format!("{stem}.csv"));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["antecedents", "consequents", "support", "confidence", "lift"])?;
    for (antecedents, consequents, support, confidence, lift) in rows {
        let support = format!("{support:.6}");
        let confidence = format!("{confidence:.6}");
        let lift = format!("{lift:.6}");
        writer.write_record([
            antecedents.as_str(),
            consequents.as_str(),
            support.as_str(),
            confidence.as_str(),
            lift.as_str(),
        ])?;
    }
    writer.flush()?;
    println!("Wrote {} rules to {}", rows.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir = Path::new("data");
    std::fs::create_dir_all(dir).context("creating data directory")?;

    let mut rng = SimpleRng::new(42);
    let accident = generate_rules(&mut rng, 60);
    let incident = generate_rules(&mut rng, 120);
    let serious_incident = generate_rules(&mut rng, 40);

    // The combined table spans every occurrence category.
    let mut all_variables = Vec::new();
    all_variables.extend_from_slice(&accident);
    all_variables.extend_from_slice(&incident);
    all_variables.extend_from_slice(&serious_incident);

    write_table(dir, "association_rules_accident", &accident)?;
    write_table(dir, "association_rules_incident", &incident)?;
    write_table(dir, "association_rules_serious_incident", &serious_incident)?;
    write_table(dir, "association_rules_all_variables", &all_variables)?;

    Ok(())
}
