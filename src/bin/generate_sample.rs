//! Writes a small deterministic emissions CSV for local testing.
//!
//! Output columns match the dashboard's input contract:
//! `Country`, `Year`, `CO2 emission (Tons)`. A couple of rows carry missing
//! values on purpose so the loader's row-dropping path can be exercised.

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

fn main() {
    let mut rng = SimpleRng::new(42);

    // (country, 1990 baseline in tons, yearly growth factor)
    let countries: [(&str, f64, f64); 5] = [
        ("China", 2.4e9, 1.06),
        ("United States", 4.8e9, 1.002),
        ("India", 6.0e8, 1.05),
        ("Germany", 1.0e9, 0.99),
        ("Spain", 2.2e8, 1.01),
    ];

    let output_path = "CO2_emission_by_countries.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Country", "Year", "CO2 emission (Tons)"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for &(country, baseline, growth) in &countries {
        for year in (1990..=2020).step_by(5) {
            let trend = baseline * growth.powi(year - 1990);
            let emission = (trend * rng.gauss(1.0, 0.03)).max(0.0);
            let year_field = year.to_string();
            let emission_field = format!("{emission:.0}");
            writer
                .write_record([country, year_field.as_str(), emission_field.as_str()])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    // Rows the loader must drop: missing year, missing emission.
    writer
        .write_record(["Spain", "", "123456789"])
        .expect("Failed to write row");
    writer
        .write_record(["Germany", "2020", ""])
        .expect("Failed to write row");
    writer.flush().expect("Failed to flush output");

    println!("Wrote {rows} records (+2 incomplete) to {output_path}");
}
