//! Write a synthetic launch dataset in the dashboard's CSV schema.
//!
//! Usage: `generate_sample [OUTPUT] [ROWS]` (defaults: `sample_launches.csv`, 80).

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let i = (self.next_f64() * items.len() as f64) as usize;
        &items[i.min(items.len() - 1)]
    }
}

/// Booster generation: category, share of flights, payload span (kg), and
/// landing success rate.
struct Era {
    category: &'static str,
    share: f64,
    payload: (f64, f64),
    success_rate: f64,
    sites: &'static [&'static str],
}

const ERAS: &[Era] = &[
    Era {
        category: "v1.0",
        share: 0.08,
        payload: (0.0, 700.0),
        success_rate: 0.0,
        sites: &["CCAFS LC-40"],
    },
    Era {
        category: "v1.1",
        share: 0.25,
        payload: (500.0, 4500.0),
        success_rate: 0.1,
        sites: &["CCAFS LC-40", "VAFB SLC-4E"],
    },
    Era {
        category: "FT",
        share: 0.35,
        payload: (1000.0, 6800.0),
        success_rate: 0.65,
        sites: &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"],
    },
    Era {
        category: "B4",
        share: 0.2,
        payload: (2000.0, 9600.0),
        success_rate: 0.55,
        sites: &["KSC LC-39A", "CCAFS SLC-40", "VAFB SLC-4E"],
    },
    Era {
        category: "B5",
        share: 0.12,
        payload: (3000.0, 9600.0),
        success_rate: 0.9,
        sites: &["KSC LC-39A", "CCAFS SLC-40"],
    },
];

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| "sample_launches.csv".to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse().context("ROWS must be a positive integer")?,
        None => 80,
    };

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "Unnamed: 0",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;

    let mut flight = 0usize;
    let mut serial = 1001u32;
    for era in ERAS {
        let n = ((era.share * rows as f64).round() as usize).max(1);
        for _ in 0..n {
            flight += 1;
            let site = rng.pick(era.sites);
            let payload = rng.uniform(era.payload.0, era.payload.1).round();
            let class = u8::from(rng.next_f64() < era.success_rate);
            let version = format!("F9 {} B{serial}", era.category);
            serial += 1;

            writer.write_record([
                (flight - 1).to_string(),
                flight.to_string(),
                site.to_string(),
                class.to_string(),
                format!("{payload:.1}"),
                version,
                era.category.to_string(),
            ])?;
        }
    }
    writer.flush()?;

    println!("Wrote {flight} launches to {output_path}");
    Ok(())
}
