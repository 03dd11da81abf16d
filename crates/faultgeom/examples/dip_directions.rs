//! Print strike and dip direction for a few sampled fault traces.
//!
//! Usage:
//!   cargo run -p faultgeom --example dip_directions -- [count]

use faultgeom::prelude::*;

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let cfg = TraceCfg {
        vertex_count: VertexCount::Uniform { min: 2, max: 8 },
        ..TraceCfg::default()
    };
    for index in 0..count {
        let line = match draw_trace(cfg, ReplayToken { seed: 2025, index }) {
            Ok(line) => line,
            Err(err) => {
                eprintln!("sample {index}: {err}");
                continue;
            }
        };
        match (calculate_strike(&line), calculate_dip_direction(&line)) {
            (Ok(strike), Ok(dip)) => {
                let rev = calculate_dip_direction(&reverse_line(&line)).unwrap_or(f64::NAN);
                println!(
                    "sample {index}: V={}, strike={strike:.2}, dip_dir={dip:.2}, reversed={rev:.2}, |Δ-180|={:.2e}",
                    line.len(),
                    (smallest_difference(dip, rev) - 180.0).abs()
                );
            }
            (Err(err), _) | (_, Err(err)) => println!("sample {index}: {err}"),
        }
    }
}
