//! Hexweave command-line driver
//!
//! Builds a disc-shaped demo grid, runs one of the region algorithms on it
//! and prints the result as JSON.
//!
//! ```text
//! hexweave borders <radius> [hole_q hole_r]
//! hexweave smooth <radius>
//! ```
//!
//! Smoothing reads its kernel from `HEXWEAVE_KERNEL_RADIUS`,
//! `HEXWEAVE_KERNEL_STDDEV` and `HEXWEAVE_MISSING_POLICY`.

use std::collections::HashSet;
use std::env;

use hexweave_grid::{HexGrid, KernelConfig};
use hexweave_topology::HexCoord;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: hexweave borders <radius> [hole_q hole_r] | hexweave smooth <radius>";

enum Command {
    Borders { radius: u32, hole: Option<HexCoord> },
    Smooth { radius: u32 },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, String> {
        let arg = |i: usize, name: &str| -> Result<i64, String> {
            let raw = args.get(i).ok_or_else(|| format!("missing <{name}>\n{USAGE}"))?;
            raw.parse()
                .map_err(|_| format!("<{name}> must be an integer, got '{raw}'"))
        };
        let radius = |i: usize| -> Result<u32, String> {
            u32::try_from(arg(i, "radius")?).map_err(|_| "<radius> must be non-negative".to_string())
        };

        match args.get(1).map(String::as_str) {
            Some("borders") => {
                let hole = match args.len() {
                    3 => None,
                    5 => Some(HexCoord::new(arg(3, "hole_q")?, arg(4, "hole_r")?)),
                    _ => return Err(USAGE.to_string()),
                };
                Ok(Self::Borders {
                    radius: radius(2)?,
                    hole,
                })
            }
            Some("smooth") if args.len() == 3 => Ok(Self::Smooth { radius: radius(2)? }),
            _ => Err(USAGE.to_string()),
        }
    }
}

#[derive(Serialize)]
struct Sample {
    q: i64,
    r: i64,
    input: f64,
    smoothed: f64,
}

fn disc(radius: u32) -> impl Iterator<Item = HexCoord> {
    std::iter::once(HexCoord::ORIGIN).chain(HexCoord::ORIGIN.neighbors(radius))
}

fn borders(radius: u32, hole: Option<HexCoord>) -> Result<String, Box<dyn std::error::Error>> {
    // One ring of padding so the territory edge is not also the grid edge.
    let grid: HexGrid<()> = disc(radius + 1).map(|c| (c, ())).collect();
    let mut territory: HashSet<HexCoord> = disc(radius).collect();
    if let Some(hole) = hole {
        territory.remove(&hole);
    }

    let chains = grid.extract_borders(&territory);
    info!(radius, chains = chains.len(), "traced borders");
    Ok(serde_json::to_string_pretty(&chains)?)
}

fn smooth(radius: u32) -> Result<String, Box<dyn std::error::Error>> {
    let config = KernelConfig::from_env()?;
    let kernel = config.kernel()?;

    // Step field: 1 on the east half, 0 elsewhere.
    let grid: HexGrid<f64> = disc(radius)
        .map(|c| (c, if c.q > 0 { 1.0 } else { 0.0 }))
        .collect();
    let smoothed = kernel.apply_to(&grid, grid.coords(), config.policy)?;

    let mut samples: Vec<Sample> = smoothed
        .iter()
        .map(|(c, value)| Sample {
            q: c.q,
            r: c.r,
            input: grid.get(c).copied().unwrap_or_default(),
            smoothed: *value,
        })
        .collect();
    samples.sort_by_key(|s| HexCoord::new(s.q, s.r));

    info!(radius, kernel_radius = kernel.radius(), cells = samples.len(), "smoothed field");
    Ok(serde_json::to_string_pretty(&samples)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexweave=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let output = match Command::parse(&args)? {
        Command::Borders { radius, hole } => borders(radius, hole)?,
        Command::Smooth { radius } => smooth(radius)?,
    };

    println!("{output}");
    Ok(())
}
