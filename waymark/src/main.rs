//! waymark: plan the cheapest route through a tile world and its regions.

mod logging;
mod render;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use waymark_core::{Grid, TerrainCosts};
use waymark_route::{
    GridName, PlanError, PlanWorker, Planner, PlannerConfig, RegionId, ScanOrder, Strategy,
};

#[derive(Parser, Debug)]
#[command(name = "waymark", version, about = "Plan the cheapest route through a tile world")]
struct Cli {
    /// World grid CSV with start (L), destination (LW) and entrances (MA)
    #[arg(long)]
    world: PathBuf,
    /// Region grid CSVs, one per entrance, in entrance id order
    #[arg(long, num_args = 1..)]
    region: Vec<PathBuf>,
    /// JSON terrain cost table: {"costs": {"G": 10, ...}, "impassable": "X"}
    #[arg(long)]
    costs: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = StrategyArg::Search)]
    strategy: StrategyArg,
    /// Row order used to number region entrances
    #[arg(long, value_enum, default_value_t = ScanArg::Forward)]
    scan_order: ScanArg,
    /// Print the full planning result as JSON
    #[arg(long)]
    json: bool,
    /// Log filter when RUST_LOG is unset (default: info)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Search,
    Exhaustive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Search => Strategy::StateSearch,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScanArg {
    Forward,
    Reverse,
}

impl From<ScanArg> for ScanOrder {
    fn from(arg: ScanArg) -> Self {
        match arg {
            ScanArg::Forward => ScanOrder::RowMajor,
            ScanArg::Reverse => ScanOrder::ReverseRows,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let world = load_grid(&cli.world, GridName::World)?;
    let regions = cli
        .region
        .iter()
        .enumerate()
        .map(|(i, path)| load_grid(path, GridName::Region(RegionId(i as u32 + 1))))
        .collect::<Result<Vec<_>, _>>()?;
    let costs = match &cli.costs {
        Some(path) => load_costs(path)?,
        None => TerrainCosts::default(),
    };

    let planner = Planner::new(PlannerConfig {
        costs,
        strategy: cli.strategy.into(),
        scan_order: cli.scan_order.into(),
    });
    let result = PlanWorker::spawn(planner, world.clone(), regions).wait()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::summary(&world, &result));
    }
    Ok(())
}

fn load_grid(path: &Path, name: GridName) -> Result<Grid<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("reading {name} from {}: {e}", path.display()))?;
    let grid = Grid::parse_delimited(&text, ',')
        .map_err(|source| PlanError::Jagged { grid: name, source })?;
    log::debug!(
        "loaded {name}: {}x{} from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

fn load_costs(path: &Path) -> Result<TerrainCosts, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("reading cost table {}: {e}", path.display()))?;
    let costs = serde_json::from_str(&text)
        .map_err(|e| format!("parsing cost table {}: {e}", path.display()))?;
    Ok(costs)
}
