//! Terminal path-walk demo.
//!
//! Run: cargo run --bin walk -- --algorithm bfs --end 7,3 --hole 1,1

use std::path::PathBuf;

use clap::Parser;
use gridwalk_core::Point;
use gridwalk_demos::{
    Avatar, COLUMNS, FRAME_DT, MOVE_SPEED, ROWS, Route, WalkOptions, parse_point, plan, render,
};
use gridwalk_paths::{PathfinderKind, SearchConfig};

#[derive(Parser, Debug)]
#[command(name = "walk", about = "Find a grid path with A* or BFS and walk it")]
struct Args {
    /// Grid rows (extent along y).
    #[arg(long, default_value_t = ROWS)]
    rows: i32,
    /// Grid columns (extent along x).
    #[arg(long, default_value_t = COLUMNS)]
    columns: i32,
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    start: Point,
    #[arg(long, value_parser = parse_point, default_value = "2,2")]
    end: Point,
    /// astar or bfs. Overrides the config file.
    #[arg(long)]
    algorithm: Option<PathfinderKind>,
    /// JSON search config, e.g. {"algorithm":"bfs","bfs_reconstruction":"predecessor"}.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Remove the cell at x,y. Repeatable.
    #[arg(long = "hole", value_parser = parse_point)]
    holes: Vec<Point>,
    /// Avatar speed in cells per second.
    #[arg(long, default_value_t = MOVE_SPEED)]
    speed: f64,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.speed.is_nan() || args.speed <= 0.0 {
        return Err(format!("speed must be positive, got {}", args.speed).into());
    }
    let mut config = match &args.config {
        Some(path) => serde_json::from_str::<SearchConfig>(&std::fs::read_to_string(path)?)?,
        None => SearchConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }

    let opts = WalkOptions {
        rows: args.rows,
        columns: args.columns,
        start: args.start,
        end: args.end,
        holes: args.holes,
        config,
    };
    let mut session = opts.session()?;
    log::info!(
        "searching {}x{} grid from {} to {} with {}",
        opts.columns,
        opts.rows,
        opts.start,
        opts.end,
        session.kind()
    );

    let Route { path, reaches_end } = plan(&mut session, opts.start, opts.end)?;

    print!("{}", render(session.grid(), &path, opts.start, opts.end));
    if path.is_empty() {
        println!("no path from {} to {}", opts.start, opts.end);
        return Ok(());
    }
    println!("{} cells, {} steps, cost {:.1}", path.len(), path.steps(), path.cost());

    let mut avatar = Avatar::at(opts.start, args.speed);
    let frames = avatar.follow(&path, FRAME_DT);
    let secs = frames as f64 * FRAME_DT;
    if reaches_end {
        println!("avatar arrived after {frames} frames ({secs:.2}s)");
    } else if let Some(last) = path.last() {
        println!(
            "avatar stopped at {} after {frames} frames ({secs:.2}s) without reaching {}",
            last.pos(),
            opts.end
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
