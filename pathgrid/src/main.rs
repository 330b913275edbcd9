//! pathgrid: generate a random board, search it, print the result.
//!
//! Usage: `pathgrid [config.toml]`

use log::info;
use pathgrid_lib::{Session, SessionConfig, logger};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    logger::init(config.logging.level_filter()?)?;

    let mut session = Session::new(&config)?;
    let walls = match config.grid.seed {
        Some(seed) => session.regenerate(&mut StdRng::seed_from_u64(seed))?,
        None => session.regenerate(&mut rand::rng())?,
    };
    let (w, h) = session.window_size();
    info!(
        "{0}x{0} board ({w}x{h} px), {walls} walls",
        config.grid.size
    );

    let moves = session.solve()?.map(|route| route.len() - 1);
    print!("{}", session.render_text());
    match moves {
        Some(n) => println!("Path found: {n} moves"),
        None => println!("No path found"),
    }
    Ok(())
}
