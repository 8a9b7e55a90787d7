//! Terminal Pong runner (default binary).
//!
//! Two players share one keyboard: `Q`/`A` for the left paddle, `P`/`L` for
//! the right one. First to 11 wins; `R` starts a new match, `Esc` quits.

use anyhow::Result;

use tui_pong::{logging, App, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut app = App::start(&config)?;
    app.run()?;

    let [left, right] = app.state().scoreboard().scores();
    log::info!("exiting with score {left}-{right}");
    Ok(())
}
