use core::{shapes_for, EditorSession, FormationShape, SquadSize};
use env_logger::Env;
use log::{info, warn};
use std::env;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let squad_size = env::var("SQUAD_SIZE")
        .ok()
        .and_then(|value| value.parse::<u8>().ok())
        .and_then(SquadSize::from_player_count)
        .unwrap_or(SquadSize::Eleven);

    let mut session = EditorSession::new(squad_size);

    if let Ok(shape) = env::var("FORMATION") {
        if !shapes_for(squad_size).contains(&shape.as_str()) {
            warn!("shape {} is not catalogued for {}", shape, squad_size);
        }

        session.set_shape(FormationShape::from(shape));
    }

    info!(
        "formation builder: {} squad, shape {}",
        session.squad_size(),
        session.shape()
    );

    let view = session.view();

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
