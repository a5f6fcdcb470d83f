//! cargo run --example=load -- 'MMN80'

use anyhow::Context as _;
use pwsave::*;

const LEVEL: NumberField = NumberField::new(1000);
const FOUND_ENERGY_TANK1: FlagField = FlagField::new(1000);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let password = std::env::args()
        .nth(1)
        .context("Usage: load <password>")?;

    let mut data = PasswordData::new();
    data.register_small_number(LEVEL);
    data.register_flag(FOUND_ENERGY_TANK1);

    match data.load_from(&password) {
        Ok(()) => println!(
            "Level={} ETANK1?={}",
            data.small_number(LEVEL)?,
            data.flag(FOUND_ENERGY_TANK1)?
        ),
        Err(e) => println!("could not load: {e}"),
    }

    Ok(())
}
