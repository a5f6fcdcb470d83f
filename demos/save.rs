//! cargo run --example=save -- 42 true
//!
//! レベルとエネルギータンク取得フラグからパスワードを生成する。

use pwsave::*;

const LEVEL: NumberField = NumberField::new(1000);
const FOUND_ENERGY_TANK1: FlagField = FlagField::new(1000);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let level: i64 = args.next().as_deref().unwrap_or("1").parse()?;
    let found: bool = args.next().as_deref().unwrap_or("false").parse()?;

    let mut data = PasswordData::new();
    data.register_small_number(LEVEL);
    data.register_flag(FOUND_ENERGY_TANK1);

    data.set_small_number(LEVEL, level)?;
    data.set_flag(FOUND_ENERGY_TANK1, found)?;

    println!("Level={level} ETANK1?={found}");
    println!("Password: {}", data.password().display());

    Ok(())
}
