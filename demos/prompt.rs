//! RUST_LOG=debug cargo run --example=prompt
//!
//! 値を設定してパスワードを表示し、全消去した後、標準入力からパスワードを読み込む。
//! 読み込みに失敗したら再試行するか尋ねる。

use std::io::{BufRead, Write};

use pwsave::*;

const LEVEL: NumberField = NumberField::new(1000);
const FOUND_ENERGY_TANK1: FlagField = FlagField::new(1000);

fn show(label: &str, data: &PasswordData) -> anyhow::Result<()> {
    println!(
        "{label}: Level={} ETANK1?={}",
        data.small_number(LEVEL)?,
        data.flag(FOUND_ENERGY_TANK1)?
    );
    Ok(())
}

/// パスワードの入力を求め、ロードに成功するか再試行を断られるまで繰り返す。
fn prompt_for_password(
    data: &mut PasswordData,
    input: &mut impl BufRead,
) -> anyhow::Result<bool> {
    let expected = data.expected_password_len();
    loop {
        print!("Enter code ({expected} chars): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        if data.load_from(line.trim()).is_ok() {
            return Ok(true);
        }

        print!("Could not load from password. Try again? [y/N] ");
        std::io::stdout().flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(false);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut data = PasswordData::new();
    data.register_small_number(LEVEL);
    data.register_flag(FOUND_ENERGY_TANK1);
    show("initial data", &data)?;

    let level = std::process::id() % 99 + 1;
    data.set_small_number(LEVEL, level)?;
    data.set_flag(FOUND_ENERGY_TANK1, level % 2 == 0)?;
    show("after setting values", &data)?;
    println!("Password: {}", data.password().display());

    println!("Clearing saved data!");
    data.clear_all_data();
    show("after clearing", &data)?;

    let stdin = std::io::stdin();
    if prompt_for_password(&mut data, &mut stdin.lock())? {
        show("after loading", &data)?;
    }

    Ok(())
}
