use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use cosmwasm_schema::generate_api;

type TaskResult = Result<(), Box<dyn Error>>;

fn main() -> TaskResult {
    let task = env::args().nth(1);

    match task.as_deref() {
        Some("generate_schemas") => generate_schemas(),
        _ => {
            print_help();
            Ok(())
        }
    }
}

fn print_help() {
    eprintln!(
        "Usage: cargo xtask <task>

Tasks:
  generate_schemas    Generates the JSON schemas of every contract into contracts/<name>/schema"
    );
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Writes `schema` to `contracts/<contract>/schema/<contract>.json`.
fn write_schema(contract: &str, schema: String) -> TaskResult {
    let dir = workspace_root()
        .join("contracts")
        .join(contract)
        .join("schema");
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{contract}.json"));
    fs::write(&path, schema)?;
    println!("Exported {}", path.display());

    Ok(())
}

fn generate_schemas() -> TaskResult {
    use simple_dex_std::{faucet_token, pool};

    let faucet_token_api = generate_api! {
        name: "faucet-token",
        instantiate: faucet_token::InstantiateMsg,
        query: faucet_token::QueryMsg,
        execute: faucet_token::ExecuteMsg,
        migrate: faucet_token::MigrateMsg,
    }
    .render();
    write_schema("faucet-token", faucet_token_api.to_string()?)?;

    let pool_api = generate_api! {
        name: "pool",
        instantiate: pool::InstantiateMsg,
        query: pool::QueryMsg,
        execute: pool::ExecuteMsg,
        migrate: pool::MigrateMsg,
    }
    .render();
    write_schema("pool", pool_api.to_string()?)?;

    // sanity check that the rendered schemas are valid JSON documents
    for contract in ["faucet-token", "pool"] {
        let path = workspace_root()
            .join("contracts")
            .join(contract)
            .join("schema")
            .join(format!("{contract}.json"));
        let _: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    }

    Ok(())
}
