//! Run with: cargo run --bin connection_strings [local|remote|docker]

use envecho::config::database::{ConnectionStrings, Deployment};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let urls = ConnectionStrings::from_env();

    match std::env::args().nth(1) {
        Some(name) => {
            let deployment: Deployment = name.parse()?;
            println!("{}", urls.url_for(deployment));
        }
        None => println!("{}", serde_json::to_string_pretty(&urls)?),
    }

    Ok(())
}
