use std::env;
use std::fs;
use std::process;

use alert_core::AlertDraft;
use composer::AlertComposer;
use dispatcher::{Dispatch, LogDispatcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let draft_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: send_alert <draft.json>");
            process::exit(1);
        }
    };

    let draft_data = fs::read_to_string(&draft_path)?;
    let draft: AlertDraft = serde_json::from_str(&draft_data)?;

    let composer = AlertComposer::senegal();
    let report = composer.validate(&draft);
    if !report.is_valid() {
        eprintln!("Draft is not sendable: {}", report);
        process::exit(1);
    }

    let payload = composer.build_payload(&draft)?;
    let receipt = LogDispatcher::new().dispatch(&payload)?;

    println!("{}", receipt.confirmation);
    Ok(())
}
