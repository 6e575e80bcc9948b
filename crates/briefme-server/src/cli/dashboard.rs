use crate::cli::{open_store, DashboardArgs};
use crate::config::BriefMeConfig;
use anyhow::Result;
use briefme_core::render::render;

pub fn run(args: DashboardArgs, config: &BriefMeConfig) -> Result<()> {
    let store = open_store(config)?;
    let snapshot = store.snapshot();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        "markdown" => println!("{}", render(&snapshot, false, config.render.max_chars)),
        _ => {
            let compact = args.compact || config.render.compact;
            println!("{}", render(&snapshot, compact, config.render.max_chars));
        }
    }

    Ok(())
}
