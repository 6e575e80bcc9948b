use crate::cli::{open_store, print_brief_table, BriefsArgs};
use crate::config::BriefMeConfig;
use anyhow::Result;

pub fn run(args: BriefsArgs, config: &BriefMeConfig) -> Result<()> {
    let store = open_store(config)?;
    let data = store.briefs_data();

    let briefs = if args.all {
        &data.all_briefs
    } else {
        &data.recent_briefs
    };

    match args.format.as_str() {
        "json" => {
            let upcoming = if args.upcoming {
                data.upcoming_briefs.as_slice()
            } else {
                &[]
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "briefs": briefs,
                    "upcoming": upcoming,
                    "total": data.all_briefs.len(),
                }))?
            );
        }
        _ => {
            print_brief_table(briefs);
            if !args.all && data.all_briefs.len() > briefs.len() {
                println!("({} more, use --all)", data.all_briefs.len() - briefs.len());
            }
            if args.upcoming {
                println!();
                println!("Upcoming");
                print_brief_table(&data.upcoming_briefs);
            }
        }
    }

    Ok(())
}
