use crate::cli::{open_store, print_meeting_table, MeetingsArgs};
use crate::config::BriefMeConfig;
use anyhow::Result;

pub fn run(args: MeetingsArgs, config: &BriefMeConfig) -> Result<()> {
    let store = open_store(config)?;
    let data = store.meetings_data();

    let meetings = if args.upcoming {
        &data.upcoming_meetings
    } else {
        &data.all_meetings
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(meetings)?),
        _ => {
            match &data.next_meeting {
                Some(next) => println!(
                    "Next: {} at {} (in {} min)\n",
                    next.title, next.time, next.minutes_until
                ),
                None => println!("Nothing in the next two hours.\n"),
            }
            print_meeting_table(meetings);
        }
    }

    Ok(())
}
