use crate::cli::{open_store, print_follow_up_table, FollowUpsArgs};
use crate::config::BriefMeConfig;
use anyhow::Result;
use briefme_core::ViewStatePatch;

pub fn run(args: FollowUpsArgs, config: &BriefMeConfig) -> Result<()> {
    let mut store = open_store(config)?;

    for id in &args.checked {
        store.toggle_follow_up(id);
    }
    store.update_state(ViewStatePatch {
        follow_ups_filter: Some(args.filter),
        show_all_follow_ups: Some(true),
        ..Default::default()
    });

    let panel = store.panel_view();
    let state = store.state();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&panel.follow_ups)?),
        _ => {
            println!("Follow-ups ({})", state.follow_ups_filter);
            print_follow_up_table(&panel.follow_ups, &state);
        }
    }

    Ok(())
}
