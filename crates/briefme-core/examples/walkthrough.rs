//! Example: one pass through the home dashboard
//!
//! Run with: RUST_LOG=debug cargo run --example walkthrough

use briefme_core::render::render;
use briefme_core::{DashboardStore, FollowUpsFilter, ViewStatePatch};

fn main() {
    env_logger::init();

    let mut store = DashboardStore::sample();

    println!("📋 Brief Me walkthrough\n");
    println!("{}", render(&store.snapshot(), true, 8000));

    let next = match store.meetings_data().next_meeting.clone() {
        Some(m) => m,
        None => {
            println!("Nothing coming up.");
            return;
        }
    };

    println!("Sending a proxy to {}...", next.title);
    store.toggle_proxy(&next.id);
    store.open_notes(&next.id);
    store.update_state(ViewStatePatch {
        temp_notes: Some("Ask about the latency numbers.".into()),
        ..Default::default()
    });
    store.save_notes();

    println!("Clearing the first follow-up...\n");
    store.toggle_follow_up("f1");
    store.update_state(ViewStatePatch {
        follow_ups_filter: Some(FollowUpsFilter::Current),
        ..Default::default()
    });

    println!("{}", render(&store.snapshot(), false, 8000));
    println!(
        "Meeting views computed {} time(s) across {} collection versions.",
        store.recomputations(),
        store.meetings_version() + 1
    );
}
