pub mod briefs;
pub mod config_cmd;
pub mod dashboard;
pub mod follow_ups;
pub mod meetings;
pub mod shell;

use crate::config::BriefMeConfig;
use briefme_core::{
    Brief, DashboardSource, DashboardStore, FollowUp, FollowUpsFilter, Meeting, ViewState,
};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "briefme")]
#[command(version, about = "Daily briefing dashboard: briefs, today's meetings and follow-ups")]
pub struct Cli {
    /// Path to briefme.toml
    #[arg(
        long,
        global = true,
        env = "BRIEFME_CONFIG",
        default_value = "briefme.toml"
    )]
    pub config: PathBuf,

    /// HTTP listen address (overrides config file)
    #[arg(long, global = true, env = "BRIEFME_HTTP_ADDR")]
    pub http_addr: Option<SocketAddr>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve,
    /// Interactive REPL over a local dashboard
    Shell,
    /// Render the home dashboard
    Dashboard(DashboardArgs),
    /// Today's meetings, in schedule order
    Meetings(MeetingsArgs),
    /// Recent (or all) briefs
    Briefs(BriefsArgs),
    /// Follow-ups awaiting action
    FollowUps(FollowUpsArgs),
    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Validate,
    Show,
}

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Use the compact renderer
    #[arg(long)]
    pub compact: bool,
    /// Output format: text (default) | markdown | json
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct MeetingsArgs {
    /// Only meetings starting within the next two hours
    #[arg(long)]
    pub upcoming: bool,
    /// Output format: table (default) | json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct BriefsArgs {
    /// Show every brief instead of the most recent three
    #[arg(long)]
    pub all: bool,
    /// Include briefs scheduled for later today
    #[arg(long)]
    pub upcoming: bool,
    /// Output format: table (default) | json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct FollowUpsArgs {
    /// all (default) | current
    #[arg(long, default_value = "all")]
    pub filter: FollowUpsFilter,
    /// Follow-up ids to treat as already checked
    #[arg(long, value_delimiter = ',')]
    pub checked: Vec<String>,
    /// Output format: table (default) | json
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// A store over the built-in sample data, sized by the loaded config.
pub fn open_store(config: &BriefMeConfig) -> anyhow::Result<DashboardStore> {
    let dashboard = config.dashboard_config();
    dashboard.validate()?;
    Ok(DashboardStore::new(DashboardSource::sample(), dashboard))
}

// --- Table output ---

pub fn print_meeting_table(meetings: &[Meeting]) {
    if meetings.is_empty() {
        println!("(no meetings)");
        return;
    }
    println!(
        "{:<4}  {:<9}  {:<8}  {:>6}  {:<36}  {}",
        "ID", "TIME", "LENGTH", "IN", "TITLE", "FLAGS"
    );
    for m in meetings {
        println!(
            "{:<4}  {:<9}  {:<8}  {:>6}  {:<36}  {}",
            m.id,
            m.time,
            m.duration,
            format!("{}m", m.minutes_until),
            truncate(&m.title, 36),
            meeting_flags(m)
        );
    }
}

pub fn print_brief_table(briefs: &[Brief]) {
    if briefs.is_empty() {
        println!("(no briefs)");
        return;
    }
    println!(
        "{:<4}  {:<28}  {:<20}  {:>6}  {:>6}  {:>7}",
        "ID", "NAME", "WINDOW", "SLACK", "EMAIL", "ACTIONS"
    );
    for b in briefs {
        println!(
            "{:<4}  {:<28}  {:<20}  {:>6}  {:>6}  {:>7}",
            b.id,
            truncate(&b.name, 28),
            truncate(&b.time_range, 20),
            b.slack_messages.total,
            b.emails.total,
            b.action_items
        );
    }
}

pub fn print_follow_up_table(follow_ups: &[FollowUp], state: &ViewState) {
    if follow_ups.is_empty() {
        println!("(no follow-ups)");
        return;
    }
    println!(
        "{:<3}  {:<4}  {:<2}  {:<6}  {:<20}  {}",
        "", "ID", "", "PRIO", "FROM", "MESSAGE"
    );
    for f in follow_ups {
        let checked = if state.checked_follow_ups.contains(&f.id) {
            "[x]"
        } else {
            "[ ]"
        };
        println!(
            "{:<3}  {:<4}  {:<2}  {:<6}  {:<20}  {}",
            checked,
            f.id,
            f.platform.tag(),
            f.priority.as_str(),
            truncate(&f.sender, 20),
            truncate(&f.message, 50)
        );
    }
}

fn meeting_flags(m: &Meeting) -> String {
    let mut flags = Vec::new();
    if m.has_proxy {
        flags.push("proxy");
    }
    if m.has_notes {
        flags.push("notes");
    }
    if m.is_recording {
        flags.push("rec");
    }
    if m.summary_ready {
        flags.push("summary");
    }
    flags.join(",")
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max - 1).collect::<String>())
    }
}
