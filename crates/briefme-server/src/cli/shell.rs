use crate::cli::{open_store, print_brief_table, print_follow_up_table, print_meeting_table};
use crate::config::BriefMeConfig;
use anyhow::Result;
use briefme_core::render::render;
use briefme_core::{
    handlers, DashboardStore, FollowUpsFilter, LeftRailTab, OpenSection, ViewStatePatch,
};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(name = "briefme", no_binary_name = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShellCommand {
    Dashboard {
        #[arg(long)]
        compact: bool,
    },
    Meetings,
    Briefs,
    FollowUps,
    State,
    Proxy {
        id: String,
    },
    Notes {
        id: String,
    },
    Type {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        text: Vec<String>,
    },
    Save,
    Cancel,
    Check {
        id: String,
    },
    Filter {
        filter: FollowUpsFilter,
    },
    Section {
        section: OpenSection,
    },
    Tab {
        tab: LeftRailTab,
    },
    Brief {
        id: Option<String>,
    },
    Play {
        id: Option<String>,
    },
    More,
    Patch {
        json: String,
    },
}

pub fn run(config: &BriefMeConfig) -> Result<()> {
    let mut store = open_store(config)?;
    let mut rl = DefaultEditor::new()?;

    println!();
    println!("Brief Me shell. {} meetings today.", store.meetings().len());
    println!("Type 'help' for available commands, 'exit' to quit.");
    println!();

    loop {
        match rl.readline("briefme> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if line == "exit" || line == "quit" {
                    println!("Goodbye.");
                    break;
                }

                if line == "help" {
                    print_help();
                    continue;
                }

                match ShellLine::try_parse_from(shell_split(&line)) {
                    Ok(parsed) => {
                        if let Err(e) = execute(&mut store, parsed.command, config) {
                            eprintln!("Error: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(e) => {
                eprintln!("readline error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

fn execute(
    store: &mut DashboardStore,
    command: ShellCommand,
    config: &BriefMeConfig,
) -> Result<()> {
    match command {
        ShellCommand::Dashboard { compact } => {
            let compact = compact || config.render.compact;
            println!("{}", render(&store.snapshot(), compact, config.render.max_chars));
        }
        ShellCommand::Meetings => {
            let panel = store.panel_view();
            print_meeting_table(&panel.schedule);
            if panel.hidden_schedule > 0 {
                println!("({} more, use 'more')", panel.hidden_schedule);
            }
        }
        ShellCommand::Briefs => {
            let panel = store.panel_view();
            print_brief_table(&panel.briefs);
            if !panel.upcoming_briefs.is_empty() {
                println!();
                println!("Upcoming");
                print_brief_table(&panel.upcoming_briefs);
            }
        }
        ShellCommand::FollowUps => {
            let panel = store.panel_view();
            print_follow_up_table(&panel.follow_ups, &store.state());
            if panel.hidden_follow_ups > 0 {
                println!("({} more)", panel.hidden_follow_ups);
            }
        }
        ShellCommand::State => {
            println!("{}", serde_json::to_string_pretty(&*store.state())?);
        }
        ShellCommand::Proxy { id } => {
            if !store.toggle_proxy(&id) {
                anyhow::bail!("no meeting {:?}", id);
            }
            let proxied = store.find_meeting(&id).is_some_and(|m| m.has_proxy);
            println!("{}: proxy {}", id, if proxied { "on" } else { "off" });
        }
        ShellCommand::Notes { id } => {
            if !store.open_notes(&id) {
                anyhow::bail!("no meeting {:?}", id);
            }
            let state = store.state();
            if state.temp_notes.is_empty() {
                println!("Editing notes for {}. Use 'type <text>' then 'save'.", id);
            } else {
                println!("Editing notes for {}: {:?}", id, state.temp_notes);
            }
        }
        ShellCommand::Type { text } => {
            if !store.state().show_instructions_drawer {
                println!("(notes drawer is closed; 'save' will discard this)");
            }
            store.update_state(ViewStatePatch {
                temp_notes: Some(text.join(" ")),
                ..Default::default()
            });
        }
        ShellCommand::Save => {
            let selected = store.state().selected_meeting.as_ref().map(|m| m.id.clone());
            store.save_notes();
            match selected.as_deref().and_then(|id| store.find_meeting(id)) {
                Some(m) if m.has_notes => println!("Saved notes for {}.", m.id),
                Some(m) => println!("Cleared notes for {}.", m.id),
                None => println!("Nothing selected; drawer closed."),
            }
        }
        ShellCommand::Cancel => store.update_state(handlers::close_notes()),
        ShellCommand::Check { id } => {
            if !store.briefs_data().follow_ups.iter().any(|f| f.id == id) {
                anyhow::bail!("no follow-up {:?}", id);
            }
            store.toggle_follow_up(&id);
            let checked = store.state().checked_follow_ups.contains(&id);
            println!("{}: {}", id, if checked { "done" } else { "open" });
        }
        ShellCommand::Filter { filter } => store.update_state(ViewStatePatch {
            follow_ups_filter: Some(filter),
            ..Default::default()
        }),
        ShellCommand::Section { section } => store.update_state(ViewStatePatch {
            open_section: Some(section),
            ..Default::default()
        }),
        ShellCommand::Tab { tab } => store.update_state(ViewStatePatch {
            left_rail_tab: Some(tab),
            ..Default::default()
        }),
        ShellCommand::Brief { id } => {
            let open = id.is_some();
            store.update_state(ViewStatePatch {
                selected_brief: Some(id),
                show_right_drawer: Some(open),
                ..Default::default()
            });
        }
        ShellCommand::Play { id } => {
            // Playing the same brief again stops it.
            let next = match id {
                Some(id) if store.state().playing_brief.as_deref() == Some(id.as_str()) => None,
                other => other,
            };
            match &next {
                Some(id) => println!("▶ {}", id),
                None => println!("■ stopped"),
            }
            store.update_state(ViewStatePatch {
                playing_brief: Some(next),
                ..Default::default()
            });
        }
        ShellCommand::More => {
            let more = !store.state().show_more_today;
            store.update_state(ViewStatePatch {
                show_more_today: Some(more),
                ..Default::default()
            });
        }
        ShellCommand::Patch { json } => {
            let patch = ViewStatePatch::from_json(&json)?;
            let fields = patch.changed_fields();
            store.update_state(patch);
            println!("updated: {}", fields.join(", "));
        }
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  dashboard [--compact]");
    println!("  meetings | briefs | follow-ups | state");
    println!("  proxy <meeting_id>");
    println!("  notes <meeting_id>     open the notes drawer");
    println!("  type <text>            replace the notes buffer");
    println!("  save | cancel          commit or discard the notes buffer");
    println!("  check <follow_up_id>");
    println!("  filter all|current");
    println!("  section briefs|calendar|followups|none");
    println!("  tab briefs|calendar|followups");
    println!("  brief [<brief_id>]     select a brief (no id clears)");
    println!("  play [<brief_id>]");
    println!("  more                   show or hide the rest of today");
    println!("  patch '<json>'         merge a raw view-state patch");
    println!("  exit / quit");
}

/// Simple shell-like word splitting (handles quoted strings).
fn shell_split(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quote_char = ' ';

    for ch in line.chars() {
        if in_quotes {
            if ch == quote_char {
                in_quotes = false;
            } else {
                current.push(ch);
            }
        } else if ch == '"' || ch == '\'' {
            in_quotes = true;
            quote_char = ch;
        } else if ch == ' ' || ch == '\t' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefme_core::DashboardStore;

    fn parse(line: &str) -> ShellCommand {
        ShellLine::try_parse_from(shell_split(line)).unwrap().command
    }

    #[test]
    fn test_shell_split_quotes() {
        assert_eq!(
            shell_split(r#"patch '{"showMoreToday": true}'"#),
            vec!["patch", r#"{"showMoreToday": true}"#]
        );
        assert_eq!(shell_split("  type  hello   world "), vec!["type", "hello", "world"]);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("proxy m3"), ShellCommand::Proxy { id: "m3".into() });
        assert_eq!(
            parse("filter current"),
            ShellCommand::Filter { filter: FollowUpsFilter::Current }
        );
        assert_eq!(
            parse("section follow-ups"),
            ShellCommand::Section { section: OpenSection::Followups }
        );
        assert_eq!(parse("play"), ShellCommand::Play { id: None });
        assert_eq!(
            parse("type push for -B variant"),
            ShellCommand::Type {
                text: vec!["push".into(), "for".into(), "-B".into(), "variant".into()]
            }
        );
        assert!(ShellLine::try_parse_from(shell_split("filter sometimes")).is_err());
    }

    #[test]
    fn test_notes_session() {
        let config = BriefMeConfig::default();
        let mut store = DashboardStore::sample();

        execute(&mut store, parse("notes m4"), &config).unwrap();
        execute(&mut store, parse("type Ask about the Q3 roadmap"), &config).unwrap();
        execute(&mut store, parse("save"), &config).unwrap();

        let m4 = store.find_meeting("m4").unwrap();
        assert!(m4.has_notes);
        assert_eq!(m4.notes(), "Ask about the Q3 roadmap");
        assert!(!store.state().show_instructions_drawer);
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let config = BriefMeConfig::default();
        let mut store = DashboardStore::sample();
        assert!(execute(&mut store, parse("proxy m99"), &config).is_err());
        assert!(execute(&mut store, parse("check f99"), &config).is_err());
        assert_eq!(store.meetings_version(), 0);
    }

    #[test]
    fn test_play_toggles() {
        let config = BriefMeConfig::default();
        let mut store = DashboardStore::sample();
        execute(&mut store, parse("play b1"), &config).unwrap();
        assert_eq!(store.state().playing_brief.as_deref(), Some("b1"));
        execute(&mut store, parse("play b1"), &config).unwrap();
        assert!(store.state().playing_brief.is_none());
    }

    #[test]
    fn test_patch_command() {
        let config = BriefMeConfig::default();
        let mut store = DashboardStore::sample();
        let line = r#"patch '{"currentStatus": "focus", "showMoreToday": true}'"#;
        execute(&mut store, parse(line), &config).unwrap();
        let state = store.state();
        assert_eq!(state.current_status, "focus");
        assert!(state.show_more_today);
        assert!(execute(&mut store, parse(r#"patch '{"bogus": 1}'"#), &config).is_err());
    }
}
