//! End-to-end tests for the interactive loop

mod common;

use common::{FakeRepository, Harness};
use gitcli::repl::Outcome;
use gitcli_core::MessageStyle;
use std::fs;

#[test]
fn end_of_input_persists_history_and_aliases() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    let repl = harness.run("alias st status\nst\n");

    assert_eq!(repl.history().snapshot(), vec!["alias st status", "st"]);
    assert_eq!(
        fs::read_to_string(harness.history_path()).expect("Failed to read history"),
        "alias st status\nst\n"
    );
    assert_eq!(
        fs::read_to_string(harness.alias_path()).expect("Failed to read aliases"),
        "st=status\n"
    );
    assert_eq!(harness.repository.calls(), vec!["status"]);

    let info = harness.output.texts(MessageStyle::Info);
    assert!(info.contains(&"Saving configuration...".to_string()));
    assert_eq!(info.last().map(String::as_str), Some("Goodbye!"));
}

#[test]
fn exit_stops_reading_and_still_persists() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("help\nquit\nstatus\n");

    assert!(harness.repository.calls().is_empty());
    assert_eq!(
        fs::read_to_string(harness.history_path()).expect("Failed to read history"),
        "help\nquit\n"
    );
    assert!(harness.output.contains("=== Git CLI Tool Help ==="));
    assert!(harness.output.contains("Goodbye!"));
}

#[test]
fn invalid_utf8_line_does_not_lose_state() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    let repl = harness.run_bytes(b"alias st status\n\xff\xfe\npwd\n");

    let history = repl.history().snapshot();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2], "pwd");
    let saved = fs::read_to_string(harness.history_path()).expect("Failed to read history");
    assert!(saved.starts_with("alias st status\n"));
    assert!(saved.ends_with("pwd\n"));
    assert_eq!(
        fs::read_to_string(harness.alias_path()).expect("Failed to read aliases"),
        "st=status\n"
    );
    assert!(harness.output.contains("Goodbye!"));
}

#[test]
fn blank_lines_are_not_recorded() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    let repl = harness.run("\n   \npwd\n\n");
    assert_eq!(repl.history().snapshot(), vec!["pwd"]);
}

#[test]
fn prompt_shows_branch_or_no_git() {
    let mut harness = Harness::new(FakeRepository::on_branch("feature"));
    harness.run("");
    assert_eq!(harness.output.texts(MessageStyle::Prompt), vec!["[feature] > "]);

    let mut outside = Harness::new(FakeRepository::outside_repository());
    outside.run("pwd\n");
    assert_eq!(
        outside.output.texts(MessageStyle::Prompt),
        vec!["[no-git] > ", "[no-git] > "]
    );
}

#[test]
fn unknown_command_suggests_and_continues() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("stat\npwd\n");

    assert_eq!(
        harness.output.texts(MessageStyle::Error),
        vec!["Unknown command: stat"]
    );
    let info = harness.output.texts(MessageStyle::Info);
    assert!(info.contains(&"Did you mean 'status'?".to_string()));
    assert!(info.contains(&"Type 'help' for available commands".to_string()));

    let cwd = harness.work.path().display().to_string();
    assert!(harness.output.texts(MessageStyle::Output).contains(&cwd));
}

#[test]
fn git_verbs_outside_repository_print_notice() {
    let mut harness = Harness::new(FakeRepository::outside_repository());
    harness.run("status\ndiff\nbranch\n");

    assert_eq!(
        harness.output.texts(MessageStyle::Info)
            .iter()
            .filter(|line| *line == "Not in a git repository")
            .count(),
        3
    );
    assert!(harness.output.contains("Goodbye!"));
}

#[test]
fn alias_expansion_is_single_level() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("alias a b\nalias b status\na\n");

    assert!(harness.repository.calls().is_empty());
    assert!(
        harness
            .output
            .texts(MessageStyle::Error)
            .contains(&"Unknown command: b".to_string())
    );
}

#[test]
fn alias_name_with_equals_is_refused() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("alias a=b status\nalias ok pull\n");

    assert_eq!(
        harness.output.texts(MessageStyle::Error),
        vec!["Alias name cannot contain '=': a=b"]
    );
    let reloaded = harness.run("");
    assert_eq!(reloaded.aliases().list(), vec![("ok", "pull")]);
    assert_eq!(reloaded.aliases().get("a"), None);
}

#[test]
fn alias_forwards_trailing_arguments() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("alias ci commit -m\nci \"ship it\"\n");
    assert_eq!(harness.repository.calls(), vec!["commit ship it"]);
}

#[test]
fn alias_listing_lookup_and_removal() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("alias\nalias st status\nalias co checkout\nalias st\nalias\nunalias co\nunalias co\nalias zz\n");

    let output = harness.output.transcript();
    assert!(output.contains("No aliases defined"));
    assert!(output.contains("Alias created: st -> status"));
    assert!(output.contains("st -> status"));
    assert!(output.contains("Defined aliases:\n  co -> checkout\n  st -> status"));
    assert!(output.contains("Alias removed: co"));
    assert!(output.contains("Alias not found: co"));
    assert!(output.contains("Alias not found: zz"));
    assert_eq!(
        fs::read_to_string(harness.alias_path()).expect("Failed to read aliases"),
        "st=status\n"
    );
}

#[test]
fn search_ranks_history_matches() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("git status\ngit commit\nstatus check\nsearch stat\nsearch zzz\nsearch\n");

    let output = harness.output.transcript();
    assert!(output.contains("Search results:\n1. status check\n2. git status"));
    assert!(!output.contains("3. search stat"));
    assert!(!output.contains(". git commit"));
    assert!(output.contains("No matching commands found"));
    assert!(output.contains("Usage: search <query>"));
}

#[test]
fn search_results_respect_display_limit() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.config.search.display_limit = 1;
    harness.run("status check\ngit status\nsearch stat\n");

    let output = harness.output.transcript();
    assert!(output.contains("Search results:\n1. status check"));
    assert!(!output.contains("2. "));
}

#[test]
fn history_shows_recent_entries_with_positions() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    fs::write(harness.history_path(), "old one\nold two\n").expect("Failed to seed history");
    harness.config.history.display_limit = 2;
    harness.run("history\n");

    assert!(
        harness
            .output
            .transcript()
            .contains("Command History:\n2. old two\n3. history")
    );
}

#[test]
fn handle_line_reports_loop_outcome() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    let mut repl = harness.repl();

    assert_eq!(repl.handle_line("   ").expect("Blank line failed"), Outcome::Continue);
    assert!(repl.history().is_empty());
    assert_eq!(repl.handle_line("EXIT").expect("Exit failed"), Outcome::Exit);
    assert_eq!(repl.history().snapshot(), vec!["EXIT"]);
    assert_eq!(repl.prompt(), "[main] > ");
}

#[test]
fn commit_requires_message_and_strips_quotes() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("commit\nci -m\ncommit -m \"first commit\"\n");

    assert_eq!(harness.repository.calls(), vec!["commit first commit"]);
    let info = harness.output.texts(MessageStyle::Info);
    assert_eq!(
        info.iter()
            .filter(|line| *line == "Commit message required")
            .count(),
        2
    );
    assert!(harness.output.contains("Committed: first commit"));
}

#[test]
fn branch_subcommands_route_to_repository() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("branch create\nbranch -c feature\nbr delete\nbr -d feature\nbranch\nbranch bogus\n");

    assert_eq!(
        harness.repository.calls(),
        vec![
            "create_branch feature",
            "delete_branch feature",
            "list_branches",
            "list_branches"
        ]
    );
    let output = harness.output.transcript();
    assert!(output.contains("Usage: branch create <branch-name>"));
    assert!(output.contains("Usage: branch delete <branch-name>"));
    assert!(output.contains("Created branch: feature"));
}

#[test]
fn checkout_and_log_arguments_are_validated() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("co\nco dev\nlog\nlog 3\nlog lots\n");

    assert_eq!(
        harness.repository.calls(),
        vec!["checkout dev", "log 10", "log 3"]
    );
    let output = harness.output.transcript();
    assert!(output.contains("Branch name required"));
    assert!(output.contains("Usage: log [count]"));
}

#[test]
fn git_failures_are_reported_on_error_stream() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("push\npull\n");

    assert_eq!(
        harness.output.texts(MessageStyle::Error),
        vec!["Error pushing: no remote configured"]
    );
    assert!(harness.output.contains("Pulled from remote"));
}

#[test]
fn add_passes_paths_through() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("add\nadd src/lib.rs README.md\n");
    assert_eq!(
        harness.repository.calls(),
        vec!["stage ", "stage src/lib.rs README.md"]
    );
}

#[test]
fn cd_and_ls_use_shell_working_directory() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    fs::create_dir(harness.work.path().join("sub")).expect("Failed to create dir");
    fs::write(harness.work.path().join("sub/notes.txt"), "x").expect("Failed to write file");
    fs::create_dir(harness.work.path().join("sub/nested")).expect("Failed to create dir");
    let before = std::env::current_dir().expect("Failed to read cwd");

    harness.run("cd sub\nls\ncd missing\ncd\npwd\n");

    let output = harness.output.transcript();
    let sub = harness.work.path().join("sub");
    assert!(output.contains(&format!("Changed directory to: {}", sub.display())));
    assert!(output.contains("[DIR]  nested\n[FILE] notes.txt"));
    assert_eq!(
        harness.output.texts(MessageStyle::Error),
        vec!["Directory not found: missing"]
    );
    let home = harness.home.path().display().to_string();
    assert!(harness.output.texts(MessageStyle::Output).contains(&home));
    assert_eq!(std::env::current_dir().expect("Failed to read cwd"), before);
}

#[test]
fn exec_requires_arguments() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("exec\n");
    assert!(harness.output.contains("Usage: exec <command>"));
}

#[cfg(unix)]
#[test]
fn exec_reports_non_zero_exit() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.run("exec true\nexec false\n");
    assert_eq!(
        harness.output.texts(MessageStyle::Error),
        vec!["Command exited with code: 1"]
    );
}

#[test]
fn banner_is_printed_unless_disabled() {
    let mut harness = Harness::new(FakeRepository::on_branch("main"));
    harness.config.ui.show_banner = true;
    harness.run("");
    assert!(harness.output.contains("Git CLI Workflow Automation"));

    let mut quiet = Harness::new(FakeRepository::on_branch("main"));
    quiet.run("");
    assert!(!quiet.output.contains("Git CLI Workflow Automation"));
}
