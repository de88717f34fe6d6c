// tests/cli_args.rs
//
// Argument parsing and command output without touching stdout.
//
use fpl_rules::cli::{execute, parse_args};
use fpl_rules::config::options::Command;
use fpl_rules::kb::{DumpTarget, Section};

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn run(cmd: &Command) -> String {
    let mut buf = Vec::new();
    execute(cmd, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn commands_keep_command_line_order() {
    let opts = parse_args(args(&["--list-terms", "-q", "captain", "--dump", "scoring"])).unwrap();
    assert_eq!(opts.commands, vec![
        Command::ListTerms,
        Command::Search("captain".into()),
        Command::Dump(DumpTarget::Section(Section::Scoring)),
    ]);
    assert!(!opts.help);
}

#[test]
fn empty_query_is_legal_missing_query_is_not() {
    let opts = parse_args(args(&["--query", ""])).unwrap();
    assert_eq!(opts.commands, vec![Command::Search(String::new())]);

    let err = parse_args(args(&["--query"])).unwrap_err();
    assert!(err.to_string().contains("query is missing"));
}

#[test]
fn bad_args_are_errors() {
    assert!(parse_args(args(&["--bogus"])).is_err());
    assert!(parse_args(args(&["--dump", "fixtures"])).is_err());
    assert!(parse_args(args(&["--filter-terms"])).is_err());
}

#[test]
fn no_args_means_nothing_to_do() {
    let opts = parse_args(Vec::new()).unwrap();
    assert!(opts.is_empty());
    assert!(!parse_args(args(&["-h"])).unwrap().is_empty());
}

#[test]
fn search_prints_engine_output() {
    let out = run(&Command::Search("xg".into()));
    assert_eq!(out, "Term: xG - Expected Goals - statistical measure of the quality of goal-scoring chances.\n");
}

#[test]
fn filter_terms_prints_tab_separated_rows() {
    let out = run(&Command::FilterTerms("bank".into()));
    assert_eq!(out, "ITB\tIn The Bank - money not spent on your squad, available for future transfers.\n");

    let all = run(&Command::ListTerms);
    assert_eq!(all.lines().count(), 28);
    assert!(all.starts_with("BGW\t"));
}

#[test]
fn dump_is_ordered_json() {
    let out = run(&Command::Dump(DumpTarget::Section(Section::TeamRules)));
    let budget = out.find("\"budget\"").unwrap();
    let limit = out.find("\"team_limit\"").unwrap();
    assert!(budget < limit);
    assert!(out.starts_with("{\n  \"budget\""));

    let terms = run(&Command::Dump(DumpTarget::Terms));
    assert!(terms.starts_with("{\n  \"BGW\": \"Blank Gameweek"));

    let rules = run(&Command::Dump(DumpTarget::Rules));
    assert!(rules.contains("\"blank_gameweeks\""));
}
