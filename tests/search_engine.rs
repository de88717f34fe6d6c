// tests/search_engine.rs
//
// Behaviour of `search` over the built-in knowledge base.
//
use std::thread;

use fpl_rules::config::consts::{NO_MATCH, RESULT_SEP};
use fpl_rules::kb::{self, Section};
use fpl_rules::{search, search_input, QueryEngine, QueryError};

const SCORING_LABEL: &str = "Complete Scoring Rules:";
const TEAM_LABEL: &str = "Complete Team Rules:";

fn blocks(q: &str) -> Vec<String> {
    QueryEngine::default().matches(q)
}

#[test]
fn same_query_same_output() {
    assert_eq!(search("captain"), search("captain"));
    assert_eq!(search("points"), search("points"));
}

#[test]
fn case_is_ignored() {
    assert_eq!(search("GOAL"), search("goal"));
    assert_eq!(search("Wildcard"), search("wILDCARD"));
}

#[test]
fn miss_returns_only_the_sentinel() {
    assert_eq!(search("zzz_nonexistent_xyz"), NO_MATCH);
    assert!(blocks("zzz_nonexistent_xyz").is_empty());
}

#[test]
fn empty_query_matches_every_entry() {
    let out = blocks("");
    let leaves = kb::rules().leaf_count();
    // every leaf and every term; no keyword is contained in ""
    assert_eq!(out.len(), leaves + kb::terms().len());
    assert_eq!(out.len(), 60);
    assert!(!search("").contains(SCORING_LABEL));
    assert!(!search("").contains(TEAM_LABEL));
}

#[test]
fn one_scoring_block_even_with_many_keywords() {
    // "goal", "score" and "point" are all scoring keywords
    for q in ["goal", "goal score points", "bonus yellow red card"] {
        let out = search(q);
        assert_eq!(out.matches(SCORING_LABEL).count(), 1, "query {q:?}");
    }
}

#[test]
fn sections_expand_independently() {
    let out = blocks("captain points");
    // nothing in the tree contains the whole phrase; only the two expansions
    assert_eq!(out.len(), 2);
    assert!(out[0].starts_with(SCORING_LABEL));
    assert!(out[1].starts_with(TEAM_LABEL));

    let out = search("chips");
    assert!(out.contains(TEAM_LABEL));
    assert!(!out.contains(SCORING_LABEL));
}

#[test]
fn three_level_path_for_forward() {
    let out = blocks("forward");
    assert_eq!(out[0], "Scoring - Goals - Forward: Forwards get 4 points per goal scored.");
    assert_eq!(out[1], "Scoring - Clean_sheets - Forward: Forwards don't get points for clean sheets.");
    // "forwards" also occurs in two team rules
    assert_eq!(out.len(), 4);
    assert!(out[2].starts_with("Team_rules - Squad_size: "));
    assert!(out[3].starts_with("Team_rules - Formation: "));
}

#[test]
fn definition_text_is_searched_not_just_terms() {
    let out = blocks("double points");
    assert_eq!(
        out[0],
        "Team_rules - Captaincy: Captain scores double points. Vice-captain is automatic replacement if captain doesn't play."
    );
    // TC says "triples captain's points", which does not contain the phrase
    assert!(!out.iter().any(|b| b.starts_with("Term: TC")));
    // "point" pulls in the scoring table
    assert_eq!(out.len(), 2);
    assert!(out[1].starts_with(SCORING_LABEL));

    let out = blocks("expected");
    let terms: Vec<&str> = out.iter().map(String::as_str).collect();
    assert_eq!(terms, vec![
        "Term: xG - Expected Goals - statistical measure of the quality of goal-scoring chances.",
        "Term: xA - Expected Assists - statistical measure of the quality of chances created.",
        "Term: xMins - Expected Minutes - predicted playing time for a player.",
    ]);
}

#[test]
fn rules_then_terms_then_expansions() {
    let out = blocks("wildcard");
    assert_eq!(out.len(), 5);
    assert!(out[0].starts_with("Team_rules - Chips - Wildcard: "));
    assert!(out[1].starts_with("Team_rules - Chips - Free_hit: "));
    assert!(out[2].starts_with("Wildcards: "));
    assert_eq!(out[3], "Term: WC - Wildcard - chip that allows unlimited transfers without point penalties.");
    assert!(out[4].starts_with(TEAM_LABEL));
}

#[test]
fn blocks_are_separated_by_a_blank_line() {
    let out = search("hit");
    let parts: Vec<&str> = out.split(RESULT_SEP).collect();
    assert_eq!(parts, vec![
        "Team_rules - Chips - Free_hit: Temporary wildcard for a single gameweek. Team reverts to previous gameweek's team afterward.",
        "Term: FH - Free Hit - chip that allows temporary unlimited transfers for one gameweek.",
        "Term: Hit - Taking a hit - making extra transfers beyond the free transfer, costing 4 points each.",
    ]);
}

#[test]
fn expansion_is_pretty_json_in_declared_order() {
    let out = blocks("yellow");
    let block = out.last().unwrap();
    assert!(block.starts_with("Complete Scoring Rules: {\n  \"playing\": \"Players who play up to 60 minutes"));
    assert!(block.contains(
        "  \"goals\": {\n    \"forward\": \"Forwards get 4 points per goal scored.\",\n    \"midfielder\":"
    ));
    assert!(block.ends_with("  \"bonus\": \"1-3 bonus points awarded to the best performing players in each match.\"\n}"));

    let team = blocks("budget");
    let block = team.last().unwrap();
    assert!(block.starts_with("Complete Team Rules: {\n  \"budget\": \"£100 million"));
    assert!(block.contains("\"chips\": {\n    \"wildcard\""));
}

#[test]
fn first_declared_keyword_wins_per_section() {
    let engine = QueryEngine::default();
    assert_eq!(engine.trigger(Section::Scoring, "bonus and clean sheet"), Some("clean sheet"));
    assert_eq!(engine.trigger(Section::TeamRules, "triple captain chip"), Some("captain"));
    assert_eq!(engine.trigger(Section::TeamRules, "bench boost"), Some("bench boost"));
    assert_eq!(engine.trigger(Section::Scoring, "bench boost"), None);
}

#[test]
fn absent_query_is_rejected_at_the_boundary() {
    assert_eq!(search_input(None), Err(QueryError::MissingQuery));
    assert_eq!(search_input(Some("xg")), Ok(search("xg")));
    assert!(QueryError::MissingQuery.to_string().contains("invalid argument"));
}

#[test]
fn concurrent_searches_do_not_mix() {
    let queries = ["forward", "hit", "zzz_nonexistent_xyz", "captain", ""];
    let expected: Vec<String> = queries.iter().map(|q| search(q)).collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let q = queries[i % queries.len()];
                (i % queries.len(), (0..50).map(|_| search(q)).collect::<Vec<_>>())
            })
        })
        .collect();

    for h in handles {
        let (ix, outs) = h.join().unwrap();
        assert!(outs.iter().all(|o| *o == expected[ix]));
    }
}
