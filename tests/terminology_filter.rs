// tests/terminology_filter.rs
//
// Terminology table filtering without UI.
//
use fpl_rules::gui::table_model::{TableData, TERM_HEADERS};
use fpl_rules::kb::{self, Term};

fn names(t: &TableData) -> Vec<&str> {
    t.rows.iter().map(|r| r[0].as_str()).collect()
}

#[test]
fn empty_filter_keeps_every_term_in_order() {
    let table = TableData::from_terms_filtered(kb::terms(), "");
    assert_eq!(table.nrows(), kb::terms().len());
    assert_eq!(table.ncols(), 2);
    assert_eq!(table.headers.as_deref(), Some(&[TERM_HEADERS[0].to_string(), TERM_HEADERS[1].to_string()][..]));
    assert_eq!(table.rows[0], vec!["BGW".to_string(), "Blank Gameweek - when teams have no fixture in a gameweek.".to_string()]);
    assert_eq!(names(&table).last(), Some(&"Essential"));
}

#[test]
fn filter_hits_either_column_ignoring_case() {
    // "value" only appears in definitions for some rows, in the term for others
    let table = TableData::from_terms_filtered(kb::terms(), "VALUE");
    assert_eq!(names(&table), vec!["Price Rise/Fall", "Knee-jerk", "Squad Value", "Team Value", "Essential"]);

    let table = TableData::from_terms_filtered(kb::terms(), "dgw");
    assert_eq!(names(&table), vec!["DGW"]);
}

#[test]
fn filter_agrees_with_kb_helper() {
    for needle in ["chip", "gameweek", "Hit", "zzz"] {
        let table = TableData::from_terms_filtered(kb::terms(), needle);
        let via_kb: Vec<&str> = kb::filter_terms(needle).iter().map(|t| t.term).collect();
        assert_eq!(names(&table), via_kb, "needle {needle:?}");
    }
}

#[test]
fn no_match_gives_empty_table_with_headers() {
    let table = TableData::from_terms_filtered(kb::terms(), "zzz_nonexistent_xyz");
    assert!(table.is_empty());
    assert_eq!(table.ncols(), 2);
}

#[test]
fn custom_predicate() {
    static SAMPLE: [Term; 3] = [
        Term { term: "A", definition: "alpha" },
        Term { term: "B", definition: "beta" },
        Term { term: "C", definition: "gamma" },
    ];
    let table = TableData::from_terms_where(&SAMPLE, |t| t.definition.contains("ta"));
    assert_eq!(names(&table), vec!["B"]);
    assert_eq!(TableData::from_terms(&SAMPLE).nrows(), 3);
}
