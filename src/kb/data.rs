// src/kb/data.rs
//
// Literal payload of the knowledge base. Order here is display order
// and traversal order for search.

use super::types::{KeywordRule, RuleNode::{self, Leaf, Section as Group}, Section, Term};

pub static RULES: RuleNode = Group(&[
    ("scoring", Group(&[
        ("playing", Leaf("Players who play up to 60 minutes get 1 point. Players who play 60+ minutes get 2 points.")),
        ("goals", Group(&[
            ("forward", Leaf("Forwards get 4 points per goal scored.")),
            ("midfielder", Leaf("Midfielders get 5 points per goal scored.")),
            ("defender", Leaf("Defenders get 6 points per goal scored.")),
            ("goalkeeper", Leaf("Goalkeepers get 6 points per goal scored.")),
        ])),
        ("assists", Leaf("All players get 3 points per assist.")),
        ("clean_sheets", Group(&[
            ("defender", Leaf("Defenders get 4 points for a clean sheet.")),
            ("goalkeeper", Leaf("Goalkeepers get 4 points for a clean sheet.")),
            ("midfielder", Leaf("Midfielders get 1 point for a clean sheet.")),
            ("forward", Leaf("Forwards don't get points for clean sheets.")),
        ])),
        ("saves", Leaf("Goalkeepers get 1 point for every 3 saves made.")),
        ("penalty_save", Leaf("5 points for saving a penalty.")),
        ("penalty_miss", Leaf("-2 points for missing a penalty.")),
        ("yellow_card", Leaf("-1 point for receiving a yellow card.")),
        ("red_card", Leaf("-3 points for receiving a red card.")),
        ("own_goal", Leaf("-2 points for scoring an own goal.")),
        ("bonus", Leaf("1-3 bonus points awarded to the best performing players in each match.")),
    ])),
    ("team_rules", Group(&[
        ("budget", Leaf("£100 million initial budget to build your squad.")),
        ("squad_size", Leaf("15 players total: 2 goalkeepers, 5 defenders, 5 midfielders, and 3 forwards.")),
        ("formation", Leaf("Must play a valid formation with 1 goalkeeper, at least 3 defenders, at least 2 midfielders, and at least 1 forward.")),
        ("captaincy", Leaf("Captain scores double points. Vice-captain is automatic replacement if captain doesn't play.")),
        ("transfers", Leaf("1 free transfer per gameweek. Additional transfers cost 4 points each.")),
        ("chips", Group(&[
            ("wildcard", Leaf("Unlimited transfers in a single gameweek without point deductions. Can be used twice per season (once in each half).")),
            ("free_hit", Leaf("Temporary wildcard for a single gameweek. Team reverts to previous gameweek's team afterward.")),
            ("bench_boost", Leaf("Points scored by bench players are included in the gameweek's total.")),
            ("triple_captain", Leaf("Captain scores triple points instead of double for the gameweek.")),
        ])),
        ("team_limit", Leaf("Maximum of 3 players from any single Premier League team.")),
    ])),
    ("deadlines", Leaf("Team changes must be confirmed before the gameweek deadline (90 minutes before the first match of the gameweek).")),
    ("price_changes", Leaf("Player prices change based on transfer activity. Players can rise or fall by up to £0.3m per gameweek.")),
    ("wildcards", Leaf("2 wildcards per season: 1 to use before gameweek 20 deadline, and 1 to use after gameweek 20 deadline.")),
    ("double_gameweeks", Leaf("Some teams play twice in a single gameweek due to rescheduled fixtures.")),
    ("blank_gameweeks", Leaf("Some teams don't play in certain gameweeks due to fixture clashes with other competitions.")),
]);

macro_rules! term {
    ($term:expr, $def:expr) => {
        Term { term: $term, definition: $def }
    };
}

pub static TERMS: &[Term] = &[
    term!("BGW", "Blank Gameweek - when teams have no fixture in a gameweek."),
    term!("DGW", "Double Gameweek - when teams play twice in a single gameweek."),
    term!("TGW", "Triple Gameweek - rare occurrence when a team plays three matches in a single gameweek."),
    term!("OOP", "Out of Position - a player listed in one position but playing in a more advanced role."),
    term!("ICT Index", "Influence, Creativity, Threat Index - statistical metric to help make transfer decisions."),
    term!("xG", "Expected Goals - statistical measure of the quality of goal-scoring chances."),
    term!("xA", "Expected Assists - statistical measure of the quality of chances created."),
    term!("EO", "Effective Ownership - percentage of active teams in which a player's points count."),
    term!("TC", "Triple Captain - chip that triples captain's points for one gameweek."),
    term!("BB", "Bench Boost - chip that counts bench players' points for one gameweek."),
    term!("FH", "Free Hit - chip that allows temporary unlimited transfers for one gameweek."),
    term!("WC", "Wildcard - chip that allows unlimited transfers without point penalties."),
    term!("xMins", "Expected Minutes - predicted playing time for a player."),
    term!("Autosubs", "Automatic substitutions - bench players automatically replace starters who don't play."),
    term!("Hit", "Taking a hit - making extra transfers beyond the free transfer, costing 4 points each."),
    term!("Price Rise/Fall", "When players' values increase or decrease based on transfer activity."),
    term!("Differential", "Player with low ownership percentage who could give you an advantage."),
    term!("Template", "Common player selections found in many FPL teams."),
    term!("Set and Forget", "Selecting a player/team and keeping them regardless of fixtures."),
    term!("Knee-jerk", "Making impulsive transfers based on recent performance without considering long-term value."),
    term!("Gandhi Rule", "Unofficial rule suggesting not to captain players in early kickoff matches."),
    term!("Form", "A player's recent performance level, often measured by points in last 5 gameweeks."),
    term!("Fixtures", "Upcoming matches for a team, rated by difficulty."),
    term!("Squad Value", "Total market value of all players in your team."),
    term!("Team Value", "Amount available to spend if you sold all your players (purchase price + profit)."),
    term!("ITB", "In The Bank - money not spent on your squad, available for future transfers."),
    term!("Bandwagon", "When many managers transfer in the same player after good performances."),
    term!("Essential", "Players considered must-haves due to form, fixtures, or value."),
];

macro_rules! kw {
    ($keyword:expr => $section:ident) => {
        KeywordRule { keyword: $keyword, section: Section::$section }
    };
}

/// Scanned in this order; the first hit per section wins.
pub static KEYWORDS: &[KeywordRule] = &[
    kw!("point" => Scoring),
    kw!("score" => Scoring),
    kw!("goal" => Scoring),
    kw!("assist" => Scoring),
    kw!("clean sheet" => Scoring),
    kw!("yellow" => Scoring),
    kw!("red card" => Scoring),
    kw!("bonus" => Scoring),
    kw!("budget" => TeamRules),
    kw!("squad" => TeamRules),
    kw!("formation" => TeamRules),
    kw!("captain" => TeamRules),
    kw!("transfer" => TeamRules),
    kw!("chip" => TeamRules),
    kw!("wildcard" => TeamRules),
    kw!("free hit" => TeamRules),
    kw!("bench boost" => TeamRules),
    kw!("triple captain" => TeamRules),
];
