use draftlink_map::{AliasTable, DraftMatcher, MatchRule, normalize_str};
use draftlink_model::{DraftPool, DraftRecord, MatchResult};

fn draft(name: &str, school: &str, year: i32, round: i32, pick: i32) -> DraftRecord {
    DraftRecord {
        player_name: name.to_string(),
        drafted_from: school.to_string(),
        year,
        round,
        pick,
        drafted_by: "Cincinnati Reds".to_string(),
    }
}

#[test]
fn close_name_at_same_school_matches() {
    let pool = DraftPool::new(vec![draft("jon smith", "ohio state university", 2020, 3, 90)]);
    let aliases = AliasTable::new();
    let matcher = DraftMatcher::new(&pool, &aliases);

    let result = matcher.find_match("john smith", "ohio state university", Some(2020));
    let record = result.record().expect("expected a match");
    assert_eq!(record.round, 3);
    assert_eq!(record.pick, 90);
}

#[test]
fn other_years_are_never_considered() {
    let pool = DraftPool::new(vec![
        draft("john smith", "ohio state university", 2019, 3, 90),
        draft("jon smith", "ohio state university", 2019, 4, 120),
    ]);
    let aliases = AliasTable::new();
    let matcher = DraftMatcher::new(&pool, &aliases);

    assert_eq!(
        matcher.find_match("john smith", "ohio state university", Some(2020)),
        MatchResult::NoMatch
    );
}

#[test]
fn aliased_school_matches_canonical_name() {
    let pool = DraftPool::new(vec![draft("sam lee", "state university", 2018, 5, 150)]);
    let aliases = AliasTable::from_pairs([("State College", "State University")]);
    let matcher = DraftMatcher::new(&pool, &aliases);

    let outcome = matcher.find_match_detailed("sam lee", "state college", Some(2018));
    assert_eq!(outcome.result.record().map(|r| r.pick), Some(150));
    assert!(outcome.rule.is_some());
}

#[test]
fn alias_applies_to_draft_side_school() {
    let pool = DraftPool::new(vec![draft("sam lee", "Southwest Texas State", 2001, 9, 270)]);
    let aliases = AliasTable::from_pairs([("southwest texas state", "texas state university")]);
    let matcher = DraftMatcher::new(&pool, &aliases);

    let outcome = matcher.find_match_detailed("samuel lee", "texas state university", Some(2001));
    assert_eq!(outcome.result, MatchResult::NoMatch);

    let outcome = matcher.find_match_detailed("sam lee", "texas state university", Some(2001));
    assert_eq!(outcome.rule, Some(MatchRule::FuzzyNameExactSchool));
}

#[test]
fn first_qualifying_candidate_in_load_order_wins() {
    let pool = DraftPool::new(vec![
        draft("other player", "ohio state university", 2020, 1, 1),
        draft("john smith", "ohio state university", 2020, 2, 40),
        draft("john smith", "ohio state university", 2020, 7, 210),
    ]);
    let aliases = AliasTable::new();
    let matcher = DraftMatcher::new(&pool, &aliases);

    let outcome = matcher.find_match_detailed("john smith", "ohio state university", Some(2020));
    assert_eq!(outcome.result.record().map(|r| r.pick), Some(40));
    assert_eq!(outcome.candidates_scanned, 2);
}

#[test]
fn repeated_queries_are_deterministic() {
    let pool = DraftPool::new(vec![
        draft("jon smith", "ohio state university", 2020, 3, 90),
        draft("john smyth", "ohio state university", 2020, 4, 110),
    ]);
    let aliases = AliasTable::new();
    let matcher = DraftMatcher::new(&pool, &aliases);

    let first = matcher.find_match("john smith", "ohio state university", Some(2020));
    for _ in 0..10 {
        assert_eq!(
            matcher.find_match("john smith", "ohio state university", Some(2020)),
            first
        );
    }
}

#[test]
fn empty_inputs_participate_in_scoring() {
    let pool = DraftPool::new(vec![draft("", "", 2015, 10, 300)]);
    let aliases = AliasTable::new();
    let matcher = DraftMatcher::new(&pool, &aliases);

    assert!(matcher.find_match("", "", Some(2015)).is_match());
    assert_eq!(
        matcher.find_match("john smith", "", Some(2015)),
        MatchResult::NoMatch
    );
}

#[test]
fn raw_draft_text_is_normalized_before_comparison() {
    let pool = DraftPool::new(vec![draft(
        "  JOHN   Smith ",
        "A & M College of Texas",
        2012,
        6,
        180,
    )]);
    let aliases = AliasTable::new();
    let matcher = DraftMatcher::new(&pool, &aliases);

    let school = normalize_str("A & M Texas");
    assert!(
        matcher
            .find_match("john smith", &school, Some(2012))
            .is_match()
    );
}
