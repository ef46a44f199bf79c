#![allow(missing_docs)]

use std::io::Write;

use grokpile::{GrokError, MatcherPile, PatternMatcher};

#[test]
fn first_matching_member_wins() {
    let mut pile = MatcherPile::new();
    pile.add_macro("foo", ".*(foo).*");
    pile.add_macro("bar", ".*(bar).*");

    pile.compile("%{foo}", false).unwrap();
    pile.compile("%{bar}", false).unwrap();
    pile.compile("(?P<anything>.*)", false).unwrap();

    let (matcher, result) = pile.match_first("bar").unwrap().unwrap();
    assert_eq!(matcher.pattern(), "%{bar}");
    assert_eq!(result.all_captures()["bar"][0], "bar");

    // The winning member also matches on its own.
    let result = matcher.execute("bar").unwrap().unwrap();
    assert_eq!(result.all_captures()["bar"][0], "bar");

    let result = pile.find_match("bar").unwrap().unwrap();
    assert!(std::ptr::eq(result.matcher(), &pile.matchers()[1]));
}

#[test]
fn no_member_matches() {
    let mut pile = MatcherPile::new();
    pile.add_macro("NUM", "[0-9]+");
    pile.compile("^%{NUM:n}$", false).unwrap();

    assert!(pile.match_first("abc").unwrap().is_none());
    assert!(pile.find_match("abc").unwrap().is_none());
}

#[test]
fn base_patterns_from_file() {
    let dir = tempdir::TempDir::new("grokpile_pile").unwrap();
    let path = dir.path().join("base");
    std::fs::write(&path, grokpile::registry::BASE_PATTERNS).unwrap();

    let mut pile = MatcherPile::new();
    assert!(pile.import_macros_from_path(&path).unwrap() > 50);
    pile.compile("%{DAY}", false).unwrap();

    let (_, result) = pile
        .match_first("Tue May 15 11:21:42 [conn1047685] moveChunk deleted: 7157")
        .unwrap()
        .unwrap();
    assert_eq!(result.all_captures()["DAY"][0], "Tue");
}

#[test]
fn macros_added_later_only_affect_later_members() {
    let mut pile = MatcherPile::new();
    pile.import_macros_from_source("GREETING hello\n").unwrap();
    pile.compile("^%{GREETING:g}$", false).unwrap();

    pile.import_macros_from_source("GREETING goodbye\n").unwrap();
    pile.compile("^%{GREETING:g}$", false).unwrap();

    for (subject, member) in [("hello", 0), ("goodbye", 1)] {
        let (matcher, result) = pile.match_first(subject).unwrap().unwrap();
        assert!(std::ptr::eq(matcher, &pile.matchers()[member]));
        assert_eq!(result.collapsed_captures()["g"], subject);
    }
}

#[test]
fn import_errors() {
    let mut pile = MatcherPile::new();

    let err = pile
        .import_macros_from_source("OK fine\nbroken\n")
        .unwrap_err();
    match err {
        GrokError::Import { origin, reason } => {
            assert_eq!(origin, "<source>");
            assert!(reason.starts_with("line 2"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(pile.registry().is_empty());

    let dir = tempdir::TempDir::new("grokpile_pile").unwrap();
    let missing = dir.path().join("missing");
    assert!(matches!(
        pile.import_macros_from_path(&missing),
        Err(GrokError::Import { .. })
    ));

    let path = dir.path().join("extra");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# extra macros").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "ANSWER 42").unwrap();
    drop(file);
    assert_eq!(pile.import_macros_from_path(&path).unwrap(), 1);
    assert_eq!(pile.registry().get_macro("ANSWER"), Some("42"));
}

#[test]
fn compile_errors_do_not_add_members() {
    let mut pile = MatcherPile::with_base_patterns().unwrap();

    assert!(matches!(
        pile.compile("%{NOT_A_MACRO}", false),
        Err(GrokError::Compile { .. })
    ));
    assert!(matches!(
        pile.compile("%{DAY}(", false),
        Err(GrokError::Compile { .. })
    ));
    assert!(pile.is_empty());
}
