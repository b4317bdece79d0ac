use scripture_core::reference::{parse_search_label, parse_verse_line, VerseRef};
use scripture_core::Error;

#[test]
fn labels_with_numbered_books() {
    assert_eq!(
        parse_search_label("1 Corinthians 13:4").expect("label"),
        VerseRef::verse("1 Corinthians", 13, 4)
    );
    assert_eq!(parse_search_label("Genesis 1:1").expect("label"), VerseRef::verse("Genesis", 1, 1));
    assert_eq!(
        parse_search_label("Song of Solomon 2:10").expect("label"),
        VerseRef::verse("Song of Solomon", 2, 10)
    );
}

#[test]
fn malformed_labels_fail() {
    for label in ["John 3", "3:16", " 3:16", "John x:16", "John 3:", "John 3:0", "John 0:1", "John 3:+1", "John 3:1 extra"] {
        assert!(matches!(parse_search_label(label), Err(Error::Parse(_))), "{label} should fail");
    }
}

#[test]
fn partial_marker_sets_prefix_matching() {
    let reference = parse_search_label("Psalms 119:1*").expect("label");
    assert_eq!(reference.verse, Some(1));
    assert!(reference.partial);
    assert!(reference.matches_line("1 Blessed are the undefiled"));
    assert!(reference.matches_line("17 Deal bountifully"));
    assert!(!reference.matches_line("2 Blessed are they"));
    assert_eq!(reference.to_string(), "Psalms 119:1*");

    let exact = parse_search_label("Psalms 119:1").expect("label");
    assert!(exact.matches_line("1 Blessed are the undefiled"));
    assert!(!exact.matches_line("17 Deal bountifully"));
}

#[test]
fn display_round_trips_through_from_str() {
    let reference = VerseRef::verse("2 Kings", 5, 14);
    let parsed: VerseRef = reference.to_string().parse().expect("parse");
    assert_eq!(parsed, reference);
    assert_eq!(VerseRef::chapter("2 Kings", 5).to_string(), "2 Kings 5");
}

#[test]
fn verse_lines() {
    assert_eq!(parse_verse_line("4 Love is patient").expect("line"), (4, "Love is patient"));
    assert_eq!(parse_verse_line("12 ").expect("line"), (12, ""));
    assert_eq!(parse_verse_line("5  spaced").expect("line"), (5, " spaced"));
    assert!(matches!(parse_verse_line("patient"), Err(Error::Parse(_))));
    assert!(matches!(parse_verse_line("4"), Err(Error::Parse(_))));
    assert!(matches!(parse_verse_line("The Creation of the World"), Err(Error::Parse(_))));
    assert!(matches!(parse_verse_line("0 nothing"), Err(Error::Parse(_))));
}

#[test]
fn chapter_level_reference_matches_nothing() {
    assert!(!VerseRef::chapter("John", 3).matches_line("16 For God so loved"));
}
