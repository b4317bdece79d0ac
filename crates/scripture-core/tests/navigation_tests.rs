use scripture_core::catalog::BookCatalog;
use scripture_core::navigation::{Cursor, Navigator};
use scripture_core::Error;

#[test]
fn steps_within_a_book() {
    let catalog = BookCatalog::canonical();
    let nav = Navigator::new(&catalog);
    assert_eq!(nav.next_chapter("Genesis", 1).expect("next"), Cursor::new("Genesis", 2));
    assert_eq!(nav.previous_chapter("Genesis", 2).expect("prev"), Cursor::new("Genesis", 1));
}

#[test]
fn crosses_book_boundaries() {
    let catalog = BookCatalog::canonical();
    let nav = Navigator::new(&catalog);
    assert_eq!(nav.next_chapter("Genesis", 50).expect("next"), Cursor::new("Exodus", 1));
    assert_eq!(nav.previous_chapter("Exodus", 1).expect("prev"), Cursor::new("Genesis", 50));
    assert_eq!(nav.next_chapter("Obadiah", 1).expect("next"), Cursor::new("Jonah", 1));
    assert_eq!(nav.previous_chapter("Matthew", 1).expect("prev"), Cursor::new("Malachi", 4));
}

#[test]
fn wraps_at_the_ends_of_the_canon() {
    let catalog = BookCatalog::canonical();
    let nav = Navigator::new(&catalog);
    assert_eq!(nav.next_chapter("Revelation", 22).expect("next"), Cursor::new("Genesis", 1));
    assert_eq!(nav.previous_chapter("Genesis", 1).expect("prev"), Cursor::new("Revelation", 22));
}

#[test]
fn next_then_previous_is_identity_everywhere() {
    let catalog = BookCatalog::canonical();
    let nav = Navigator::new(&catalog);
    for book in catalog.iter() {
        for chapter in 1..=book.chapter_count {
            let start = Cursor::new(book.name.as_str(), chapter);
            let forward = nav.next_chapter(&book.name, chapter).expect("next");
            let back = nav.previous_chapter(&forward.book, forward.chapter).expect("prev");
            assert_eq!(back, start, "next/prev from {start}");
            let backward = nav.previous_chapter(&book.name, chapter).expect("prev");
            let again = nav.next_chapter(&backward.book, backward.chapter).expect("next");
            assert_eq!(again, start, "prev/next from {start}");
        }
    }
}

#[test]
fn stepping_to_the_end_of_a_book_lands_on_the_next_one() {
    let catalog = BookCatalog::canonical();
    let nav = Navigator::new(&catalog);
    for (book, chapter, expected) in [("Genesis", 48, "Exodus"), ("Psalms", 1, "Proverbs"), ("Jude", 1, "Revelation"), ("Revelation", 20, "Genesis")] {
        let steps = catalog.chapter_count(book).expect("count") - chapter + 1;
        let mut cursor = Cursor::new(book, chapter);
        for _ in 0..steps {
            cursor = nav.next_chapter(&cursor.book, cursor.chapter).expect("next");
        }
        assert_eq!(cursor, Cursor::new(expected, 1));
    }
}

#[test]
fn full_cycle_visits_every_chapter_once() {
    let catalog = BookCatalog::canonical();
    let nav = Navigator::new(&catalog);
    let mut cursor = nav.start();
    let mut visited = 0;
    loop {
        visited += 1;
        cursor = nav.next_chapter(&cursor.book, cursor.chapter).expect("next");
        if cursor == nav.start() {
            break;
        }
    }
    assert_eq!(visited, 1189);
}

#[test]
fn invalid_input_is_rejected_not_clamped() {
    let catalog = BookCatalog::canonical();
    let nav = Navigator::new(&catalog);
    assert!(!nav.has_passage("Genesis", 0));
    assert!(!nav.has_passage("Genesis", 51));
    assert!(!nav.has_passage("Hezekiah", 1));
    assert!(nav.has_passage("Genesis", 50));
    assert!(matches!(nav.next_chapter("Genesis", 51), Err(Error::InvalidReference { .. })));
    assert!(matches!(nav.previous_chapter("Genesis", 0), Err(Error::InvalidReference { .. })));
    assert!(matches!(nav.next_chapter("genesis", 1), Err(Error::InvalidReference { .. })));
}

#[test]
fn restore_revalidates_session_text() {
    let catalog = BookCatalog::canonical();
    let nav = Navigator::new(&catalog);
    assert_eq!(nav.restore("John", "3").expect("restore"), Cursor::new("John", 3));
    for (book, chapter) in [("John", "22"), ("John", " 3"), ("John", "3a"), ("John", ""), ("John", "-1"), ("<script>", "1")] {
        assert!(matches!(nav.restore(book, chapter), Err(Error::InvalidReference { .. })), "{book:?} {chapter:?}");
    }
    assert_eq!(nav.start(), Cursor::new("Genesis", 1));
}
