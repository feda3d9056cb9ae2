use solar_atlas_core::catalog::CATALOG;
use solar_atlas_core::search::{GalleryQuery, PAGE_SIZE, filter_bodies, normalize_term};

#[test]
fn empty_term_returns_full_catalog_in_order() {
    let filtered = filter_bodies("");
    assert_eq!(filtered.len(), CATALOG.len());
    for (found, expected) in filtered.iter().zip(CATALOG.iter()) {
        assert_eq!(found.id, expected.id);
    }
}

#[test]
fn filter_is_case_insensitive_substring_match() {
    let filtered = filter_bodies("AR");
    let names: Vec<&str> = filtered.iter().map(|b| b.name).collect();
    // every match contains "ar" somewhere in its name, catalog order kept
    assert_eq!(names, vec!["Earth", "Mars"]);

    assert_eq!(filter_bodies("uRaNuS").len(), 1);
    assert!(filter_bodies("xyzzy").is_empty());
}

#[test]
fn filter_preserves_catalog_order() {
    let filtered = filter_bodies("u");
    let positions: Vec<usize> = filtered
        .iter()
        .map(|b| CATALOG.iter().position(|c| c.id == b.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn normalization_strips_diacritics_and_case() {
    assert_eq!(normalize_term("  Vénus  "), "venus");
    assert_eq!(normalize_term("EARTH"), "earth");
    assert_eq!(normalize_term("gas--giant"), "gas giant");
}

#[test]
fn visible_is_a_prefix_of_expected_length() {
    let mut query = GalleryQuery::default();
    assert_eq!(
        query.visible().len(),
        PAGE_SIZE.min(CATALOG.len()),
        "first batch shows one page"
    );

    query.load_more();
    assert_eq!(query.visible().len(), (2 * PAGE_SIZE).min(CATALOG.len()));

    // the prefix property: visible is always the head of filtered
    let filtered = query.filtered();
    for (shown, expected) in query.visible().iter().zip(filtered.iter()) {
        assert_eq!(shown.id, expected.id);
    }
}

#[test]
fn visible_is_idempotent_and_monotone() {
    let mut query = GalleryQuery::default();
    let first = query.visible().len();
    assert_eq!(query.visible().len(), first, "unchanged batch, same length");

    let mut last = first;
    for _ in 0..5 {
        query.load_more();
        let len = query.visible().len();
        assert!(len >= last, "length never shrinks as batch grows");
        last = len;
    }
    assert_eq!(last, CATALOG.len());
}

#[test]
fn load_more_saturates_when_everything_is_shown() {
    let mut query = GalleryQuery::default();
    while query.has_more() {
        query.load_more();
    }
    let batch = query.batch();
    query.load_more();
    assert_eq!(query.batch(), batch, "load_more past the end is a no-op");
}

#[test]
fn changing_term_resets_batch() {
    let mut query = GalleryQuery::default();
    query.load_more();
    assert_eq!(query.batch(), 2);

    query.set_term("a");
    assert_eq!(query.batch(), 1, "new term snaps back to the first batch");

    // setting the identical term again must NOT reset anything;
    // "u" matches more than one page of bodies, so load_more advances
    query.set_term("u");
    query.load_more();
    query.set_term("u");
    assert_eq!(query.batch(), 2);
}

#[test]
fn empty_result_is_a_valid_terminal_state() {
    let mut query = GalleryQuery::default();
    query.set_term("no such body");
    assert!(query.visible().is_empty());
    assert!(!query.has_more());
    query.load_more();
    assert_eq!(query.batch(), 1);
}
