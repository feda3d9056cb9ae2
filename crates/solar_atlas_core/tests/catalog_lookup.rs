use std::collections::HashSet;

use solar_atlas_core::catalog::{CATALOG, body_by_id, body_by_name};
use solar_atlas_core::i18n::{Language, Text};

#[test]
fn known_name_resolves_with_description_and_color() {
    let earth = body_by_name("Earth").expect("Earth is in the catalog");
    assert_eq!(earth.id, "earth");
    assert!(!earth.description(Language::En).is_empty());
    assert_ne!(earth.color, [0, 0, 0]);
}

#[test]
fn unknown_name_is_not_found() {
    assert!(body_by_name("Krypton").is_none());
}

#[test]
fn name_lookup_is_case_sensitive() {
    assert!(body_by_name("earth").is_none());
    assert!(body_by_name("EARTH").is_none());
    assert!(body_by_name("Earth").is_some());
}

#[test]
fn ids_and_names_are_unique() {
    let ids: HashSet<&str> = CATALOG.iter().map(|b| b.id).collect();
    let names: HashSet<&str> = CATALOG.iter().map(|b| b.name).collect();
    assert_eq!(ids.len(), CATALOG.len());
    assert_eq!(names.len(), CATALOG.len());
}

#[test]
fn every_body_has_an_english_description() {
    for body in CATALOG {
        let text = body.description(Language::En);
        assert!(!text.is_empty(), "{} lacks an English description", body.id);
    }
}

#[test]
fn missing_translation_falls_back_to_english() {
    // Pluto ships only the English text, so any language must fall back to
    // it, never to an empty string or a raw key.
    let pluto = body_by_id("pluto").expect("Pluto is in the catalog");
    let english = pluto.description(Language::En);
    for lang in Language::ALL {
        assert_eq!(pluto.description(lang), english);
    }

    // and a body WITH translations must not fall back
    let mars = body_by_id("mars").expect("Mars is in the catalog");
    assert_ne!(mars.description(Language::Fr), mars.description(Language::En));
}

#[test]
fn characteristics_list_only_present_attributes() {
    let sun = body_by_id("sun").expect("Sun is in the catalog");
    let keys: Vec<Text> = sun.characteristics().iter().map(|(k, _)| *k).collect();
    assert!(!keys.contains(&Text::DistanceFromSun));
    assert!(!keys.contains(&Text::OrbitalPeriod));
    assert!(!keys.contains(&Text::Moons));
    assert!(keys.contains(&Text::Diameter));

    let earth = body_by_id("earth").expect("Earth is in the catalog");
    assert_eq!(earth.characteristics().len(), 9);
}

#[test]
fn language_parse_is_tolerant() {
    assert_eq!(Language::parse("fr"), Language::Fr);
    assert_eq!(Language::parse("FR"), Language::Fr);
    assert_eq!(Language::parse("fr-CA"), Language::Fr);
    assert_eq!(Language::parse("it_IT"), Language::It);
    assert_eq!(Language::parse("tlh"), Language::En, "unknown falls back");
    assert_eq!(Language::parse(""), Language::En);
}
