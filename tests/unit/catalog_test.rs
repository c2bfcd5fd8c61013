//! Unit tests for the exercise and injury catalogs.

use rehabtrack::catalog::{Catalog, ExerciseCategory, InjuryType};

#[test]
fn test_catalog_loads_every_category() {
    let catalog = Catalog::load().unwrap();
    assert!(!catalog.is_empty());
    for category in ExerciseCategory::ALL {
        assert!(
            catalog.exercises(category).next().is_some(),
            "{} is empty",
            category
        );
    }
}

#[test]
fn test_catalog_membership_is_per_category() {
    let catalog = Catalog::load().unwrap();
    assert!(catalog.contains(ExerciseCategory::Rom, "Heel Slides"));
    assert!(catalog.contains(ExerciseCategory::Strength, "Leg Press"));
    assert!(!catalog.contains(ExerciseCategory::Rom, "Leg Press"));
    assert!(!catalog.contains(ExerciseCategory::Strength, "Underwater Basket Weaving"));
}

#[test]
fn test_catalog_search_ignores_case() {
    let catalog = Catalog::load().unwrap();
    let hits = catalog.search(ExerciseCategory::ResistanceBand, "WALKS");
    let names: Vec<&str> = hits.iter().map(|e| e.name).collect();
    assert!(names.contains(&"Band Lateral Walks"));
    assert!(names.contains(&"Band Monster Walks"));
    assert!(hits.iter().all(|e| e.category == ExerciseCategory::ResistanceBand));
}

#[test]
fn test_category_parses_from_label() {
    for category in ExerciseCategory::ALL {
        assert_eq!(category.label().parse::<ExerciseCategory>().unwrap(), category);
    }
    assert!("Underwater".parse::<ExerciseCategory>().is_err());
}

#[test]
fn test_injury_labels() {
    assert_eq!(InjuryType::from_label("ACL + Meniscus"), InjuryType::AclMeniscus);
    assert_eq!(InjuryType::from_label("acl tear"), InjuryType::AclTear);
    assert_eq!(InjuryType::from_label("broken toe"), InjuryType::Other);
    assert_eq!(InjuryType::from_label(""), InjuryType::AclTear);
}

#[test]
fn test_injury_guidance_present() {
    for injury in InjuryType::ALL {
        assert!(!injury.description().is_empty());
        assert!(!injury.considerations().is_empty());
    }
}
