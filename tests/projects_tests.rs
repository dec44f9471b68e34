// Host-side tests for the static project records.

#![allow(dead_code)]
mod projects {
    include!("../src/core/projects.rs");
}

use projects::*;
use std::collections::HashSet;

#[test]
fn three_projects_in_declared_order() {
    assert_eq!(PROJECTS.len(), 3);
    assert_eq!(
        all_slugs(),
        vec!["tijara-pos", "suraya", "school-transit"]
    );
}

#[test]
fn slugs_are_unique() {
    let unique: HashSet<_> = all_slugs().into_iter().collect();
    assert_eq!(unique.len(), PROJECTS.len());
}

#[test]
fn lookup_by_slug_round_trips() {
    for p in PROJECTS {
        let found = project_by_slug(p.slug).unwrap();
        assert_eq!(found.title, p.title);
    }
}

#[test]
fn unknown_slug_is_none() {
    assert!(project_by_slug("does-not-exist").is_none());
    assert!(project_by_slug("").is_none());
}

#[test]
fn every_record_is_fully_populated() {
    for p in PROJECTS {
        assert!(!p.title.is_empty(), "{}", p.slug);
        assert!(!p.description.is_empty(), "{}", p.slug);
        assert!(!p.full_description.is_empty(), "{}", p.slug);
        assert!(!p.category.is_empty(), "{}", p.slug);
        assert!(!p.tech_stack.is_empty(), "{}", p.slug);
        assert!(!p.features.is_empty(), "{}", p.slug);
        assert!(!p.images.is_empty(), "{}", p.slug);
    }
}

#[test]
fn image_paths_live_under_the_project_slug() {
    for p in PROJECTS {
        for img in p.images {
            assert!(
                img.starts_with(&format!("/projects/{}/", p.slug)),
                "bad image path {} for {}",
                img,
                p.slug
            );
        }
    }
}
