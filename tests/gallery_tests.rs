// Host-side tests for the lightbox gallery.

#![allow(dead_code)]
mod gallery {
    include!("../src/core/gallery.rs");
}

use gallery::Gallery;

#[test]
fn starts_closed() {
    let g = Gallery::new(4);
    assert_eq!(g.selected(), None);
    assert_eq!(g.len(), 4);
}

#[test]
fn open_and_close() {
    let mut g = Gallery::new(4);
    g.open(2);
    assert_eq!(g.selected(), Some(2));
    g.close();
    assert_eq!(g.selected(), None);
}

#[test]
fn out_of_range_open_is_ignored() {
    let mut g = Gallery::new(3);
    g.open(3);
    assert_eq!(g.selected(), None);
}

#[test]
fn next_wraps_from_last_to_first() {
    let mut g = Gallery::new(3);
    g.open(2);
    g.next();
    assert_eq!(g.selected(), Some(0));
}

#[test]
fn prev_wraps_from_first_to_last() {
    let mut g = Gallery::new(3);
    g.open(0);
    g.prev();
    assert_eq!(g.selected(), Some(2));
}

#[test]
fn navigation_while_closed_does_nothing() {
    let mut g = Gallery::new(3);
    g.next();
    g.prev();
    assert_eq!(g.selected(), None);
}

#[test]
fn empty_gallery_never_opens() {
    let mut g = Gallery::new(0);
    assert!(g.is_empty());
    g.open(0);
    assert_eq!(g.selected(), None);
}
