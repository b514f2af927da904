/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use super::*;

const CHARS: &str = "1234567890abcdefghijklmnopqrstuv";

#[test]
fn it_works() {
    let mut arena = Arena::new();
    assert_eq!(arena.stats().nr_items, 0);
    assert_eq!(arena.stats().nr_slots, 0);

    let a = arena.alloc("test".to_string()).unwrap();
    let b = arena.alloc("moretest".to_string()).unwrap();
    assert_ne!(a, b);
    assert_eq!(arena.stats().nr_items, 2);
    assert_eq!(arena.get(a).map(String::as_str), Some("test"));
    assert_eq!(arena.get(b).map(String::as_str), Some("moretest"));

    arena.get_mut(a).unwrap().push_str("ing");
    assert_eq!(arena.get(a).map(String::as_str), Some("testing"));
}

#[test]
fn handles_are_sequential() {
    let mut arena = Arena::new();
    for i in 0..CHARS.len() {
        let id = arena.alloc(&CHARS[..i]).unwrap();
        assert_eq!(id.index, i);
    }
    assert_eq!(arena.get(arena.handle(5)), Some(&"12345"));
}

#[test]
fn unknown_handles() {
    let mut arena = Arena::new();
    let _ = arena.alloc(1u32).unwrap();
    assert!(arena.get(arena.handle(0)).is_some());
    assert!(arena.get(arena.handle(1)).is_none());
    let far = arena.handle(42);
    assert!(arena.get_mut(far).is_none());
}

#[test]
fn handles_are_bound_to_their_arena() {
    let mut a = Arena::new();
    let mut b = Arena::new();
    let in_a = a.alloc("a").unwrap();
    let in_b = b.alloc("b").unwrap();
    assert_eq!(in_a.index, in_b.index);
    assert_ne!(in_a, in_b);
    assert!(a.owns(in_a));
    assert!(!a.owns(in_b));
    assert_eq!(a.get(in_b), None);
    assert_eq!(b.get_mut(in_a), None);

    let copy = a.clone();
    assert!(copy.owns(in_a));
    assert_eq!(copy.get(in_a), Some(&"a"));
}

#[test]
fn absorb() {
    // Items are handles of their successor
    let mut a: Arena<Option<NodeId>> = Arena::new();
    let a0 = a.alloc(None).unwrap();
    let mut b: Arena<Option<NodeId>> = Arena::new();
    let b1_id = b.alloc(None).unwrap();
    let b0 = b.alloc(Some(b1_id)).unwrap();

    let rebase = a
        .absorb(b, |item, rebase| *item = item.map(|id| rebase.id(id)))
        .unwrap();
    assert_eq!(a.stats().nr_items, 3);
    assert_eq!(rebase.id(a0), a0);

    let moved = rebase.id(b0);
    assert!(a.owns(moved));
    assert_eq!(moved.index, 2);
    let next = a.get(moved).copied().flatten().unwrap();
    assert_eq!(next, rebase.id(b1_id));
    assert_eq!(a.get(next), Some(&None));
}

#[test]
fn many_allocs() {
    let mut arena = Arena::new();
    let _ = arena.alloc(0usize).unwrap();
    let first_slots = arena.stats().nr_slots;
    assert!(first_slots >= MIN_SLOTS);

    for i in 1..10000 {
        let _ = arena.alloc(i).unwrap();
    }
    let stats = arena.stats();
    assert_eq!(stats.nr_items, 10000);
    assert!(stats.nr_slots >= stats.nr_items);
    assert!(stats.nr_slots > first_slots);
}
