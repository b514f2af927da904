/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::slice;

use crate::NodeId;

use super::Attribute;
use super::Cursor;
use super::Document;

pub struct Attributes<'a> {
    current: slice::Iter<'a, Attribute>,
}

impl<'a> Attributes<'a> {
    pub(super) fn new(attributes: &'a [Attribute]) -> Self {
        Attributes {
            current: attributes.iter(),
        }
    }
}

impl<'a> Iterator for Attributes<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.current
            .next()
            .map(|attr| (attr.name.as_str(), attr.value.as_str()))
    }
}

pub struct Children<'a> {
    document: &'a Document,
    current: slice::Iter<'a, NodeId>,
}

impl<'a> Children<'a> {
    pub(super) fn new(document: &'a Document, children: &'a [NodeId]) -> Self {
        Children {
            document,
            current: children.iter(),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = Cursor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let &child = self.current.next()?;
        self.document.cursor(child)
    }
}

/// Pre-order walk over a cursor and all of its descendant elements.
pub struct DescendantOrSelf<'a> {
    pending: Vec<Cursor<'a>>,
}

impl<'a> DescendantOrSelf<'a> {
    pub(super) fn new(cursor: Cursor<'a>) -> Self {
        DescendantOrSelf {
            pending: vec![cursor],
        }
    }
}

impl<'a> Iterator for DescendantOrSelf<'a> {
    type Item = Cursor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.pending.pop()?;
        // Reversed so that the first child is popped next
        let children: Vec<Cursor<'a>> = result.children().collect();
        self.pending.extend(children.into_iter().rev());
        Some(result)
    }
}
