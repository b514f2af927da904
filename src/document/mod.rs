/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

mod error;
mod iterators;

use std::fmt::Debug;
use std::fmt::Write;

use tracing::debug;

use crate::NoMemory;
use crate::arena::Arena;
use crate::arena::ArenaStats;
use crate::arena::NodeId;
use crate::entities::escape;
use crate::entities::escaped_size;

pub(crate) use error::description;
pub use error::DocumentError;
pub use iterators::Attributes;
pub use iterators::Children;
pub use iterators::DescendantOrSelf;

#[derive(Clone, Debug)]
struct Attribute {
    name: String,
    value: String,
}

#[derive(Clone, Debug)]
struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<NodeId>,
    text: Option<String>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(name: &str) -> Element {
        Element {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
            parent: None,
        }
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    // Serialized as a standalone tag
    fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text().is_none()
    }
}

fn is_reserved(c: char) -> bool {
    c.is_whitespace() || matches!(c, '<' | '>' | '&' | '"' | '\'' | '/' | '=')
}

fn check_name(name: &str) -> Result<(), DocumentError> {
    if name.is_empty() {
        return Err(DocumentError::InvalidArgument(description::EMPTY_NAME));
    }
    if name.chars().any(is_reserved) {
        return Err(DocumentError::InvalidArgument(description::BAD_NAME));
    }
    Ok(())
}

fn check_attribute_name(name: &str) -> Result<(), DocumentError> {
    if name.is_empty() {
        return Err(DocumentError::InvalidArgument(
            description::EMPTY_ATTRIBUTE_NAME,
        ));
    }
    if name.chars().any(is_reserved) {
        return Err(DocumentError::InvalidArgument(
            description::BAD_ATTRIBUTE_NAME,
        ));
    }
    Ok(())
}

enum VisitorStep<'a> {
    StartTag(&'a Element),
    EndTag(&'a Element),
}

/// Depth-first walk over a subtree without recursion.
struct Visitor<'a> {
    arena: &'a Arena<Element>,
    start: Option<&'a Element>,
    stack: Vec<(&'a Element, usize)>,
}

impl<'a> Visitor<'a> {
    fn new(arena: &'a Arena<Element>, start: &'a Element) -> Visitor<'a> {
        Visitor {
            arena,
            start: Some(start),
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Visitor<'a> {
    type Item = VisitorStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.stack.push((start, 0));
            return Some(VisitorStep::StartTag(start));
        }
        let top = self.stack.last_mut()?;
        let element = top.0;
        match element.children.get(top.1) {
            Some(&child_id) => {
                top.1 += 1;
                let child = self.arena.get(child_id)?;
                self.stack.push((child, 0));
                Some(VisitorStep::StartTag(child))
            }
            None => {
                self.stack.pop();
                Some(VisitorStep::EndTag(element))
            }
        }
    }
}

/// A tree of XML elements.
///
/// Every element of the tree lives in the document's arena and is
/// addressed with a [`NodeId`]. Elements can be created detached and
/// attached later with [`Document::append_child`], which moves the
/// ownership of the child under its new parent. An element can only
/// have one parent at a time; appending an element which already has
/// one fails with [`DocumentError::InvalidState`].
///
/// Read access goes through [`Cursor`] values returned from
/// [`Document::root`] and [`Document::cursor`].
#[derive(Clone, Debug)]
pub struct Document {
    arena: Arena<Element>,
    root: NodeId,
}

impl Document {
    pub fn new(root_tag_name: &str) -> Result<Document, DocumentError> {
        check_name(root_tag_name)?;
        let mut arena = Arena::new();
        let root = arena.alloc(Element::new(root_tag_name))?;

        Ok(Document { arena, root })
    }

    pub fn root(&self) -> Cursor<'_> {
        match self.arena.get(self.root) {
            Some(element) => Cursor::new(self, self.root, element),
            None => unreachable!("document root is always allocated"),
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn cursor(&self, node: NodeId) -> Option<Cursor<'_>> {
        self.arena
            .get(node)
            .map(|element| Cursor::new(self, node, element))
    }

    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    fn element(&self, node: NodeId) -> Result<&Element, DocumentError> {
        self.arena
            .get(node)
            .ok_or(DocumentError::InvalidArgument(description::UNKNOWN_NODE))
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element, DocumentError> {
        self.arena
            .get_mut(node)
            .ok_or(DocumentError::InvalidArgument(description::UNKNOWN_NODE))
    }

    //
    // Edit methods
    //

    /// Creates a detached element with the given name.
    ///
    /// The element is not part of the tree until it is appended to
    /// an attached element.
    pub fn create_element(&mut self, tag_name: &str) -> Result<NodeId, DocumentError> {
        check_name(tag_name)?;
        Ok(self.arena.alloc(Element::new(tag_name))?)
    }

    /// Creates an element and appends it as the last child of `parent`.
    pub fn insert_tag(&mut self, parent: NodeId, tag_name: &str) -> Result<NodeId, DocumentError> {
        // Unknown parent must fail before anything is allocated
        self.element(parent)?;
        let child = self.create_element(tag_name)?;
        self.append_child(parent, child)?;

        Ok(child)
    }

    /// Appends a detached element of this document to `parent`.
    ///
    /// Fails with [`DocumentError::InvalidState`] if the child already
    /// has a parent, is the root, belongs to another document, or the
    /// append would make a cycle. Trees built in another document are
    /// moved in with [`Document::append_document`].
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.element(parent)?;
        if !self.arena.owns(child) {
            debug!(?child, ?parent, "rejected append of a node from another document");
            return Err(DocumentError::InvalidState(description::FOREIGN_NODE));
        }
        let child_element = self.element(child)?;
        if child == self.root {
            return Err(DocumentError::InvalidState(description::ROOT_CHILD));
        }
        if child_element.parent.is_some() {
            debug!(?child, ?parent, "rejected append of an already owned node");
            return Err(DocumentError::InvalidState(description::ALREADY_OWNED));
        }
        if child == parent {
            return Err(DocumentError::InvalidState(description::CYCLE));
        }
        // A childless node cannot be an ancestor of the parent
        if !child_element.children.is_empty() {
            let mut ancestor = self.element(parent)?.parent;
            while let Some(node) = ancestor {
                if node == child {
                    return Err(DocumentError::InvalidState(description::CYCLE));
                }
                ancestor = self.arena.get(node).and_then(|element| element.parent);
            }
        }

        let parent_element = self.element_mut(parent)?;
        parent_element
            .children
            .try_reserve(1)
            .map_err(NoMemory::from)?;
        parent_element.children.push(child);
        self.element_mut(child)?.parent = Some(parent);

        Ok(())
    }

    /// Moves the whole tree of `other` under `parent`.
    ///
    /// The root of `other` becomes the last child of `parent`, and its
    /// new handle is returned. Handles into `other` are invalid after
    /// the move; the returned root is the way back into the subtree.
    pub fn append_document(
        &mut self,
        parent: NodeId,
        other: Document,
    ) -> Result<NodeId, DocumentError> {
        self.element_mut(parent)?
            .children
            .try_reserve(1)
            .map_err(NoMemory::from)?;
        let Document { arena, root } = other;
        let rebase = self.arena.absorb(arena, |element, rebase| {
            element.parent = element.parent.map(|id| rebase.id(id));
            for child in element.children.iter_mut() {
                *child = rebase.id(*child);
            }
        })?;
        let root = rebase.id(root);
        self.append_child(parent, root)?;
        debug!(?root, ?parent, "moved document under a new parent");

        Ok(root)
    }

    /// Detaches the element from its parent.
    ///
    /// The element and its subtree stay in the arena and can be
    /// appended somewhere else. Detaching the root or an already
    /// detached element does nothing.
    pub fn detach(&mut self, node: NodeId) -> Result<(), DocumentError> {
        let Some(parent) = self.element(node)?.parent else {
            return Ok(());
        };
        let parent_element = self.element_mut(parent)?;
        parent_element.children.retain(|&child| child != node);
        self.element_mut(node)?.parent = None;

        Ok(())
    }

    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        check_attribute_name(name)?;
        let element = self.element_mut(node)?;
        if let Some(attr) = element.attributes.iter_mut().find(|attr| attr.name == name) {
            // Existing attribute keeps its position
            attr.value = value.to_string();
            return Ok(());
        }
        element
            .attributes
            .try_reserve(1)
            .map_err(NoMemory::from)?;
        element.attributes.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });

        Ok(())
    }

    pub fn remove_attribute(
        &mut self,
        node: NodeId,
        name: &str,
    ) -> Result<Option<String>, DocumentError> {
        let element = self.element_mut(node)?;
        let removed = element
            .attributes
            .iter()
            .position(|attr| attr.name == name)
            .map(|pos| element.attributes.remove(pos).value);

        Ok(removed)
    }

    /// Replaces the text of the element. Empty text removes it.
    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DocumentError> {
        self.element_mut(node)?.text = match text {
            "" => None,
            text => Some(text.to_string()),
        };
        Ok(())
    }

    //
    // Convenience functions to avoid typing .cursor() all the time
    //

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.cursor(node).and_then(|cursor| cursor.attribute(name))
    }

    pub fn find_tag(&self, name: &str) -> Option<Cursor<'_>> {
        self.root().find_tag(name)
    }

    pub fn str_size(&self) -> usize {
        self.root().str_size()
    }

    #[allow(
        clippy::inherent_to_string_shadow_display,
        reason = "prereserving exact capacity makes this function significantly faster"
    )]
    pub fn to_string(&self) -> String {
        self.root().to_string()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.root(), f)
    }
}

/// Read-only view of one element in a [`Document`].
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    document: &'a Document,
    id: NodeId,
    element: &'a Element,
}

impl<'a> Cursor<'a> {
    fn new(document: &'a Document, id: NodeId, element: &'a Element) -> Cursor<'a> {
        Cursor {
            document,
            id,
            element,
        }
    }

    fn visitor(&self) -> Visitor<'a> {
        Visitor::new(&self.document.arena, self.element)
    }

    fn write_markup<W: Write>(&self, w: &mut W) -> std::fmt::Result {
        for step in self.visitor() {
            match step {
                VisitorStep::StartTag(element) => {
                    w.write_char('<')?;
                    w.write_str(&element.name)?;
                    for attr in &element.attributes {
                        w.write_char(' ')?;
                        w.write_str(&attr.name)?;
                        w.write_str("=\"")?;
                        escape(&attr.value, w)?;
                        w.write_char('"')?;
                    }
                    if element.is_empty() {
                        w.write_str("/>")?;
                    } else {
                        w.write_char('>')?;
                        if let Some(text) = element.text() {
                            escape(text, w)?;
                        }
                    }
                }
                VisitorStep::EndTag(element) => {
                    if element.is_empty() {
                        // Already handled
                    } else {
                        w.write_str("</")?;
                        w.write_str(&element.name)?;
                        w.write_char('>')?;
                    }
                }
            }
        }

        Ok(())
    }

    //
    // Navigation methods
    //

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<Cursor<'a>> {
        self.element
            .parent
            .and_then(|parent| self.document.cursor(parent))
    }

    pub fn first_child(&self) -> Option<Cursor<'a>> {
        self.element
            .children
            .first()
            .and_then(|&child| self.document.cursor(child))
    }

    pub fn last_child(&self) -> Option<Cursor<'a>> {
        self.element
            .children
            .last()
            .and_then(|&child| self.document.cursor(child))
    }

    /// Finds the first direct child with the given name.
    pub fn find_tag(&self, name: &str) -> Option<Cursor<'a>> {
        self.children().find(|child| child.name() == name)
    }

    //
    // Iterator methods
    //

    pub fn children(&self) -> Children<'a> {
        Children::new(self.document, &self.element.children)
    }

    pub fn attributes(&self) -> Attributes<'a> {
        Attributes::new(&self.element.attributes)
    }

    pub fn descendant_or_self(&self) -> DescendantOrSelf<'a> {
        DescendantOrSelf::new(*self)
    }

    //
    // Node property methods
    //

    pub fn name(&self) -> &'a str {
        &self.element.name
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element
            .attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn text(&self) -> Option<&'a str> {
        self.element.text.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.id == self.document.root
    }

    pub fn str_size(&self) -> usize {
        let mut size = 0;
        for step in self.visitor() {
            match step {
                VisitorStep::StartTag(element) => {
                    size += 1; // Tag opening '<'
                    size += element.name.len();
                    for attr in &element.attributes {
                        size += 1; // space
                        size += attr.name.len();
                        size += 2; // =" characters
                        size += escaped_size(&attr.value);
                        size += 1; // " character
                    }
                    if element.is_empty() {
                        size += 2; // Standalone tag closing '/>'
                    } else {
                        size += 1; // Tag closing '>'
                        if let Some(text) = element.text() {
                            size += escaped_size(text);
                        }
                    }
                }
                VisitorStep::EndTag(element) => {
                    if !element.is_empty() {
                        size += 2; // End tag opening '</'
                        size += element.name.len();
                        size += 1; // End tag closing '>'
                    }
                }
            }
        }

        size
    }

    #[allow(
        clippy::inherent_to_string_shadow_display,
        reason = "prereserving exact capacity makes this function significantly faster"
    )]
    pub fn to_string(&self) -> String {
        let mut buf = String::with_capacity(self.str_size());
        // Writing into a String never fails
        let _ = self.write_markup(&mut buf);
        buf
    }
}

impl Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cursor ({:?} <{}>)", self.id, self.element.name)
    }
}

impl std::fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_markup(f)
    }
}


mod nocompile;
