/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

#![allow(dead_code)]

use iksnode::{Document, NodeId};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

fn open_tag(doc: &mut Option<Document>, stack: &[NodeId], tag: &BytesStart<'_>) -> NodeId {
    let name = std::str::from_utf8(tag.name().as_ref()).unwrap().to_string();
    let node = match doc {
        None => {
            let new_doc = Document::new(&name).unwrap();
            let root = new_doc.root_id();
            *doc = Some(new_doc);
            root
        }
        Some(existing) => existing.insert_tag(*stack.last().unwrap(), &name).unwrap(),
    };
    let doc = doc.as_mut().unwrap();
    for attr in tag.attributes() {
        let attr = attr.unwrap();
        let key = std::str::from_utf8(attr.key.as_ref()).unwrap();
        let value = attr.unescape_value().unwrap();
        doc.set_attribute(node, key, &value).unwrap();
    }
    node
}

/// Builds a document from markup with quick-xml standing in for the
/// stream parser of a client.
pub fn parse(xml: &str) -> Document {
    let mut reader = Reader::from_str(xml);
    let mut doc: Option<Document> = None;
    let mut stack: Vec<NodeId> = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(tag) => {
                let node = open_tag(&mut doc, &stack, &tag);
                stack.push(node);
            }
            Event::Empty(tag) => {
                open_tag(&mut doc, &stack, &tag);
            }
            Event::Text(text) => {
                let text = text.unescape().unwrap();
                let node = *stack.last().unwrap();
                doc.as_mut().unwrap().set_text(node, &text).unwrap();
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    doc.unwrap()
}
