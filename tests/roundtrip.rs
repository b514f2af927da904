/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

mod common;

use iksnode::{BIND_NS, Document, IqStanza, IqType, Jid};

use common::parse;

fn check_roundtrip(xml: &str) {
    let doc = parse(xml);
    assert_eq!(doc.to_string(), xml);
}

#[test]
fn bind_request() {
    let mut iq = IqStanza::new("x1", IqType::Set).unwrap();
    iq.set_bind_with_resource(Some("phone")).unwrap();
    let xml = iq.to_string();
    check_roundtrip(&xml);

    let received = IqStanza::try_from(parse(&xml)).unwrap();
    assert_eq!(received.id(), "x1");
    assert_eq!(received.iq_type(), IqType::Set);
    let bind = received.find_tag("bind").unwrap();
    assert_eq!(bind.attribute("xmlns"), Some(BIND_NS));
    assert_eq!(bind.find_tag("resource").unwrap().text(), Some("phone"));
}

#[test]
fn bind_response_correlates() {
    let mut request = IqStanza::new("bind_7", IqType::Set).unwrap();
    request.set_bind_with_resource(None).unwrap();

    let wire = "<iq id=\"bind_7\" type=\"result\">\
                <bind xmlns=\"urn:ietf:params:xml:ns:xmpp-bind\">\
                <jid>juliet@example.com/4db06f06</jid></bind></iq>";
    let response = IqStanza::try_from(parse(wire)).unwrap();
    assert!(response.is_response_to(&request));

    let jid = response
        .find_tag("bind")
        .and_then(|bind| bind.find_tag("jid"))
        .and_then(|jid| jid.text())
        .unwrap();
    let jid = Jid::new(jid).unwrap();
    assert_eq!(jid.resourcepart(), Some("4db06f06"));
    check_roundtrip(wire);
}

#[test]
fn escaped_content() {
    let mut doc = Document::new("message").unwrap();
    let root = doc.root_id();
    doc.set_attribute(root, "to", "romeo@example.net").unwrap();
    doc.set_attribute(root, "note", "\"quoted\" & 'single' <tag>").unwrap();
    let body = doc.insert_tag(root, "body").unwrap();
    doc.set_text(body, "Wherefore art thou, <Romeo> & co?").unwrap();
    let xml = doc.to_string();
    check_roundtrip(&xml);

    let parsed = parse(&xml);
    assert_eq!(
        parsed.root().attribute("note"),
        Some("\"quoted\" & 'single' <tag>")
    );
    assert_eq!(
        parsed.find_tag("body").unwrap().text(),
        Some("Wherefore art thou, <Romeo> & co?")
    );
}

#[test]
fn attribute_and_child_order() {
    check_roundtrip("<a z=\"1\" y=\"2\" x=\"3\"><c/><b k=\"v\"/><a/></a>");
    check_roundtrip("<iq type=\"error\" id=\"e1\"><error type=\"cancel\"/></iq>");
    check_roundtrip("<a>text<b>more</b><c/></a>");
}
