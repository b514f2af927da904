/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;
use tracing::trace;

use crate::Cursor;
use crate::Document;
use crate::DocumentError;
use crate::NodeId;

use super::constants::BIND_NS;
use super::constants::BIND_TAG;
use super::constants::FROM_ATTR;
use super::constants::ID_ATTR;
use super::constants::IQ_TAG;
use super::constants::RESOURCE_TAG;
use super::constants::SESSION_NS;
use super::constants::SESSION_TAG;
use super::constants::TO_ATTR;
use super::constants::TYPE_ATTR;
use super::constants::XMLNS_ATTR;
use super::error::description;
use super::jid::Jid;

/// The closed set of IQ types this crate builds and accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IqType {
    Set,
    Result,
    Error,
}

impl IqType {
    pub fn as_str(self) -> &'static str {
        match self {
            IqType::Set => "set",
            IqType::Result => "result",
            IqType::Error => "error",
        }
    }

    /// True for the types which answer a request.
    pub fn is_response(self) -> bool {
        matches!(self, IqType::Result | IqType::Error)
    }
}

impl FromStr for IqType {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" => Ok(IqType::Set),
            "result" => Ok(IqType::Result),
            "error" => Ok(IqType::Error),
            _ => Err(DocumentError::InvalidArgument(description::BAD_IQ_TYPE)),
        }
    }
}

impl Display for IqType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn check_id(id: &str) -> Result<(), DocumentError> {
    if id.is_empty() {
        return Err(DocumentError::InvalidArgument(description::EMPTY_ID));
    }
    Ok(())
}

/// An Info/Query stanza.
///
/// This is a [`Document`] with the root element fixed to `iq` which
/// always carries a non-empty `id` and a valid `type` attribute. The
/// id is supplied by the caller and is what the response will be
/// correlated with.
///
/// All the tree operations of [`Document`] are available, and writes
/// to the root `id` and `type` attributes are validated so the two
/// invariants cannot be broken after construction.
///
/// ```
/// # fn main() -> Result<(), iksnode::DocumentError> {
/// use iksnode::{IqStanza, IqType};
///
/// let mut iq = IqStanza::new("bind_1", IqType::Set)?;
/// iq.set_bind_with_resource(Some("phone"))?;
/// assert_eq!(
///     iq.to_string(),
///     "<iq id=\"bind_1\" type=\"set\">\
///      <bind xmlns=\"urn:ietf:params:xml:ns:xmpp-bind\">\
///      <resource>phone</resource></bind></iq>"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct IqStanza {
    document: Document,
    iq_type: IqType,
}

impl IqStanza {
    pub fn new(id: &str, iq_type: IqType) -> Result<IqStanza, DocumentError> {
        check_id(id)?;
        let mut document = Document::new(IQ_TAG)?;
        let root = document.root_id();
        document.set_attribute(root, ID_ATTR, id)?;
        document.set_attribute(root, TYPE_ATTR, iq_type.as_str())?;
        trace!(id, %iq_type, "created iq stanza");

        Ok(IqStanza { document, iq_type })
    }

    /// Creates a stanza from the textual type, as found on the wire.
    pub fn create(id: &str, iq_type: &str) -> Result<IqStanza, DocumentError> {
        check_id(id)?;
        IqStanza::new(id, iq_type.parse::<IqType>()?)
    }

    pub fn id(&self) -> &str {
        self.document.root().attribute(ID_ATTR).unwrap_or_default()
    }

    pub fn iq_type(&self) -> IqType {
        self.iq_type
    }

    pub fn to(&self) -> Option<&str> {
        self.document.root().attribute(TO_ATTR)
    }

    pub fn from(&self) -> Option<&str> {
        self.document.root().attribute(FROM_ATTR)
    }

    pub fn set_to(&mut self, jid: &Jid) -> Result<(), DocumentError> {
        let root = self.document.root_id();
        self.document.set_attribute(root, TO_ATTR, jid.full())
    }

    pub fn set_from(&mut self, jid: &Jid) -> Result<(), DocumentError> {
        let root = self.document.root_id();
        self.document.set_attribute(root, FROM_ATTR, jid.full())
    }

    /// Appends a resource binding request.
    ///
    /// Without a resource, or with an empty one, the server is asked
    /// to generate the resource. Each call appends another `bind`
    /// element, so it should be called once per stanza.
    pub fn set_bind_with_resource(
        &mut self,
        resource: Option<&str>,
    ) -> Result<NodeId, DocumentError> {
        let resource = resource.filter(|resource| !resource.is_empty());
        let bind = self.document.create_element(BIND_TAG)?;
        self.document.set_attribute(bind, XMLNS_ATTR, BIND_NS)?;
        if let Some(resource) = resource {
            let node = self.document.insert_tag(bind, RESOURCE_TAG)?;
            self.document.set_text(node, resource)?;
        }
        // Attached last so that a failure leaves the stanza untouched
        self.document.append_child(self.document.root_id(), bind)?;
        debug!(id = self.id(), resource, "appended bind request");

        Ok(bind)
    }

    /// Appends a session establishment request.
    pub fn set_session(&mut self) -> Result<NodeId, DocumentError> {
        let session = self.document.create_element(SESSION_TAG)?;
        self.document.set_attribute(session, XMLNS_ATTR, SESSION_NS)?;
        self.document.append_child(self.document.root_id(), session)?;
        debug!(id = self.id(), "appended session request");

        Ok(session)
    }

    /// Builds the response skeleton for this request.
    ///
    /// The reply carries the same id, and the addressing is swapped.
    pub fn reply(&self, iq_type: IqType) -> Result<IqStanza, DocumentError> {
        if !iq_type.is_response() {
            return Err(DocumentError::InvalidArgument(description::REPLY_TYPE));
        }
        let mut reply = IqStanza::new(self.id(), iq_type)?;
        let root = reply.document.root_id();
        if let Some(from) = self.from() {
            reply.document.set_attribute(root, TO_ATTR, from)?;
        }
        if let Some(to) = self.to() {
            reply.document.set_attribute(root, FROM_ATTR, to)?;
        }

        Ok(reply)
    }

    /// True if this stanza is a result or error for the given request.
    pub fn is_response_to(&self, request: &IqStanza) -> bool {
        self.iq_type.is_response() && self.id() == request.id()
    }

    /// Freezes the stanza, typically right before it is sent.
    pub fn seal(self) -> SealedIq {
        trace!(id = self.id(), "sealed iq stanza");
        SealedIq { stanza: self }
    }

    //
    // Document methods
    //

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn root(&self) -> Cursor<'_> {
        self.document.root()
    }

    pub fn root_id(&self) -> NodeId {
        self.document.root_id()
    }

    pub fn cursor(&self, node: NodeId) -> Option<Cursor<'_>> {
        self.document.cursor(node)
    }

    pub fn create_element(&mut self, tag_name: &str) -> Result<NodeId, DocumentError> {
        self.document.create_element(tag_name)
    }

    pub fn insert_tag(&mut self, parent: NodeId, tag_name: &str) -> Result<NodeId, DocumentError> {
        self.document.insert_tag(parent, tag_name)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.document.append_child(parent, child)
    }

    pub fn append_document(
        &mut self,
        parent: NodeId,
        other: Document,
    ) -> Result<NodeId, DocumentError> {
        self.document.append_document(parent, other)
    }

    pub fn detach(&mut self, node: NodeId) -> Result<(), DocumentError> {
        self.document.detach(node)
    }

    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        if node == self.document.root_id() {
            match name {
                ID_ATTR => check_id(value)?,
                TYPE_ATTR => {
                    let iq_type: IqType = value.parse()?;
                    self.document.set_attribute(node, name, value)?;
                    self.iq_type = iq_type;
                    return Ok(());
                }
                _ => {}
            }
        }
        self.document.set_attribute(node, name, value)
    }

    pub fn remove_attribute(
        &mut self,
        node: NodeId,
        name: &str,
    ) -> Result<Option<String>, DocumentError> {
        if node == self.document.root_id() {
            match name {
                ID_ATTR => return Err(DocumentError::InvalidArgument(description::EMPTY_ID)),
                TYPE_ATTR => return Err(DocumentError::InvalidArgument(description::BAD_IQ_TYPE)),
                _ => {}
            }
        }
        self.document.remove_attribute(node, name)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.document.attribute(node, name)
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DocumentError> {
        self.document.set_text(node, text)
    }

    pub fn find_tag(&self, name: &str) -> Option<Cursor<'_>> {
        self.document.find_tag(name)
    }

    pub fn str_size(&self) -> usize {
        self.document.str_size()
    }

    #[allow(
        clippy::inherent_to_string_shadow_display,
        reason = "prereserving exact capacity makes this function significantly faster"
    )]
    pub fn to_string(&self) -> String {
        self.document.to_string()
    }
}

impl Display for IqStanza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.document, f)
    }
}

impl TryFrom<Document> for IqStanza {
    type Error = DocumentError;

    /// Wraps a received tree, checking the iq invariants.
    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let iq_type = {
            let root = document.root();
            if root.name() != IQ_TAG {
                return Err(DocumentError::InvalidArgument(description::NOT_IQ));
            }
            check_id(root.attribute(ID_ATTR).unwrap_or_default())?;
            root.attribute(TYPE_ATTR).unwrap_or_default().parse::<IqType>()?
        };

        Ok(IqStanza { document, iq_type })
    }
}

impl From<IqStanza> for Document {
    fn from(stanza: IqStanza) -> Self {
        stanza.document
    }
}

/// An [`IqStanza`] which cannot be modified anymore.
#[derive(Clone, Debug)]
pub struct SealedIq {
    stanza: IqStanza,
}

impl SealedIq {
    pub fn id(&self) -> &str {
        self.stanza.id()
    }

    pub fn iq_type(&self) -> IqType {
        self.stanza.iq_type()
    }

    pub fn to(&self) -> Option<&str> {
        self.stanza.to()
    }

    pub fn from(&self) -> Option<&str> {
        self.stanza.from()
    }

    pub fn root(&self) -> Cursor<'_> {
        self.stanza.root()
    }

    pub fn document(&self) -> &Document {
        self.stanza.document()
    }

    pub fn reply(&self, iq_type: IqType) -> Result<IqStanza, DocumentError> {
        self.stanza.reply(iq_type)
    }

    pub fn is_response_to(&self, request: &IqStanza) -> bool {
        self.stanza.is_response_to(request)
    }

    pub fn str_size(&self) -> usize {
        self.stanza.str_size()
    }

    #[allow(
        clippy::inherent_to_string_shadow_display,
        reason = "prereserving exact capacity makes this function significantly faster"
    )]
    pub fn to_string(&self) -> String {
        self.stanza.to_string()
    }
}

impl Display for SealedIq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.stanza, f)
    }
}
