/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

//! XML element trees and Info/Query stanzas for Jabber/XMPP.
//!
//! A [`Document`] owns a tree of elements with ordered attributes,
//! ordered children and optional text, and serializes it to markup.
//! [`IqStanza`] builds on it with the mandatory `id` and `type`
//! attributes of an IQ stanza and helpers such as resource binding.
//!
//! Transport and parsing are left to the caller.

mod arena;
mod document;
mod entities;
mod xmpp;

pub use arena::ArenaStats;
pub use arena::NoMemory;
pub use arena::NodeId;

pub use document::Attributes;
pub use document::Children;
pub use document::Cursor;
pub use document::DescendantOrSelf;
pub use document::Document;
pub use document::DocumentError;

pub use xmpp::BIND_NS;
pub use xmpp::BadJid;
pub use xmpp::IqStanza;
pub use xmpp::IqType;
pub use xmpp::Jid;
pub use xmpp::SESSION_NS;
pub use xmpp::SealedIq;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
