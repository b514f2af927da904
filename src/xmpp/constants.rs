/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

pub const IQ_TAG: &str = "iq";

pub const BIND_TAG: &str = "bind";

pub const RESOURCE_TAG: &str = "resource";

pub const SESSION_TAG: &str = "session";

pub const ID_ATTR: &str = "id";

pub const TYPE_ATTR: &str = "type";

pub const TO_ATTR: &str = "to";

pub const FROM_ATTR: &str = "from";

pub const XMLNS_ATTR: &str = "xmlns";

/// Resource binding namespace from RFC 6120 section 7.
pub const BIND_NS: &str = "urn:ietf:params:xml:ns:xmpp-bind";

/// Session establishment namespace from RFC 3921 section 3.
pub const SESSION_NS: &str = "urn:ietf:params:xml:ns:xmpp-session";
