/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

pub(crate) mod constants;
mod error;
mod iq;
mod jid;

pub use constants::BIND_NS;
pub use constants::SESSION_NS;
pub use error::BadJid;
pub use iq::IqStanza;
pub use iq::IqType;
pub use iq::SealedIq;
pub use jid::Jid;
