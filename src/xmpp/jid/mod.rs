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

use super::error::BadJid;
use super::error::description;

const MAX_PART_SIZE: usize = 1023;

fn check_part(part: &str, empty: &'static str, too_long: &'static str) -> Result<(), BadJid> {
    if part.is_empty() {
        return Err(BadJid(empty));
    }
    if part.len() > MAX_PART_SIZE {
        return Err(BadJid(too_long));
    }
    Ok(())
}

/// The address of an entity in the XMPP protocol.
///
/// Each JID has three parts:
/// - Local part: Optionally identifies a local entity on the domain.
/// - Domain part: Identifies an XMPP server.
/// - Resource part: Optionally identifies a connected client or an object.
///
/// Only the length rules of [RFC7622](https://datatracker.ietf.org/doc/rfc7622/)
/// are checked, string preparation is left to the server.
///
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Jid {
    full: String,
    at_pos: Option<usize>,
    slash_pos: Option<usize>,
}

impl Jid {
    /// Create a JID from a string.
    pub fn new(jid: &str) -> Result<Self, BadJid> {
        // The first slash starts the resource, which may contain '@'
        let slash_pos = jid.find('/');
        let bare = match slash_pos {
            Some(pos) => &jid[..pos],
            None => jid,
        };
        let at_pos = bare.find('@');

        let local = at_pos.map(|pos| &bare[..pos]);
        let mut domain = match at_pos {
            Some(pos) => &bare[pos + 1..],
            None => bare,
        };
        let resource = slash_pos.map(|pos| &jid[pos + 1..]);

        check_part(domain, description::DOMAIN_EMPTY, description::DOMAIN_TOO_LONG)?;
        // Final dot is removed as per RFC 7622 section 3.2
        if let Some(stripped) = domain.strip_suffix('.') {
            domain = stripped;
            check_part(domain, description::DOMAIN_EMPTY, description::DOMAIN_TOO_LONG)?;
        }
        if let Some(local) = local {
            check_part(local, description::LOCAL_EMPTY, description::LOCAL_TOO_LONG)?;
        }
        if let Some(resource) = resource {
            check_part(
                resource,
                description::RESOURCE_EMPTY,
                description::RESOURCE_TOO_LONG,
            )?;
        }

        let mut full = String::with_capacity(jid.len());
        let mut at_pos = None;
        let mut slash_pos = None;
        if let Some(local) = local {
            full.push_str(local);
            at_pos = Some(full.len());
            full.push('@');
        }
        full.push_str(domain);
        if let Some(resource) = resource {
            slash_pos = Some(full.len());
            full.push('/');
            full.push_str(resource);
        }

        Ok(Jid {
            full,
            at_pos,
            slash_pos,
        })
    }

    /// Full form of the JID with all the components.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Bare form of the JID without the resource part.
    pub fn bare(&self) -> &str {
        match self.slash_pos {
            Some(pos) => &self.full[..pos],
            None => &self.full,
        }
    }

    /// Only the local part of the JID.
    pub fn localpart(&self) -> Option<&str> {
        self.at_pos.map(|pos| &self.full[..pos])
    }

    /// Only the domain part of the JID.
    pub fn domainpart(&self) -> &str {
        let start = self.at_pos.map_or(0, |pos| pos + 1);
        let end = self.slash_pos.unwrap_or(self.full.len());
        &self.full[start..end]
    }

    /// Only the resource part of the JID.
    pub fn resourcepart(&self) -> Option<&str> {
        self.slash_pos.map(|pos| &self.full[pos + 1..])
    }

    /// True if the JID does not contain a resource part.
    pub fn is_bare(&self) -> bool {
        self.slash_pos.is_none()
    }

    /// Creates another JID by overriding the resource part.
    ///
    /// Typically used with the resource the server assigned during
    /// resource binding.
    pub fn with_resource(&self, resource: &str) -> Result<Jid, BadJid> {
        check_part(
            resource,
            description::RESOURCE_EMPTY,
            description::RESOURCE_TOO_LONG,
        )?;
        let bare = self.bare();
        let mut full = String::with_capacity(bare.len() + 1 + resource.len());
        full.push_str(bare);
        full.push('/');
        full.push_str(resource);

        Ok(Jid {
            full,
            at_pos: self.at_pos,
            slash_pos: Some(bare.len()),
        })
    }
}

impl Display for Jid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

impl FromStr for Jid {
    type Err = BadJid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Jid::new(s)
    }
}
