/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::error::Error;
use std::fmt::Display;

use crate::NoMemory;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum DocumentError {
    NoMemory,
    InvalidArgument(&'static str),
    InvalidState(&'static str),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::NoMemory => write!(f, "not enough memory"),
            DocumentError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            DocumentError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl Error for DocumentError {}

impl From<NoMemory> for DocumentError {
    fn from(_: NoMemory) -> Self {
        DocumentError::NoMemory
    }
}

pub(crate) mod description {
    pub(crate) const EMPTY_NAME: &str = "element name is empty";
    pub(crate) const BAD_NAME: &str = "element name contains a reserved character";
    pub(crate) const EMPTY_ATTRIBUTE_NAME: &str = "attribute name is empty";
    pub(crate) const BAD_ATTRIBUTE_NAME: &str = "attribute name contains a reserved character";
    pub(crate) const UNKNOWN_NODE: &str = "node does not belong to this document";
    pub(crate) const FOREIGN_NODE: &str = "node belongs to another document";
    pub(crate) const ALREADY_OWNED: &str = "node already has a parent";
    pub(crate) const CYCLE: &str = "node cannot be appended under itself or its descendants";
    pub(crate) const ROOT_CHILD: &str = "document root cannot be appended to another node";
}
