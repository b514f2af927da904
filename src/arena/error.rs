/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::Display;

/// Error type for memory allocation failures.
///
/// Arena methods return this error when the global allocator cannot
/// grow the item storage. Best action is to abort the current
/// operation and drop the partially built tree.
///
/// Details about the failed reservation are not kept to make this
/// error as lightweight as possible.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NoMemory;

impl Display for NoMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not enough memory")
    }
}

impl Error for NoMemory {}

impl From<TryReserveError> for NoMemory {
    fn from(_: TryReserveError) -> Self {
        NoMemory
    }
}
