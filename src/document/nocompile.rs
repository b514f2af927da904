/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

/// # Must not compile tests
///
/// Returned Cursor cannot outlive the Document:
/// ```compile_fail
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use iksnode::Document;
/// use iksnode::Cursor;
/// let c: Cursor;
/// {
///     let doc = Document::new("a")?;
///     c = doc.root();
/// }
/// println!("{}", c);
/// # Ok(())
/// # }
/// ```
///
/// Document cannot be edited while a Cursor is alive:
/// ```compile_fail
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use iksnode::Document;
/// let mut doc = Document::new("a")?;
/// let root = doc.root();
/// doc.set_text(root.id(), "lala")?;
/// println!("{}", root);
/// # Ok(())
/// # }
/// ```
///
/// Sealed stanzas cannot be edited:
/// ```compile_fail
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use iksnode::IqStanza;
/// use iksnode::IqType;
/// let mut sealed = IqStanza::new("a1", IqType::Set)?.seal();
/// sealed.set_bind_with_resource(None)?;
/// # Ok(())
/// # }
/// ```
///
#[cfg(doctest)]
struct MustNotCompileTests;
