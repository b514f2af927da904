/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::fmt::Write;

pub mod predefined {
    pub const LT: &str = "&lt;";
    pub const GT: &str = "&gt;";
    pub const AMP: &str = "&amp;";
    pub const APOS: &str = "&apos;";
    pub const QUOT: &str = "&quot;";
}

fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some(predefined::LT),
        '>' => Some(predefined::GT),
        '&' => Some(predefined::AMP),
        '\'' => Some(predefined::APOS),
        '"' => Some(predefined::QUOT),
        _ => None,
    }
}

pub fn escaped_size(s: &str) -> usize {
    s.chars()
        .map(|c| match entity(c) {
            Some(e) => e.len(),
            None => c.len_utf8(),
        })
        .sum()
}

/// Writes the string with the five predefined entities escaped.
///
/// Works for both String and Formatter targets so that the same code
/// serves to_string() and Display.
pub fn escape<W: Write>(s: &str, w: &mut W) -> std::fmt::Result {
    let mut start = 0;
    for (pos, c) in s.char_indices() {
        if let Some(e) = entity(c) {
            if start < pos {
                w.write_str(&s[start..pos])?;
            }
            w.write_str(e)?;
            start = pos + c.len_utf8();
        }
    }
    if start < s.len() {
        w.write_str(&s[start..])?;
    }

    Ok(())
}
