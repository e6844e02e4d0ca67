//! Console rendering of file names.
//!
//! Archive entries often carry names in legacy code pages. Logging them must
//! never fail: names that are not UTF-8, or that the configured console
//! charset cannot represent, are shown escaped. Only log text is affected.

use encoding_rs::Encoding;
use std::ffi::OsStr;
use std::path::Path;

pub fn display_name(name: &OsStr, console: Option<&'static Encoding>) -> String {
    let Some(text) = name.to_str() else {
        return format!("{:?}", name);
    };

    match console {
        None => text.to_string(),
        Some(encoding) => {
            let (_, _, had_errors) = encoding.encode(text);
            if had_errors {
                escape_unmappable(text, encoding)
            } else {
                text.to_string()
            }
        }
    }
}

pub fn display_path(path: &Path, console: Option<&'static Encoding>) -> String {
    display_name(path.as_os_str(), console)
}

fn escape_unmappable(text: &str, encoding: &'static Encoding) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let (_, _, unmappable) = encoding.encode(c.encode_utf8(&mut buf));
        if unmappable {
            out.extend(c.escape_unicode());
        } else {
            out.push(c);
        }
    }
    out
}
