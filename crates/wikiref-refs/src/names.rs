//! Object name codec for the `className[objectNumber]` format.
//!
//! An object name is a class name optionally followed by an index marker
//! `[digits]` at the very end. Because a class name may itself end in text
//! that looks like an index marker, a marker can be escaped by the run of
//! backslashes right before its `[`:
//!
//! - an even run (including none) leaves the marker active; the run is
//!   literal text of the class name
//! - an odd run escapes the `[`; the whole name is the class name
//!
//! | name          | class name    | object number |
//! |---------------|---------------|---------------|
//! | `Mail`        | `Mail`        | none          |
//! | `Mail[0]`     | `Mail`        | 0             |
//! | `Mail[]`      | `Mail`        | none          |
//! | `Foo\[2]`     | `Foo\[2]`     | none          |
//! | `Foo\\[2]`    | `Foo\\`       | 2             |
//!
//! Backslash runs are counted directly rather than matched with
//! look-behind patterns.

use wikiref_model::syntax::ESCAPE;

use crate::error::{RefError, Result};

const INDEX_OPEN: char = '[';
const INDEX_CLOSE: char = ']';

/// A trailing `\*[\d*]` at the end of a name. Offsets are in bytes; every
/// character the marker spans is ASCII.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct IndexMarker {
    /// Start of the backslash run preceding `[`.
    run_start: usize,
    /// Position of `[`.
    open: usize,
}

impl IndexMarker {
    fn run_len(&self) -> usize {
        self.open - self.run_start
    }

    /// An odd backslash run makes the bracket literal text.
    fn is_escaped(&self) -> bool {
        self.run_len() % 2 == 1
    }

    fn digits<'a>(&self, name: &'a str) -> &'a str {
        &name[self.open + 1..name.len() - 1]
    }
}

fn find_index_marker(name: &str) -> Option<IndexMarker> {
    let inner = name.strip_suffix(INDEX_CLOSE)?;
    let before_digits = inner.trim_end_matches(|c: char| c.is_ascii_digit());
    let body = before_digits.strip_suffix(INDEX_OPEN)?;
    Some(IndexMarker {
        run_start: body.trim_end_matches(ESCAPE).len(),
        open: body.len(),
    })
}

/// A decoded object name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectNameParts<'a> {
    /// The class name as written, escapes included.
    pub class_name: &'a str,
    /// The object number, or `None` for the default object of the class.
    pub object_number: Option<u32>,
}

/// Split an object name into its class name and object number.
///
/// An empty index marker (`Mail[]`) yields no object number. Digits that
/// overflow the object number type are reported as
/// [`RefError::InvalidObjectNumber`].
///
/// # Examples
///
/// ```
/// use wikiref_refs::names::split_object_name;
///
/// let parts = split_object_name("XWiki.Mail[0]").unwrap();
/// assert_eq!(parts.class_name, "XWiki.Mail");
/// assert_eq!(parts.object_number, Some(0));
///
/// let parts = split_object_name(r"Foo\[2]").unwrap();
/// assert_eq!(parts.class_name, r"Foo\[2]");
/// assert_eq!(parts.object_number, None);
/// ```
pub fn split_object_name(name: &str) -> Result<ObjectNameParts<'_>> {
    let marker = match find_index_marker(name) {
        Some(marker) if !marker.is_escaped() => marker,
        _ => {
            return Ok(ObjectNameParts {
                class_name: name,
                object_number: None,
            })
        }
    };

    let digits = marker.digits(name);
    let object_number = if digits.is_empty() {
        None
    } else {
        let number = digits
            .parse::<u32>()
            .map_err(|source| RefError::InvalidObjectNumber {
                name: name.to_string(),
                digits: digits.to_string(),
                source,
            })?;
        Some(number)
    };

    Ok(ObjectNameParts {
        class_name: &name[..marker.open],
        object_number,
    })
}

/// Build an object name from a class name and an optional object number.
///
/// With a number, `[number]` is appended as is. Without one, a trailing
/// index marker in `class_name` that would read as active gets one more
/// backslash so that it reads back as literal text.
///
/// # Examples
///
/// ```
/// use wikiref_refs::names::join_object_name;
///
/// assert_eq!(join_object_name("XWiki.Mail", Some(0)), "XWiki.Mail[0]");
/// assert_eq!(join_object_name("XWiki.Mail", None), "XWiki.Mail");
/// assert_eq!(join_object_name("Foo[3]", None), r"Foo\[3]");
/// ```
pub fn join_object_name(class_name: &str, object_number: Option<u32>) -> String {
    if let Some(number) = object_number {
        return format!("{class_name}{INDEX_OPEN}{number}{INDEX_CLOSE}");
    }

    match find_index_marker(class_name) {
        Some(marker) if !marker.is_escaped() => {
            let mut name = String::with_capacity(class_name.len() + 1);
            name.push_str(&class_name[..marker.run_start]);
            name.push(ESCAPE);
            name.push_str(&class_name[marker.run_start..]);
            name
        }
        _ => class_name.to_string(),
    }
}
