//! Rules for what counts as a usable entry name.
//!
//! A `Tree` will happily store any `String` as a name, because JSON documents
//! can contain anything. But a name is only "well-formed text" if it could
//! actually be addressed by a path:
//!
//!  * Not empty
//!  * Not `.` or `..`
//!  * No `/` anywhere
//!  * No control characters
//!
//! Traversals keep malformed entries (they still have a size, and still
//! count), but anything that inspects the *text* of a name skips them.
//!
//! ```
//! use ::vtree::is_well_formed_name;
//!
//! assert!(is_well_formed_name("report.pdf"));
//! assert!(!is_well_formed_name("a/b"));
//! ```

pub fn is_well_formed_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.chars().any(|c| c == '/' || c.is_control())
}
