use lazy_regex::regex;
use std::borrow::Cow;
use std::fmt;

/// A path into a `Tree`, in canonical form.
///
/// Canonical paths obey the following rules:
///
///  * Segments are separated by a single /
///  * No leading or trailing /
///  * No empty or `.` segments
///
/// Anything can be converted into a canonical path, by throwing away whatever
/// breaks the rules. So `"//Documents/./Projects/"` becomes
/// `"Documents/Projects"`, and `"/"` or `"."` become the empty path, which
/// means "stay at the root". `..` is kept as an ordinary segment, and never
/// resolves to anything.
#[derive(Clone, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct TreePath(String);

impl TreePath {
    /// The empty path, which resolves to the root.
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Segments from the root downward. The root path has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Final segment, if any.
    pub fn name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Append a path (which gets canonized first) to this one.
    pub fn join(&self, rest: impl AsRef<str>) -> Self {
        let rest = Self::canonize(rest.as_ref());
        match (self.is_root(), rest.is_empty()) {
            (_, true) => self.clone(),
            (true, false) => Self(rest.into_owned()),
            (false, false) => Self(format!("{}/{}", self.0, rest)),
        }
    }

    pub fn is_canonical(src: &str) -> bool {
        src.is_empty() || src.split('/').all(|seg| !matches!(seg, "" | "."))
    }

    pub fn canonize(src: &str) -> Cow<'_, str> {
        if Self::is_canonical(src) {
            Cow::Borrowed(src)
        } else {
            Cow::Owned(Self::force_canonize(src))
        }
    }

    pub fn force_canonize(src: &str) -> String {
        regex!("/+")
            .split(src)
            .filter(|s| !matches!(*s, "" | "."))
            .collect::<Vec<&str>>()
            .join("/")
    }
}

impl AsRef<str> for TreePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TreePath {
    fn from(other: &str) -> Self {
        Self(Self::canonize(other).into_owned())
    }
}
impl From<&String> for TreePath {
    fn from(other: &String) -> Self {
        other.as_str().into()
    }
}
impl From<String> for TreePath {
    fn from(other: String) -> Self {
        if Self::is_canonical(&other) {
            Self(other)
        } else {
            Self(Self::force_canonize(&other))
        }
    }
}
impl From<&TreePath> for TreePath {
    fn from(other: &TreePath) -> Self {
        other.clone()
    }
}

impl PartialEq<&str> for TreePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == Self::canonize(other)
    }
}
