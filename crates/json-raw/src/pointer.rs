//! JSON Pointer (RFC 6901) navigation over raw values.
//!
//! Each step decodes only the container it passes through; the value that
//! is finally reached stays raw.

use crate::kind::Kind;
use crate::value::Value;

/// Unescapes a JSON Pointer reference token.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_raw::pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so that "~01" decodes to "~1" and not "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Split a JSON Pointer into unescaped reference tokens.
///
/// The empty pointer addresses the whole document and yields no tokens. A
/// pointer that does not start with `/` is invalid and yields `None`.
///
/// # Example
///
/// ```
/// use json_raw::pointer::parse_pointer;
///
/// assert_eq!(parse_pointer(""), Some(vec![]));
/// assert_eq!(parse_pointer("/"), Some(vec![String::new()]));
/// assert_eq!(parse_pointer("/a~1b/0"), Some(vec!["a/b".to_string(), "0".to_string()]));
/// assert_eq!(parse_pointer("a/b"), None);
/// ```
pub fn parse_pointer(pointer: &str) -> Option<Vec<String>> {
    if pointer.is_empty() {
        return Some(Vec::new());
    }
    let rest = pointer.strip_prefix('/')?;
    Some(rest.split('/').map(unescape_component).collect())
}

/// Check if a reference token is a valid array index: digits only, with no
/// leading zero unless the index is `0` itself.
pub fn is_array_index(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}

impl Value {
    /// Look up a nested value by JSON Pointer.
    ///
    /// Never fails: a malformed pointer, a missing key, an out-of-range or
    /// malformed index, or a step into a scalar gives `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_raw::Value;
    ///
    /// let doc = Value::from_raw(r#"{"users": [{"name": "ada", "born": 1815}]}"#);
    /// assert_eq!(doc.pointer("/users/0/name").unwrap().as_str(), "ada");
    /// assert_eq!(doc.pointer("/users/0/born").unwrap().as_int(0), 1815);
    /// assert!(doc.pointer("/users/1").is_none());
    /// ```
    pub fn pointer(&self, pointer: &str) -> Option<Value> {
        let tokens = parse_pointer(pointer)?;
        let mut current = self.clone();
        for token in &tokens {
            current = current.step(token)?;
        }
        Some(current)
    }

    fn step(&self, token: &str) -> Option<Value> {
        match self.kind() {
            kind if kind.is_scalar() => None,
            Kind::Object => self.decode::<crate::Object>().ok()?.swap_remove(token),
            Kind::Array => {
                if !is_array_index(token) {
                    return None;
                }
                let index: usize = token.parse().ok()?;
                self.decode::<crate::Array>().ok()?.into_iter().nth(index)
            }
            _ => None,
        }
    }
}
