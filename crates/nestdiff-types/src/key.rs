use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical mapping key.
///
/// All keys are strings. Other key kinds are normalized when a tree is
/// built: integers become their decimal form, `true` becomes `"1"`,
/// `false` becomes `"0"` and null becomes the empty string. As a result
/// `Key::from(1)`, `Key::from(true)` and `Key::from("1")` address the same
/// slot of a [`Tree`](crate::Tree).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Create a key from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The key a null key normalizes to.
    pub fn null() -> Self {
        Self(String::new())
    }

    /// The key for position `index` of a list.
    pub fn index(index: usize) -> Self {
        Self(index.to_string())
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning its string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({:?})", self.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Self(if b { "1" } else { "0" }.to_owned())
    }
}

impl From<()> for Key {
    fn from(_: ()) -> Self {
        Self::null()
    }
}

impl<T: Into<Key>> From<Option<T>> for Key {
    fn from(opt: Option<T>) -> Self {
        opt.map_or_else(Self::null, Into::into)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(n: $t) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
