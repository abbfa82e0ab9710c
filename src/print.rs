//! Text output for maps with printable keys and values.

use std::fmt;
use std::io;

use crate::map::AvlTreeMap;

/// Renders a map as one `key\tvalue` line per entry, in ascending key order.
///
/// This `struct` is created by the [`display_in_order`] method on [`AvlTreeMap`].
///
/// [`AvlTreeMap`]: struct.AvlTreeMap.html
/// [`display_in_order`]: struct.AvlTreeMap.html#method.display_in_order
pub struct InOrder<'a, K, V> {
    map: &'a AvlTreeMap<K, V>,
}

impl<K: fmt::Display, V: fmt::Display> AvlTreeMap<K, V> {
    /// Writes the map contents to `os` using an in-order traversal,
    /// one tab separated `key`, `value` line per entry.
    pub fn print_in_order<W: io::Write>(&self, os: &mut W) -> io::Result<()> {
        for (key, value) in self {
            writeln!(os, "{key}\t{value}")?;
        }
        Ok(())
    }

    /// Returns an adapter that formats the map the same way as `print_in_order`.
    pub fn display_in_order(&self) -> InOrder<'_, K, V> {
        InOrder { map: self }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for InOrder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (key, value) in self.map {
            writeln!(f, "{key}\t{value}")?;
        }
        Ok(())
    }
}
