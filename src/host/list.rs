//! Ordered host lists.

use super::HostValue;

/// An ordered list with an optional separator marker.
///
/// The marker records how the list should be separated once converted to
/// Sass: `Some(true)` comma, `Some(false)` space, `None` unmarked (the
/// conversion options decide). Lists converted from Sass always carry the
/// source separator, so converting them back reproduces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostList {
    items: Vec<HostValue>,
    separator: Option<bool>,
}

impl HostList {
    /// Create an unmarked list.
    pub fn new(items: Vec<HostValue>) -> Self {
        Self {
            items,
            separator: None,
        }
    }

    /// Create a list marked comma-separated.
    pub fn comma(items: Vec<HostValue>) -> Self {
        Self::new(items).with_separator(true)
    }

    /// Create a list marked space-separated.
    pub fn space(items: Vec<HostValue>) -> Self {
        Self::new(items).with_separator(false)
    }

    /// Set the separator marker (`true` comma, `false` space).
    pub fn with_separator(mut self, comma: bool) -> Self {
        self.separator = Some(comma);
        self
    }

    /// The separator marker, if any.
    pub fn separator(&self) -> Option<bool> {
        self.separator
    }

    /// Replace the separator marker.
    pub fn set_separator(&mut self, separator: Option<bool>) {
        self.separator = separator;
    }

    /// Elements in order.
    pub fn items(&self) -> &[HostValue] {
        &self.items
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Option<&HostValue> {
        self.items.get(index)
    }

    /// Append an element.
    pub fn push(&mut self, value: impl Into<HostValue>) {
        self.items.push(value.into());
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, HostValue> {
        self.items.iter()
    }

    /// Take the elements, dropping the marker.
    pub fn into_items(self) -> Vec<HostValue> {
        self.items
    }
}

impl<V: Into<HostValue>> FromIterator<V> for HostList {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for HostList {
    type Item = HostValue;
    type IntoIter = std::vec::IntoIter<HostValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a HostList {
    type Item = &'a HostValue;
    type IntoIter = std::slice::Iter<'a, HostValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
