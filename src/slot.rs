//! Slot array cells and the items they own.

/// An owned key/value pair. Both strings are private copies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Item {
    key: Box<str>,
    value: Box<str>,
}

impl Item {
    pub(crate) fn new(key: Box<str>, value: Box<str>) -> Self {
        Self { key, value }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn replace_value(&mut self, value: Box<str>) {
        self.value = value;
    }
}

/// One bucket of the open-addressed array.
///
/// `Tombstone` keeps probe sequences that passed through a deleted item
/// traversable. It only turns back into `Empty` when the table is rebuilt.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) enum Slot {
    #[default]
    Empty,
    Tombstone,
    Occupied(Item),
}

impl Slot {
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub(crate) fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    pub(crate) fn item(&self) -> Option<&Item> {
        match self {
            Slot::Occupied(item) => Some(item),
            _ => None,
        }
    }

    pub(crate) fn holds(&self, key: &str) -> bool {
        self.item().is_some_and(|item| item.key() == key)
    }

    /// Drops the item and leaves a tombstone. Returns whether an item was
    /// removed.
    pub(crate) fn bury(&mut self) -> bool {
        match self {
            Slot::Occupied(_) => {
                *self = Slot::Tombstone;
                true
            }
            _ => false,
        }
    }

    /// Moves the item out, leaving `Empty`. Used when draining an array
    /// that is about to be discarded.
    pub(crate) fn take_item(&mut self) -> Option<Item> {
        match core::mem::take(self) {
            Slot::Occupied(item) => Some(item),
            _ => None,
        }
    }
}
