//! The dynamically-typed index accepted by `item()`

/// Argument passed to `item()` on results and result lists.
///
/// Browser callers can pass anything (or nothing) to `item`, so the index
/// keeps track of what kind of value was supplied rather than forcing a
/// `usize` on the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemIndex {
    /// `item()` was called without an argument
    Missing,
    /// A numeric argument, possibly fractional, negative or NaN
    Number(f64),
    /// Any non-numeric argument
    NotANumber,
}

/// Where an index lands in a container of a given length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolved {
    Missing,
    Position(usize),
    OutOfRange,
}

impl ItemIndex {
    pub(crate) fn resolve(self, len: usize) -> Resolved {
        match self {
            ItemIndex::Missing => Resolved::Missing,
            ItemIndex::NotANumber => Resolved::Position(0),
            ItemIndex::Number(n) if n.is_nan() => Resolved::Position(0),
            ItemIndex::Number(n) if n < 0.0 || n >= len as f64 => Resolved::OutOfRange,
            ItemIndex::Number(n) => Resolved::Position(n.trunc() as usize),
        }
    }
}

macro_rules! index_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ItemIndex {
                fn from(value: $ty) -> Self {
                    ItemIndex::Number(value as f64)
                }
            }
        )*
    };
}

index_from_number!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);

impl From<&str> for ItemIndex {
    fn from(_: &str) -> Self {
        ItemIndex::NotANumber
    }
}

impl From<String> for ItemIndex {
    fn from(_: String) -> Self {
        ItemIndex::NotANumber
    }
}

impl From<bool> for ItemIndex {
    fn from(_: bool) -> Self {
        ItemIndex::NotANumber
    }
}

impl<T: Into<ItemIndex>> From<Option<T>> for ItemIndex {
    fn from(value: Option<T>) -> Self {
        value.map_or(ItemIndex::Missing, Into::into)
    }
}
