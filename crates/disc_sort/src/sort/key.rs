//! Keys the sort automaton orders elements by.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An element that exposes a partially ordered key.
///
/// Elements whose keys compare as unordered (for example `NaN`) are treated as greater
/// than the pivot, so they never stall a partition pass.
pub trait SortKey {
    type Key: PartialOrd + ?Sized;

    fn sort_key(&self) -> &Self::Key;
}

macro_rules! impl_sort_key_for_self {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SortKey for $ty {
                type Key = $ty;

                #[inline]
                fn sort_key(&self) -> &Self::Key {
                    self
                }
            }
        )*
    };
}

impl_sort_key_for_self!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool, String,
);

impl SortKey for &str {
    type Key = str;

    #[inline]
    fn sort_key(&self) -> &str {
        self
    }
}

/// A payload carried along with the key it is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keyed<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Keyed<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: PartialOrd, V> SortKey for Keyed<K, V> {
    type Key = K;

    #[inline]
    fn sort_key(&self) -> &K {
        &self.key
    }
}
