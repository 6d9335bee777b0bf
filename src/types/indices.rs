//! Strongly-typed index newtypes.
//!
//! A column is addressed by a flat [`ColumnIndex`] (see
//! [`HorizontalExtent`](super::HorizontalExtent) for the (i, j) mapping) and a
//! layer inside a column by a [`LevelIndex`], counted from the bottom.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Iterate over [0, n).
            pub fn iter(n: usize) -> impl ExactSizeIterator<Item = $name> {
                (0..n).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for [T] {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for Vec<T> {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }
    };
}

define_index!(
    /// Flat index of a horizontal water column.
    ///
    /// # Example
    ///
    /// ```
    /// use bgc_rs::types::ColumnIndex;
    ///
    /// let c = ColumnIndex::new(7);
    /// assert_eq!(c.get(), 7);
    /// assert_eq!(c.to_string(), "C7");
    /// ```
    ColumnIndex,
    "C"
);

define_index!(
    /// Vertical layer index, 0 at the bottom of the column.
    ///
    /// # Example
    ///
    /// ```
    /// use bgc_rs::types::LevelIndex;
    ///
    /// let k = LevelIndex::new(3);
    /// assert_eq!(k.get(), 3);
    /// ```
    LevelIndex,
    "L"
);

impl LevelIndex {
    /// Iterate over [0, n) from the surface layer down to the bottom layer.
    ///
    /// Every pass of [`light_column`](crate::light::light_column) walks a
    /// column in this order.
    ///
    /// ```
    /// use bgc_rs::types::LevelIndex;
    ///
    /// let order: Vec<usize> = LevelIndex::surface_down(3).map(|k| k.get()).collect();
    /// assert_eq!(order, vec![2, 1, 0]);
    /// ```
    pub fn surface_down(n: usize) -> impl ExactSizeIterator<Item = LevelIndex> {
        (0..n).rev().map(LevelIndex)
    }
}
