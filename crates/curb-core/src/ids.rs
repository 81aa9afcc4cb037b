//! Node and edge identifiers.
//!
//! Both are dense `u32` indices into the network's arrays.  Keeping them as
//! separate types stops a `NodeId` from being passed where an `EdgeId` is
//! expected, which matters in the resolver where both travel side by side.

use std::fmt;

/// Typed wrapper around a primitive index.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Placeholder for slots not yet filled while building.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a road-network node (a tower node where edges meet).
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a physical road segment.
    ///
    /// Edges are stored once, undirected, and gated per travel direction by
    /// access flags.  Two distinct `EdgeId`s are always distinct segments,
    /// even when they join the same pair of nodes.
    pub struct EdgeId(u32);
}
