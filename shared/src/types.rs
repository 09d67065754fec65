//! Common types for the shared crate
//!
//! Small value types used by both the engine and the report layer.

use serde::Serialize;
use std::fmt;

/// Table number (桌号)
///
/// Tables are numbered from 1. There is no table 0, so a `TableId` can always
/// be turned into a dense array index with [`TableId::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TableId(u32);

impl TableId {
    /// Returns `None` for 0
    pub const fn new(id: u32) -> Option<Self> {
        if id == 0 { None } else { Some(Self(id)) }
    }

    /// Table id for a 0-based slot
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// 0-based slot in a dense table array
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
