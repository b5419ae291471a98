//! Register ids, lane sizes, and byte masks.
//!
//! A register is a 16-byte storage location (one vec4 of 32-bit lanes,
//! or eight 16-bit lanes, or eight of the low 8-bit lanes). Dataflow
//! over registers is tracked per byte via [`ByteMask`].

use std::fmt;

/// Width of a register in bytes. One mask bit per byte.
pub const REG_BYTES: usize = 16;

/// A register id.
///
/// Indices below [`VReg::FIXED_BASE`] are virtual registers, allocated
/// sequentially from 0 and renamed away by register allocation. Indices
/// at or above the base denote fixed hardware registers (ABI-pinned
/// inputs/outputs, scratch); those sit outside the virtual space and
/// are ignored by virtual-register dataflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VReg(u32);

impl VReg {
    /// First index of the fixed hardware-register range.
    pub const FIXED_BASE: u32 = 1 << 24;

    /// Create a virtual register id from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Create a fixed hardware register id.
    #[inline]
    pub const fn fixed(hw: u32) -> Self {
        Self(Self::FIXED_BASE + hw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` (for indexing per-register arrays).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Is this a fixed hardware register (outside the virtual space)?
    #[inline]
    pub const fn is_fixed(self) -> bool {
        self.0 >= Self::FIXED_BASE
    }
}

impl fmt::Display for VReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "r{}", self.0 - Self::FIXED_BASE)
        } else {
            write!(f, "v{}", self.0)
        }
    }
}

/// Lane width of an operation, in bits.
///
/// Determines how a component mask expands into a [`ByteMask`]: each
/// component covers `bytes()` consecutive bytes of the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaneSize {
    /// 8-bit lanes.
    B8,
    /// 16-bit lanes.
    B16,
    /// 32-bit lanes.
    B32,
}

impl LaneSize {
    /// Bytes per lane.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            LaneSize::B8 => 1,
            LaneSize::B16 => 2,
            LaneSize::B32 => 4,
        }
    }

    /// Textual suffix used by the IR printer (`.b8`, `.b16`, `.b32`).
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            LaneSize::B8 => ".b8",
            LaneSize::B16 => ".b16",
            LaneSize::B32 => ".b32",
        }
    }
}

/// Per-register byte mask: bit *i* set means byte *i* of the register
/// is read/written/live.
///
/// Invariant: bits at or above [`REG_BYTES`] are never set — all
/// constructors and combinators preserve this, so masks can be compared
/// and unioned without normalization.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ByteMask(u16);

impl ByteMask {
    /// No bytes.
    pub const EMPTY: ByteMask = ByteMask(0);

    /// All 16 bytes of the register.
    pub const FULL: ByteMask = ByteMask(0xFFFF);

    /// Create from a raw bit pattern.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw bit pattern.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Expand a component mask into a byte mask.
    ///
    /// Bit *c* of `comps` selects component *c*, which occupies bytes
    /// `[c * size.bytes(), (c + 1) * size.bytes())`. Components that
    /// would fall past byte 16 (e.g. component 4 of a 32-bit op) are
    /// dropped, keeping the no-high-bits invariant.
    pub const fn from_components(comps: u8, size: LaneSize) -> Self {
        let bytes = size.bytes();
        let lane: u16 = match size {
            LaneSize::B8 => 0x1,
            LaneSize::B16 => 0x3,
            LaneSize::B32 => 0xF,
        };
        let mut mask = 0u16;
        let mut c = 0;
        while c < 8 {
            if comps & (1 << c) != 0 && (c + 1) * bytes <= REG_BYTES {
                mask |= lane << (c * bytes);
            }
            c += 1;
        }
        ByteMask(mask)
    }

    /// Are no bytes set?
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Union of two masks.
    #[inline]
    pub const fn union(self, other: ByteMask) -> ByteMask {
        ByteMask(self.0 | other.0)
    }

    /// Bytes of `self` not in `other` (and-not; the kill operation).
    #[inline]
    pub const fn without(self, other: ByteMask) -> ByteMask {
        ByteMask(self.0 & !other.0)
    }

    /// Do the two masks share any byte?
    #[inline]
    pub const fn intersects(self, other: ByteMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl fmt::Debug for ByteMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteMask({:#06x})", self.0)
    }
}
