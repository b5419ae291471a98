//! Instructions: opcodes, source operands, and byte-mask derivation.
//!
//! An [`Instruction`] has at most one destination register and up to
//! three sources. Per-operand component masks record which lanes the
//! operation actually touches; [`Instruction::dest_write_mask`] and
//! [`Instruction::src_read_mask`] expand those to byte masks, which is
//! the form every dataflow pass consumes.

use smallvec::SmallVec;

use crate::reg::{ByteMask, LaneSize, VReg};

/// Opcode of a midend instruction.
///
/// A deliberately small set: enough to express the ALU, select, and
/// memory shapes the analysis passes care about. Lowering from the
/// frontend and encoding to the ISA both live elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Mov,
    FAdd,
    FMul,
    FFma,
    FMin,
    FMax,
    IAdd,
    IMul,
    And,
    Or,
    Xor,
    Shl,
    Ushr,
    /// Component-wise select; commonly predicated.
    Csel,
    Load,
    Store,
}

impl Op {
    /// Mnemonic used by the IR printer.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Op::Mov => "mov",
            Op::FAdd => "fadd",
            Op::FMul => "fmul",
            Op::FFma => "ffma",
            Op::FMin => "fmin",
            Op::FMax => "fmax",
            Op::IAdd => "iadd",
            Op::IMul => "imul",
            Op::And => "and",
            Op::Or => "or",
            Op::Xor => "xor",
            Op::Shl => "shl",
            Op::Ushr => "ushr",
            Op::Csel => "csel",
            Op::Load => "load",
            Op::Store => "store",
        }
    }
}

/// A source operand: a register plus the components read from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SrcOperand {
    /// Register the operand reads.
    pub reg: VReg,
    /// Component mask of the lanes actually consumed (bit *c* =
    /// component *c*). May be narrower than the full register.
    pub comps: u8,
}

/// A single midend instruction.
///
/// Instructions are immutable as far as analysis passes are concerned:
/// liveness and friends only read operand metadata. Construction goes
/// through [`Instruction::new`] and the `with_*` builder methods.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation.
    pub op: Op,
    /// Lane width; scales component masks to byte masks.
    pub size: LaneSize,
    /// Destination register, if the operation produces a value.
    pub dest: Option<VReg>,
    /// Component write mask for the destination.
    pub dest_comps: u8,
    /// Predicated execution: the write may not happen, so no byte of
    /// the destination is *definitely* overwritten.
    pub predicated: bool,
    /// Source operands, in operand order.
    pub srcs: SmallVec<[SrcOperand; 3]>,
}

impl Instruction {
    /// Create an instruction with no destination and no sources.
    pub fn new(op: Op, size: LaneSize) -> Self {
        Self {
            op,
            size,
            dest: None,
            dest_comps: 0,
            predicated: false,
            srcs: SmallVec::new(),
        }
    }

    /// Set the destination register and its component write mask.
    #[must_use]
    pub fn with_dest(mut self, reg: VReg, comps: u8) -> Self {
        self.dest = Some(reg);
        self.dest_comps = comps;
        self
    }

    /// Append a source operand.
    #[must_use]
    pub fn with_src(mut self, reg: VReg, comps: u8) -> Self {
        self.srcs.push(SrcOperand { reg, comps });
        self
    }

    /// Mark the instruction as predicated.
    #[must_use]
    pub fn with_predicate(mut self) -> Self {
        self.predicated = true;
        self
    }

    /// Bytes of the destination register definitely overwritten.
    ///
    /// Empty when there is no destination, and empty for predicated
    /// instructions: a write that may not execute kills nothing, the
    /// bytes it *would* touch stay live across it.
    pub fn dest_write_mask(&self) -> ByteMask {
        if self.dest.is_none() || self.predicated {
            return ByteMask::EMPTY;
        }
        ByteMask::from_components(self.dest_comps, self.size)
    }

    /// Bytes of source `which` actually consumed.
    ///
    /// Calling with `which >= self.srcs.len()` is a caller bug and
    /// panics via the slice index.
    pub fn src_read_mask(&self, which: usize) -> ByteMask {
        let src = self.srcs[which];
        ByteMask::from_components(src.comps, self.size)
    }

    /// Does any source operand reference `reg`?
    ///
    /// Whole-register test: any component of any source counts.
    pub fn reads(&self, reg: VReg) -> bool {
        self.srcs.iter().any(|src| src.reg == reg)
    }

    /// Iterate source operands with their indices.
    pub fn sources(&self) -> impl Iterator<Item = (usize, SrcOperand)> + '_ {
        self.srcs.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests;
