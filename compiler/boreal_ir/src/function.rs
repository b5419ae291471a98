//! The per-function container: blocks, register space, cached metadata.

use bitflags::bitflags;

use crate::block::{Block, BlockId};
use crate::instr::Instruction;

bitflags! {
    /// Validity bits for analysis results cached on the IR.
    ///
    /// A set bit means the corresponding cached data is in sync with
    /// the instruction stream and CFG. Structural mutation clears it.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub struct MetaFlags: u32 {
        /// `Block::live_in` / `Block::live_out` are fresh.
        const LIVENESS = 1 << 0;
    }
}

/// A function body: the unit the midend analyzes and allocates.
///
/// Blocks form a general directed graph (loops produce back edges).
/// The **last** block in `blocks` is the designated exit; the builder
/// keeps it successor-free and [`verify`](crate::verify) enforces it.
///
/// `temp_count` is the size of the virtual register space, derived
/// from the instruction stream by [`Function::recompute_temp_count`].
/// Fixed hardware registers (see [`VReg::fixed`](crate::VReg::fixed))
/// sit above the space and never count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    /// Function name, for logs and the IR printer.
    pub name: String,
    /// Blocks, indexed by `BlockId`.
    pub blocks: Vec<Block>,
    /// Number of virtual registers: max referenced index + 1.
    pub temp_count: usize,
    /// Cached-analysis validity bits.
    pub meta: MetaFlags,
}

impl Function {
    /// Create an empty function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
            temp_count: 0,
            meta: MetaFlags::empty(),
        }
    }

    /// Append a new empty block and return its id.
    pub fn add_block(&mut self) -> BlockId {
        self.invalidate_liveness();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "block counts fit in u32"
        )]
        let id = BlockId::new(self.blocks.len() as u32);
        self.blocks.push(Block::new(id));
        id
    }

    /// Add a control-flow edge `from -> to`, maintaining both edge
    /// directions. Duplicate edges are ignored.
    pub fn add_edge(&mut self, from: BlockId, to: BlockId) {
        self.invalidate_liveness();
        let succs = &mut self.blocks[from.index()].successors;
        if !succs.contains(&to) {
            succs.push(to);
        }
        let preds = &mut self.blocks[to.index()].predecessors;
        if !preds.contains(&from) {
            preds.push(from);
        }
    }

    /// Append an instruction to a block.
    pub fn push_instruction(&mut self, block: BlockId, ins: Instruction) {
        self.invalidate_liveness();
        self.blocks[block.index()].instructions.push(ins);
    }

    /// The designated exit block: the last block, by convention.
    ///
    /// `None` only for an empty function.
    pub fn exit_block(&self) -> Option<BlockId> {
        self.blocks.last().map(|b| b.id)
    }

    /// Recompute `temp_count` as the highest virtual register index
    /// referenced by any instruction, plus one. Fixed registers are
    /// outside the virtual space and do not contribute.
    pub fn recompute_temp_count(&mut self) {
        let mut max: Option<u32> = None;
        for block in &self.blocks {
            for ins in &block.instructions {
                if let Some(dest) = ins.dest {
                    if !dest.is_fixed() {
                        max = Some(max.map_or(dest.raw(), |m| m.max(dest.raw())));
                    }
                }
                for (_, src) in ins.sources() {
                    if !src.reg.is_fixed() {
                        max = Some(max.map_or(src.reg.raw(), |m| m.max(src.reg.raw())));
                    }
                }
            }
        }
        self.temp_count = max.map_or(0, |m| m as usize + 1);
    }

    /// Drop the cached liveness arrays and clear the freshness bit.
    ///
    /// No-op when liveness was never computed (or already dropped).
    /// Any structural mutation done through public fields rather than
    /// the builder methods must be followed by a call to this.
    pub fn invalidate_liveness(&mut self) {
        if !self.meta.contains(MetaFlags::LIVENESS) {
            return;
        }
        for block in &mut self.blocks {
            block.live_in = Vec::new();
            block.live_out = Vec::new();
        }
        self.meta.remove(MetaFlags::LIVENESS);
    }
}
