//! Per-instruction and per-block backward transfer functions.
//!
//! The running live set is a flat `[ByteMask]` slice indexed by
//! virtual register, sized `temp_count`. Register indices at or past
//! the slice length — fixed hardware registers, sentinels — are
//! silently ignored by gen and kill: they sit outside the virtual
//! space this analysis tracks.

use boreal_ir::{BlockId, ByteMask, Function, Instruction, VReg};

/// OR `mask` into `reg`'s live bytes. No-op for out-of-range registers.
pub fn liveness_gen(live: &mut [ByteMask], reg: VReg, mask: ByteMask) {
    let Some(slot) = live.get_mut(reg.index()) else {
        return;
    };
    *slot = slot.union(mask);
}

/// Clear `mask` from `reg`'s live bytes. No-op for out-of-range registers.
pub fn liveness_kill(live: &mut [ByteMask], reg: VReg, mask: ByteMask) {
    let Some(slot) = live.get_mut(reg.index()) else {
        return;
    };
    *slot = slot.without(mask);
}

/// Is any byte of `reg` live? False for out-of-range registers.
pub fn is_live(live: &[ByteMask], reg: VReg) -> bool {
    live.get(reg.index()).is_some_and(|m| !m.is_empty())
}

/// Apply one instruction's backward transfer to a running live set:
/// `live_before = gen ∪ (live_after \ kill)`.
///
/// The destination's definitely-written bytes are killed **before**
/// source reads are OR-ed in. Do not reorder: for an instruction that
/// reads and writes the same bytes of the same register, the read must
/// survive — sources are live going into the instruction.
///
/// Public so passes that walk a block instruction-by-instruction
/// (dead-code elimination, spill placement) can maintain a running set
/// seeded from `live_out`.
pub fn step_instruction(live: &mut [ByteMask], ins: &Instruction) {
    if let Some(dest) = ins.dest {
        liveness_kill(live, dest, ins.dest_write_mask());
    }
    for (i, src) in ins.sources() {
        liveness_gen(live, src.reg, ins.src_read_mask(i));
    }
}

/// Recompute one block's `live_out` from its successors' `live_in`,
/// then its `live_in` from a reverse walk of the body.
///
/// Returns whether `live_in` changed. The freshly computed array
/// replaces the previous one unconditionally — full replacement per
/// visit, never a merge.
pub(crate) fn update_block(func: &mut Function, block: BlockId) -> bool {
    let b = block.index();
    let temp_count = func.temp_count;

    // live_out(B) = ∪ live_in(S). A successor-less block keeps zero.
    let mut live_out = vec![ByteMask::EMPTY; temp_count];
    for &succ in &func.blocks[b].successors {
        for (slot, &mask) in live_out
            .iter_mut()
            .zip(&func.blocks[succ.index()].live_in)
        {
            *slot = slot.union(mask);
        }
    }

    let mut live = live_out.clone();
    for ins in func.blocks[b].instructions.iter().rev() {
        step_instruction(&mut live, ins);
    }

    let blk = &mut func.blocks[b];
    let progressed = blk.live_in != live;
    blk.live_in = live;
    blk.live_out = live_out;
    progressed
}
