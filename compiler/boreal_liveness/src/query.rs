//! Point queries against the cached per-block liveness.

use boreal_ir::{BlockId, Function, VReg};

use crate::solve::compute_liveness;
use crate::update::is_live;

/// Is `reg` live immediately after the instruction at index `after`
/// in `block`?
///
/// Recomputes liveness first if the cache is stale. Live at the
/// block's exit implies live after every instruction in it, so a
/// `live_out` hit answers immediately; otherwise the remainder of the
/// block (from `after + 1`) is scanned for any instruction that reads
/// `reg`. The in-block scan is a whole-register test — any component
/// of any source counts — so it also observes fixed registers, which
/// the per-byte sets do not track.
pub fn is_live_after(func: &mut Function, block: BlockId, after: usize, reg: VReg) -> bool {
    compute_liveness(func);

    let blk = &func.blocks[block.index()];
    if is_live(&blk.live_out, reg) {
        return true;
    }

    blk.instructions
        .iter()
        .skip(after + 1)
        .any(|ins| ins.reads(reg))
}
