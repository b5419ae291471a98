//! Global fixed-point solver and cache protocol.

use boreal_ir::{ByteMask, Function, MetaFlags};
use rustc_hash::FxHashSet;

use crate::update::update_block;
use crate::worklist::WorkList;

/// Compute per-block byte liveness for `func`, caching the result on
/// the blocks themselves.
///
/// No-op while `MetaFlags::LIVENESS` is set. Otherwise recomputes
/// `temp_count`, replaces every block's arrays with zero-filled ones,
/// and iterates a worklist seeded with the exit block: a popped block
/// is updated, and its predecessors are enqueued when the update made
/// progress or the block had never been visited. The per-byte lattice
/// is finite and updates are monotone, so the loop terminates at the
/// fixed point, which is then marked fresh.
///
/// Blocks that cannot reach the exit are never visited and keep
/// all-zero sets.
pub fn compute_liveness(func: &mut Function) {
    if func.meta.contains(MetaFlags::LIVENESS) {
        return;
    }

    func.recompute_temp_count();
    let temp_count = func.temp_count;
    tracing::debug!(
        function = %func.name,
        num_blocks = func.blocks.len(),
        temp_count,
        "computing liveness"
    );

    for block in &mut func.blocks {
        block.live_in = vec![ByteMask::EMPTY; temp_count];
        block.live_out = vec![ByteMask::EMPTY; temp_count];
    }

    let mut work = WorkList::new();
    let mut visited: FxHashSet<_> = FxHashSet::default();
    if let Some(exit) = func.exit_block() {
        work.push(exit);
    }

    let mut visits = 0u32;
    while let Some(block) = work.pop() {
        visits += 1;

        let progressed = update_block(func, block);

        if progressed || !visited.contains(&block) {
            for &pred in &func.blocks[block.index()].predecessors {
                work.push(pred);
            }
        }
        visited.insert(block);
    }

    tracing::debug!(visits, "liveness converged");
    func.meta.insert(MetaFlags::LIVENESS);
}
