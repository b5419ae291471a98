//! Backward dataflow liveness analysis for the Boreal shader IR.
//!
//! Computes, per basic block, which **bytes** of which virtual
//! registers are live (will be read in the future) at the block's
//! entry and exit. The results drive register allocation and spilling:
//! two values can share a register exactly when their live byte ranges
//! never overlap. Byte granularity is what makes packing narrow (8/16
//! bit) values into wide registers sound.
//!
//! # Algorithm
//!
//! Standard backward-may dataflow, solved with a worklist:
//!
//! 1. **Per instruction** ([`step_instruction`]): kill the bytes the
//!    destination definitely overwrites, *then* OR in the bytes each
//!    source reads. The ordering matters for instructions that read
//!    and write the same register — sources are live going into the
//!    instruction even when the destination kills them one step later
//!    in forward time.
//! 2. **Per block** (`update_block`): `live_out(B) = ∪ live_in(S)`
//!    over successors, then a reverse walk of the body produces a new
//!    `live_in(B)`, which replaces the old one wholesale.
//! 3. **Globally** ([`compute_liveness`]): seed the worklist with the
//!    exit block; whenever a block's `live_in` changes (or the block
//!    is visited for the first time), enqueue its predecessors. The
//!    worklist behaves as a set — duplicate enqueues are no-ops. The
//!    per-byte lattice is finite and every update is monotone, so the
//!    iteration terminates at the unique fixed point.
//!
//! Blocks with no path to the exit are never enqueued and keep
//! all-zero sets, which is sound: nothing computed there can be
//! observed.
//!
//! # Caching
//!
//! Results live on the IR itself (`Block::live_in` / `Block::live_out`)
//! behind the `MetaFlags::LIVENESS` freshness bit, so any number of
//! queries between mutations cost one solve. [`compute_liveness`] is a
//! no-op while the bit is set; structural mutation through the
//! `Function` builder methods clears it. There is no incremental
//! update — invalidation discards everything.
//!
//! # References
//!
//! - Appel: "Modern Compiler Implementation" §10.1 (liveness dataflow)
//! - Muchnick: "Advanced Compiler Design and Implementation" §14.1
//!   (iterative dataflow with worklists)

mod query;
mod solve;
mod update;
mod worklist;

pub use query::is_live_after;
pub use solve::compute_liveness;
pub use update::{is_live, liveness_gen, liveness_kill, step_instruction};

#[cfg(test)]
mod test_helpers;
