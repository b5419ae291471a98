//! Boreal shader IR — the mid-level representation the compiler's
//! analysis and allocation passes operate on.
//!
//! This crate contains the core data structures for the Boreal midend:
//!
//! - **[`VReg`]** — virtual register ids, with a reserved range for
//!   fixed hardware registers above [`VReg::FIXED_BASE`]
//! - **[`ByteMask`]** — per-register byte masks (bit *i* = byte *i*),
//!   the granularity all dataflow in the midend is tracked at
//! - **[`Instruction`]** — a single vector ALU/memory operation with an
//!   optional destination and component-masked sources
//! - **[`Block`]** / **[`Function`]** — basic blocks with explicit
//!   successor/predecessor edges, owned by a per-function container
//!
//! # Design
//!
//! Byte granularity (rather than whole-register granularity) is what
//! lets the register allocator pack narrow values: an 8-bit lane read
//! of a 32-bit register must not keep the other 15 bytes of the
//! register group alive. Masks are packed `u16` integers so per-block
//! liveness arrays stay flat and cache-friendly.
//!
//! Analysis results are cached on the IR itself: each [`Block`] owns
//! its `live_in`/`live_out` arrays and [`Function::meta`] carries the
//! freshness bit. Structural mutation through the builder methods
//! invalidates the cache; mutation through public fields must be
//! followed by [`Function::invalidate_liveness`] by hand.

mod block;
mod display;
mod function;
mod instr;
mod reg;
mod verify;

pub use block::{Block, BlockId};
pub use function::{Function, MetaFlags};
pub use instr::{Instruction, Op, SrcOperand};
pub use reg::{ByteMask, LaneSize, VReg, REG_BYTES};
pub use verify::{verify, VerifyError};
