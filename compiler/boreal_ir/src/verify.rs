//! Structural integrity checks for a [`Function`].
//!
//! Catches malformed CFGs before an analysis pass trips over them:
//! asymmetric edges, dangling block ids, a reachable exit that still
//! has successors, and operands whose component masks address no
//! bytes. Intended to run behind debug assertions in the pass manager
//! and unconditionally in tests.

use thiserror::Error;

use crate::block::BlockId;
use crate::function::Function;
use crate::reg::ByteMask;

/// A structural defect found by [`verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("function has no blocks")]
    NoBlocks,

    #[error("block at position {position} has id {id}")]
    MisnumberedBlock { id: BlockId, position: usize },

    #[error("block {block} references out-of-range block {target}")]
    DanglingEdge { block: BlockId, target: BlockId },

    #[error("edge {from} -> {to} has no reciprocal predecessor entry")]
    MissingPredecessor { from: BlockId, to: BlockId },

    #[error("predecessor entry {from} -> {to} has no matching successor edge")]
    MissingSuccessor { from: BlockId, to: BlockId },

    #[error("exit block {exit} has successors")]
    ExitHasSuccessors { exit: BlockId },

    #[error("instruction {index} in {block} writes no bytes")]
    EmptyWrite { block: BlockId, index: usize },

    #[error("instruction {index} in {block}, source {source_index} reads no bytes")]
    EmptyRead {
        block: BlockId,
        index: usize,
        source_index: usize,
    },
}

/// Check a function's structural invariants, returning the first
/// defect found.
pub fn verify(func: &Function) -> Result<(), VerifyError> {
    if func.blocks.is_empty() {
        return Err(VerifyError::NoBlocks);
    }
    let num_blocks = func.blocks.len();

    for (position, block) in func.blocks.iter().enumerate() {
        if block.id.index() != position {
            return Err(VerifyError::MisnumberedBlock {
                id: block.id,
                position,
            });
        }

        for &succ in &block.successors {
            if succ.index() >= num_blocks {
                return Err(VerifyError::DanglingEdge {
                    block: block.id,
                    target: succ,
                });
            }
            if !func.blocks[succ.index()].predecessors.contains(&block.id) {
                return Err(VerifyError::MissingPredecessor {
                    from: block.id,
                    to: succ,
                });
            }
        }

        for &pred in &block.predecessors {
            if pred.index() >= num_blocks {
                return Err(VerifyError::DanglingEdge {
                    block: block.id,
                    target: pred,
                });
            }
            if !func.blocks[pred.index()].successors.contains(&block.id) {
                return Err(VerifyError::MissingSuccessor {
                    from: pred,
                    to: block.id,
                });
            }
        }

        for (index, ins) in block.instructions.iter().enumerate() {
            if ins.dest.is_some()
                && ByteMask::from_components(ins.dest_comps, ins.size).is_empty()
            {
                return Err(VerifyError::EmptyWrite {
                    block: block.id,
                    index,
                });
            }
            for (source, src) in ins.sources() {
                if ByteMask::from_components(src.comps, ins.size).is_empty() {
                    return Err(VerifyError::EmptyRead {
                        block: block.id,
                        index,
                        source_index: source,
                    });
                }
            }
        }
    }

    // The last block is the designated exit and must not branch.
    let exit = &func.blocks[num_blocks - 1];
    if !exit.successors.is_empty() {
        return Err(VerifyError::ExitHasSuccessors { exit: exit.id });
    }

    Ok(())
}

#[cfg(test)]
mod tests;
