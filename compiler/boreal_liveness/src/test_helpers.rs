//! Shared test utilities for the liveness tests.
//!
//! Factory shorthands for registers, blocks, and the handful of
//! instruction shapes the tests need. Only compiled in test builds.

use boreal_ir::{BlockId, Function, Instruction, LaneSize, Op, VReg};

/// Shorthand for `VReg::new(n)`.
pub(crate) fn v(n: u32) -> VReg {
    VReg::new(n)
}

/// Shorthand for `BlockId::new(n)`.
pub(crate) fn b(n: u32) -> BlockId {
    BlockId::new(n)
}

/// Full-width 32-bit move: `dest.xyzw = mov.b32 src.xyzw`.
pub(crate) fn mov(dest: VReg, src: VReg) -> Instruction {
    Instruction::new(Op::Mov, LaneSize::B32)
        .with_dest(dest, 0b1111)
        .with_src(src, 0b1111)
}

/// Full-width definition with no sources: `dest.xyzw = load.b32`.
pub(crate) fn def(dest: VReg) -> Instruction {
    Instruction::new(Op::Load, LaneSize::B32).with_dest(dest, 0b1111)
}

/// Full-width use with no destination: `store.b32 src.xyzw`.
pub(crate) fn use_full(src: VReg) -> Instruction {
    Instruction::new(Op::Store, LaneSize::B32).with_src(src, 0b1111)
}

/// Low-byte use with no destination: `store.b8 src.x`.
pub(crate) fn use_low_byte(src: VReg) -> Instruction {
    Instruction::new(Op::Store, LaneSize::B8).with_src(src, 0b0001)
}

/// Build a function with `num_blocks` empty blocks and the given
/// edges. The last block is the exit by convention.
pub(crate) fn make_func(num_blocks: u32, edges: &[(u32, u32)]) -> Function {
    let mut func = Function::new("test");
    for _ in 0..num_blocks {
        func.add_block();
    }
    for &(from, to) in edges {
        func.add_edge(b(from), b(to));
    }
    func
}
