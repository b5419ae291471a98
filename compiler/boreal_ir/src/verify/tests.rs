use pretty_assertions::assert_eq;

use crate::block::BlockId;
use crate::function::Function;
use crate::instr::{Instruction, Op};
use crate::reg::{LaneSize, VReg};

use super::{verify, VerifyError};

fn mov(dest: u32, src: u32) -> Instruction {
    Instruction::new(Op::Mov, LaneSize::B32)
        .with_dest(VReg::new(dest), 0b1111)
        .with_src(VReg::new(src), 0b1111)
}

#[test]
fn empty_function_is_rejected() {
    let func = Function::new("empty");
    assert_eq!(verify(&func), Err(VerifyError::NoBlocks));
}

#[test]
fn well_formed_diamond_passes() {
    let mut func = Function::new("diamond");
    let b0 = func.add_block();
    let b1 = func.add_block();
    let b2 = func.add_block();
    let b3 = func.add_block();
    func.add_edge(b0, b1);
    func.add_edge(b0, b2);
    func.add_edge(b1, b3);
    func.add_edge(b2, b3);
    func.push_instruction(b0, mov(0, 1));
    assert_eq!(verify(&func), Ok(()));
}

#[test]
fn asymmetric_edge_is_rejected() {
    let mut func = Function::new("asym");
    let b0 = func.add_block();
    let b1 = func.add_block();
    // Bypass add_edge: successor without the reciprocal predecessor.
    func.blocks[b0.index()].successors.push(b1);
    assert_eq!(
        verify(&func),
        Err(VerifyError::MissingPredecessor { from: b0, to: b1 })
    );
}

#[test]
fn dangling_successor_is_rejected() {
    let mut func = Function::new("dangling");
    let b0 = func.add_block();
    let bogus = BlockId::new(9);
    func.blocks[b0.index()].successors.push(bogus);
    assert_eq!(
        verify(&func),
        Err(VerifyError::DanglingEdge {
            block: b0,
            target: bogus
        })
    );
}

#[test]
fn branching_exit_is_rejected() {
    let mut func = Function::new("exit");
    let b0 = func.add_block();
    let b1 = func.add_block();
    func.add_edge(b0, b1);
    func.add_edge(b1, b0);
    assert_eq!(
        verify(&func),
        Err(VerifyError::ExitHasSuccessors { exit: b1 })
    );
}

#[test]
fn empty_write_mask_is_rejected() {
    let mut func = Function::new("nowrite");
    let b0 = func.add_block();
    func.push_instruction(
        b0,
        Instruction::new(Op::Mov, LaneSize::B32)
            .with_dest(VReg::new(0), 0)
            .with_src(VReg::new(1), 0b1111),
    );
    assert_eq!(
        verify(&func),
        Err(VerifyError::EmptyWrite { block: b0, index: 0 })
    );
}

#[test]
fn empty_read_mask_is_rejected() {
    let mut func = Function::new("noread");
    let b0 = func.add_block();
    // Component 4 of a 32-bit op is past the register: reads nothing.
    func.push_instruction(
        b0,
        Instruction::new(Op::Mov, LaneSize::B32)
            .with_dest(VReg::new(0), 0b1111)
            .with_src(VReg::new(1), 0b0001_0000),
    );
    assert_eq!(
        verify(&func),
        Err(VerifyError::EmptyRead {
            block: b0,
            index: 0,
            source_index: 0
        })
    );
}
