use pretty_assertions::assert_eq;

use crate::reg::{ByteMask, LaneSize, VReg};

use super::{Instruction, Op};

#[test]
fn write_mask_expands_components() {
    let ins = Instruction::new(Op::FAdd, LaneSize::B32)
        .with_dest(VReg::new(0), 0b0011)
        .with_src(VReg::new(1), 0b0011)
        .with_src(VReg::new(2), 0b0011);
    // .xy at 32 bits = bytes 0..8.
    assert_eq!(ins.dest_write_mask(), ByteMask::new(0x00FF));
    assert_eq!(ins.src_read_mask(0), ByteMask::new(0x00FF));
    assert_eq!(ins.src_read_mask(1), ByteMask::new(0x00FF));
}

#[test]
fn no_dest_writes_nothing() {
    let ins = Instruction::new(Op::Store, LaneSize::B32).with_src(VReg::new(4), 0b1111);
    assert_eq!(ins.dest_write_mask(), ByteMask::EMPTY);
}

#[test]
fn predicated_write_kills_nothing() {
    let ins = Instruction::new(Op::Csel, LaneSize::B32)
        .with_dest(VReg::new(0), 0b1111)
        .with_predicate()
        .with_src(VReg::new(1), 0b1111)
        .with_src(VReg::new(2), 0b1111);
    assert_eq!(ins.dest_write_mask(), ByteMask::EMPTY);
}

#[test]
fn narrow_read_of_wide_register() {
    // An 8-bit read of component 0 consumes one byte.
    let ins = Instruction::new(Op::Mov, LaneSize::B8)
        .with_dest(VReg::new(0), 0b0001)
        .with_src(VReg::new(1), 0b0001);
    assert_eq!(ins.src_read_mask(0), ByteMask::new(0x0001));
}

#[test]
fn reads_is_whole_register() {
    let ins = Instruction::new(Op::FMul, LaneSize::B32)
        .with_dest(VReg::new(0), 0b1111)
        .with_src(VReg::new(1), 0b0001)
        .with_src(VReg::new(2), 0b1111);
    assert!(ins.reads(VReg::new(1)));
    assert!(ins.reads(VReg::new(2)));
    assert!(!ins.reads(VReg::new(0)));
    assert!(!ins.reads(VReg::new(3)));
}

#[test]
fn sources_iterates_in_operand_order() {
    let ins = Instruction::new(Op::FFma, LaneSize::B16)
        .with_dest(VReg::new(0), 0b1111)
        .with_src(VReg::new(1), 0b1111)
        .with_src(VReg::new(2), 0b1111)
        .with_src(VReg::new(3), 0b1111);
    let regs: Vec<u32> = ins.sources().map(|(_, s)| s.reg.raw()).collect();
    assert_eq!(regs, vec![1, 2, 3]);
}
