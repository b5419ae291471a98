//! Text format for the IR.
//!
//! Output format:
//! ```text
//! func @lerp {
//!   bb0:
//!     v2.xyzw = fmul.b32 v0.xyzw, v1.x
//!     -> bb1
//!   bb1: ; preds: bb0
//!     r0.xyzw = mov.b32 v2.xyzw
//! }
//! ```
//!
//! Component masks print as swizzle suffixes; lane size as a `.bN`
//! suffix on the mnemonic; predicated instructions get `.pred`.

use std::fmt;

use crate::block::Block;
use crate::function::Function;
use crate::instr::Instruction;

/// Swizzle names for components 0..8.
const COMP_NAMES: [char; 8] = ['x', 'y', 'z', 'w', 'a', 'b', 'c', 'd'];

fn write_swizzle(f: &mut fmt::Formatter<'_>, comps: u8) -> fmt::Result {
    write!(f, ".")?;
    for (c, name) in COMP_NAMES.iter().enumerate() {
        if comps & (1 << c) != 0 {
            write!(f, "{name}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dest) = self.dest {
            write!(f, "{dest}")?;
            write_swizzle(f, self.dest_comps)?;
            write!(f, " = ")?;
        }
        write!(f, "{}{}", self.op.mnemonic(), self.size.suffix())?;
        if self.predicated {
            write!(f, ".pred")?;
        }
        for (i, src) in self.sources() {
            write!(f, "{}", if i == 0 { " " } else { ", " })?;
            write!(f, "{}", src.reg)?;
            write_swizzle(f, src.comps)?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}:", self.id)?;
        if !self.predecessors.is_empty() {
            write!(f, " ; preds:")?;
            for pred in &self.predecessors {
                write!(f, " {pred}")?;
            }
        }
        writeln!(f)?;
        for ins in &self.instructions {
            writeln!(f, "    {ins}")?;
        }
        if !self.successors.is_empty() {
            write!(f, "    ->")?;
            for succ in &self.successors {
                write!(f, " {succ}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "func @{} {{", self.name)?;
        for block in &self.blocks {
            write!(f, "{block}")?;
        }
        write!(f, "}}")
    }
}
