//! Type 2 CharString interpretation
//!
//! CharStrings encode glyph outlines and hints as a stack based program,
//! described in Adobe Technical Note #5177. The interpreter executes one
//! CharString, resolving subroutine calls against the font's local and
//! global subroutine INDEXes, and produces a [Glyph] holding the resolved
//! drawing and hint operations in absolute coordinates.

use std::fmt;

use tinyvec::TinyVec;

use crate::binary::read::{ReadCtxt, ReadEof, ReadScope};
use crate::error::ParseError;
use crate::index::IndexTable;

mod argstack;

pub use argstack::ArgumentsStack;

/// Maximum number of operands on the argument stack.
pub const MAX_ARGUMENTS_STACK_LEN: usize = 48;

/// Maximum depth of subroutine calls.
pub const STACK_LIMIT: u8 = 10;

/// Number of slots in the transient array used by `put` and `get`.
pub const TRANSIENT_ARRAY_LEN: usize = 32;

mod operator {
    pub const HORIZONTAL_STEM: u8 = 1;
    pub const VERTICAL_STEM: u8 = 3;
    pub const VERTICAL_MOVE_TO: u8 = 4;
    pub const LINE_TO: u8 = 5;
    pub const HORIZONTAL_LINE_TO: u8 = 6;
    pub const VERTICAL_LINE_TO: u8 = 7;
    pub const CURVE_TO: u8 = 8;
    pub const CALL_LOCAL_SUBROUTINE: u8 = 10;
    pub const RETURN: u8 = 11;
    pub const ESCAPE: u8 = 12;
    pub const ENDCHAR: u8 = 14;
    pub const HORIZONTAL_STEM_HINT_MASK: u8 = 18;
    pub const HINT_MASK: u8 = 19;
    pub const COUNTER_MASK: u8 = 20;
    pub const MOVE_TO: u8 = 21;
    pub const HORIZONTAL_MOVE_TO: u8 = 22;
    pub const VERTICAL_STEM_HINT_MASK: u8 = 23;
    pub const CURVE_LINE: u8 = 24;
    pub const LINE_CURVE: u8 = 25;
    pub const VV_CURVE_TO: u8 = 26;
    pub const HH_CURVE_TO: u8 = 27;
    pub const SHORT_INT: u8 = 28;
    pub const CALL_GLOBAL_SUBROUTINE: u8 = 29;
    pub const VH_CURVE_TO: u8 = 30;
    pub const HV_CURVE_TO: u8 = 31;
    pub const FIXED_16_16: u8 = 255;

    pub mod escape {
        pub const DOTSECTION: u8 = 0;
        pub const AND: u8 = 3;
        pub const OR: u8 = 4;
        pub const NOT: u8 = 5;
        pub const ABS: u8 = 9;
        pub const ADD: u8 = 10;
        pub const SUB: u8 = 11;
        pub const DIV: u8 = 12;
        pub const NEG: u8 = 14;
        pub const EQ: u8 = 15;
        pub const DROP: u8 = 18;
        pub const PUT: u8 = 20;
        pub const GET: u8 = 21;
        pub const IFELSE: u8 = 22;
        pub const RANDOM: u8 = 23;
        pub const MUL: u8 = 24;
        pub const SQRT: u8 = 26;
        pub const DUP: u8 = 27;
        pub const EXCH: u8 = 28;
        pub const INDEX: u8 = 29;
        pub const ROLL: u8 = 30;
        pub const HFLEX: u8 = 34;
        pub const FLEX: u8 = 35;
        pub const HFLEX1: u8 = 36;
        pub const FLEX1: u8 = 37;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharStringError {
    Parse(ParseError),
    InvalidOperator,
    InvalidArgumentCount,
    StackLimitReached,
    NestingLimitReached,
    BadSubrIndex,
    InvalidTransientIndex,
    InvalidSeacCode,
    MissingEndChar,
    DataAfterEndChar,
    MissingMoveTo,
}

impl From<ParseError> for CharStringError {
    fn from(error: ParseError) -> CharStringError {
        CharStringError::Parse(error)
    }
}

impl From<ReadEof> for CharStringError {
    fn from(error: ReadEof) -> CharStringError {
        CharStringError::Parse(ParseError::from(error))
    }
}

impl fmt::Display for CharStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharStringError::Parse(error) => write!(f, "parse error: {}", error),
            CharStringError::InvalidOperator => write!(f, "an invalid operator occurred"),
            CharStringError::InvalidArgumentCount => {
                write!(f, "an operator received an invalid number of arguments")
            }
            CharStringError::StackLimitReached => write!(f, "the argument stack limit was reached"),
            CharStringError::NestingLimitReached => write!(f, "subroutines too deeply nested"),
            CharStringError::BadSubrIndex => write!(f, "an invalid subroutine index occurred"),
            CharStringError::InvalidTransientIndex => {
                write!(f, "a transient array index was out of range")
            }
            CharStringError::InvalidSeacCode => write!(f, "an invalid seac character code occurred"),
            CharStringError::MissingEndChar => write!(f, "the endchar operator is missing"),
            CharStringError::DataAfterEndChar => write!(f, "data after the endchar operator"),
            CharStringError::MissingMoveTo => write!(f, "a path was started without a moveto"),
        }
    }
}

impl std::error::Error for CharStringError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CharStringError::Parse(error) => Some(error),
            _ => None,
        }
    }
}

/// A resolved drawing or hint operation.
///
/// Coordinates are absolute. The relative deltas of the CharString program
/// have been accumulated against the current point, and the compact
/// alternating forms like `hvcurveto` are expanded into plain curves.
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphOp {
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    CurveTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    /// A stem hint with an absolute `edge` position and a `width`.
    HintStem {
        edge: f32,
        width: f32,
        vertical: bool,
    },
    HintMask(TinyVec<[u8; 8]>),
    CounterMask(TinyVec<[u8; 8]>),
    EndChar,
}

impl fmt::Display for GlyphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphOp::MoveTo { x, y } => write!(f, "{} {} moveto", x, y),
            GlyphOp::LineTo { x, y } => write!(f, "{} {} lineto", x, y),
            GlyphOp::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => write!(f, "{} {} {} {} {} {} curveto", x1, y1, x2, y2, x, y),
            GlyphOp::HintStem {
                edge,
                width,
                vertical,
            } => {
                let op = if *vertical { "vstem" } else { "hstem" };
                write!(f, "{} {} {}", edge, width, op)
            }
            GlyphOp::HintMask(mask) => {
                write!(f, "hintmask")?;
                for byte in mask {
                    write!(f, " {:08b}", byte)?;
                }
                Ok(())
            }
            GlyphOp::CounterMask(mask) => {
                write!(f, "cntrmask")?;
                for byte in mask {
                    write!(f, " {:08b}", byte)?;
                }
                Ok(())
            }
            GlyphOp::EndChar => write!(f, "endchar"),
        }
    }
}

/// The accent composition recorded by a four or five argument `endchar`.
///
/// `base` and `accent` are Standard Encoding character codes. The composed
/// glyph is the base glyph overlaid with the accent glyph shifted by
/// (`adx`, `ady`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Seac {
    pub adx: f32,
    pub ady: f32,
    pub base: u8,
    pub accent: u8,
}

/// The result of interpreting one CharString.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    /// Advance width, resolved against the Private DICT width defaults.
    pub width: f32,
    pub operations: Vec<GlyphOp>,
    pub seac: Option<Seac>,
}

/// Executes CharStrings against a pair of subroutine INDEXes.
pub struct Interpreter<'a> {
    pub local_subrs: &'a IndexTable,
    pub global_subrs: &'a IndexTable,
    pub default_width_x: f32,
    pub nominal_width_x: f32,
}

impl<'a> Interpreter<'a> {
    pub fn new(local_subrs: &'a IndexTable, global_subrs: &'a IndexTable) -> Interpreter<'a> {
        Interpreter {
            local_subrs,
            global_subrs,
            default_width_x: 0.0,
            nominal_width_x: 0.0,
        }
    }

    /// Interpret `char_string`, resolving subroutine calls, and return the
    /// operations it produces.
    pub fn interpret(&self, char_string: &[u8]) -> Result<Glyph, CharStringError> {
        let mut vm = Vm::new(self.local_subrs, self.global_subrs);
        let mut stack = ArgumentsStack::new();
        vm.execute(char_string, &mut stack, 0)?;

        if !vm.has_endchar {
            return Err(CharStringError::MissingEndChar);
        }

        let width = match vm.width {
            Some(delta) => self.nominal_width_x + delta,
            None => self.default_width_x,
        };

        Ok(Glyph {
            width,
            operations: vm.operations,
            seac: vm.seac,
        })
    }
}

struct Vm<'a> {
    local_subrs: &'a IndexTable,
    global_subrs: &'a IndexTable,
    width: Option<f32>,
    width_parsed: bool,
    stems_len: u32,
    has_endchar: bool,
    has_move_to: bool,
    x: f32,
    y: f32,
    h_stem_pos: f32,
    v_stem_pos: f32,
    transient: [f32; TRANSIENT_ARRAY_LEN],
    operations: Vec<GlyphOp>,
    seac: Option<Seac>,
}

impl<'a> Vm<'a> {
    fn new(local_subrs: &'a IndexTable, global_subrs: &'a IndexTable) -> Vm<'a> {
        Vm {
            local_subrs,
            global_subrs,
            width: None,
            width_parsed: false,
            stems_len: 0,
            has_endchar: false,
            has_move_to: false,
            x: 0.0,
            y: 0.0,
            h_stem_pos: 0.0,
            v_stem_pos: 0.0,
            transient: [0.0; TRANSIENT_ARRAY_LEN],
            operations: Vec::new(),
            seac: None,
        }
    }

    fn execute(
        &mut self,
        char_string: &[u8],
        stack: &mut ArgumentsStack,
        depth: u8,
    ) -> Result<(), CharStringError> {
        let mut ctxt = ReadScope::new(char_string).ctxt();

        while ctxt.bytes_available() {
            let op = ctxt.read_u8()?;
            match op {
                0 | 2 | 9 | 13 | 15 | 16 | 17 => {
                    // Reserved.
                    return Err(CharStringError::InvalidOperator);
                }
                operator::HORIZONTAL_STEM | operator::HORIZONTAL_STEM_HINT_MASK => {
                    self.stems(stack, false)?;
                }
                operator::VERTICAL_STEM | operator::VERTICAL_STEM_HINT_MASK => {
                    self.stems(stack, true)?;
                }
                operator::HINT_MASK | operator::COUNTER_MASK => {
                    if !stack.is_empty() {
                        // Operands before the first mask are implicit
                        // vstem hints.
                        self.stems(stack, true)?;
                    }

                    let mask_len = ((self.stems_len + 7) >> 3) as usize;
                    let mask = ctxt.read_slice(mask_len)?.iter().copied().collect();
                    if op == operator::HINT_MASK {
                        self.operations.push(GlyphOp::HintMask(mask));
                    } else {
                        self.operations.push(GlyphOp::CounterMask(mask));
                    }
                }
                operator::MOVE_TO => {
                    let i = self.parse_width(stack, 2);
                    if stack.len() != i + 2 {
                        return Err(CharStringError::InvalidArgumentCount);
                    }
                    self.x += stack.at(i);
                    self.y += stack.at(i + 1);
                    self.move_to();
                    stack.clear();
                }
                operator::HORIZONTAL_MOVE_TO => {
                    let i = self.parse_width(stack, 1);
                    if stack.len() != i + 1 {
                        return Err(CharStringError::InvalidArgumentCount);
                    }
                    self.x += stack.at(i);
                    self.move_to();
                    stack.clear();
                }
                operator::VERTICAL_MOVE_TO => {
                    let i = self.parse_width(stack, 1);
                    if stack.len() != i + 1 {
                        return Err(CharStringError::InvalidArgumentCount);
                    }
                    self.y += stack.at(i);
                    self.move_to();
                    stack.clear();
                }
                operator::LINE_TO => self.parse_line_to(stack)?,
                operator::HORIZONTAL_LINE_TO => self.parse_alternating_line_to(stack, true)?,
                operator::VERTICAL_LINE_TO => self.parse_alternating_line_to(stack, false)?,
                operator::CURVE_TO => self.parse_curve_to(stack)?,
                operator::CURVE_LINE => self.parse_curve_line(stack)?,
                operator::LINE_CURVE => self.parse_line_curve(stack)?,
                operator::VV_CURVE_TO => self.parse_vv_curve_to(stack)?,
                operator::HH_CURVE_TO => self.parse_hh_curve_to(stack)?,
                operator::VH_CURVE_TO => self.parse_hv_curve_to(stack, false)?,
                operator::HV_CURVE_TO => self.parse_hv_curve_to(stack, true)?,
                operator::CALL_LOCAL_SUBROUTINE => {
                    if stack.is_empty() {
                        return Err(CharStringError::InvalidArgumentCount);
                    }
                    if depth == STACK_LIMIT {
                        return Err(CharStringError::NestingLimitReached);
                    }

                    let bias = calc_subroutine_bias(self.local_subrs.len());
                    let index = conv_subroutine_index(stack.pop(), bias)?;
                    let subr = self
                        .local_subrs
                        .get(index)
                        .ok_or(CharStringError::BadSubrIndex)?;
                    self.execute(subr, stack, depth + 1)?;

                    if self.has_endchar {
                        if ctxt.bytes_available() {
                            return Err(CharStringError::DataAfterEndChar);
                        }
                        break;
                    }
                }
                operator::CALL_GLOBAL_SUBROUTINE => {
                    if stack.is_empty() {
                        return Err(CharStringError::InvalidArgumentCount);
                    }
                    if depth == STACK_LIMIT {
                        return Err(CharStringError::NestingLimitReached);
                    }

                    let bias = calc_subroutine_bias(self.global_subrs.len());
                    let index = conv_subroutine_index(stack.pop(), bias)?;
                    let subr = self
                        .global_subrs
                        .get(index)
                        .ok_or(CharStringError::BadSubrIndex)?;
                    self.execute(subr, stack, depth + 1)?;

                    if self.has_endchar {
                        if ctxt.bytes_available() {
                            return Err(CharStringError::DataAfterEndChar);
                        }
                        break;
                    }
                }
                operator::RETURN => break,
                operator::ESCAPE => self.parse_escape(&mut ctxt, stack)?,
                operator::ENDCHAR => {
                    match stack.len() {
                        0 => {}
                        1 if !self.width_parsed => {
                            self.width = Some(stack.at(0));
                            self.width_parsed = true;
                        }
                        4 | 5 => {
                            let mut i = 0;
                            if stack.len() == 5 {
                                if self.width_parsed {
                                    return Err(CharStringError::InvalidArgumentCount);
                                }
                                self.width = Some(stack.at(0));
                                self.width_parsed = true;
                                i = 1;
                            }
                            self.seac = Some(Seac {
                                adx: stack.at(i),
                                ady: stack.at(i + 1),
                                base: seac_code(stack.at(i + 2))?,
                                accent: seac_code(stack.at(i + 3))?,
                            });
                        }
                        _ => return Err(CharStringError::InvalidArgumentCount),
                    }
                    stack.clear();

                    self.has_endchar = true;
                    self.operations.push(GlyphOp::EndChar);
                    if ctxt.bytes_available() {
                        return Err(CharStringError::DataAfterEndChar);
                    }
                    break;
                }
                operator::SHORT_INT => stack.push(f32::from(ctxt.read_i16be()?))?,
                32..=246 => stack.push(parse_int1(op)?)?,
                247..=250 => stack.push(parse_int2(op, &mut ctxt)?)?,
                251..=254 => stack.push(parse_int3(op, &mut ctxt)?)?,
                operator::FIXED_16_16 => stack.push(parse_fixed(&mut ctxt)?)?,
            }
        }

        Ok(())
    }

    fn parse_escape(
        &mut self,
        ctxt: &mut ReadCtxt<'_>,
        stack: &mut ArgumentsStack,
    ) -> Result<(), CharStringError> {
        let op2 = ctxt.read_u8()?;
        match op2 {
            operator::escape::DOTSECTION => {
                // Deprecated, no effect.
            }
            operator::escape::AND => {
                require(stack, 2)?;
                let b = stack.pop();
                let a = stack.pop();
                stack.push(bool_operand(a != 0.0 && b != 0.0))?;
            }
            operator::escape::OR => {
                require(stack, 2)?;
                let b = stack.pop();
                let a = stack.pop();
                stack.push(bool_operand(a != 0.0 || b != 0.0))?;
            }
            operator::escape::NOT => {
                require(stack, 1)?;
                let a = stack.pop();
                stack.push(bool_operand(a == 0.0))?;
            }
            operator::escape::ABS => {
                require(stack, 1)?;
                let a = stack.pop();
                stack.push(a.abs())?;
            }
            operator::escape::ADD => {
                require(stack, 2)?;
                let b = stack.pop();
                let a = stack.pop();
                stack.push(a + b)?;
            }
            operator::escape::SUB => {
                require(stack, 2)?;
                let b = stack.pop();
                let a = stack.pop();
                stack.push(a - b)?;
            }
            operator::escape::DIV => {
                require(stack, 2)?;
                let b = stack.pop();
                let a = stack.pop();
                stack.push(a / b)?;
            }
            operator::escape::NEG => {
                require(stack, 1)?;
                let a = stack.pop();
                stack.push(-a)?;
            }
            operator::escape::EQ => {
                require(stack, 2)?;
                let b = stack.pop();
                let a = stack.pop();
                stack.push(bool_operand(a == b))?;
            }
            operator::escape::DROP => {
                require(stack, 1)?;
                stack.pop();
            }
            operator::escape::PUT => {
                require(stack, 2)?;
                let index = transient_index(stack.pop())?;
                let value = stack.pop();
                self.transient[index] = value;
            }
            operator::escape::GET => {
                require(stack, 1)?;
                let index = transient_index(stack.pop())?;
                stack.push(self.transient[index])?;
            }
            operator::escape::IFELSE => {
                require(stack, 4)?;
                let v2 = stack.pop();
                let v1 = stack.pop();
                let s2 = stack.pop();
                let s1 = stack.pop();
                stack.push(if v1 <= v2 { s1 } else { s2 })?;
            }
            operator::escape::RANDOM => {
                // A fixed value keeps interpretation reproducible and is
                // the largest value the operator is specified to produce.
                stack.push(1.0)?;
            }
            operator::escape::MUL => {
                require(stack, 2)?;
                let b = stack.pop();
                let a = stack.pop();
                stack.push(a * b)?;
            }
            operator::escape::SQRT => {
                require(stack, 1)?;
                let a = stack.pop();
                stack.push(a.sqrt())?;
            }
            operator::escape::DUP => {
                require(stack, 1)?;
                stack.push(stack.at(stack.len() - 1))?;
            }
            operator::escape::EXCH => {
                require(stack, 2)?;
                let b = stack.pop();
                let a = stack.pop();
                stack.push(b)?;
                stack.push(a)?;
            }
            operator::escape::INDEX => {
                require(stack, 1)?;
                let n = stack.pop();
                // A negative index duplicates the top element.
                let index = if n < 0.0 { 0 } else { n as usize };
                if index >= stack.len() {
                    return Err(CharStringError::InvalidArgumentCount);
                }
                stack.push(stack.at(stack.len() - 1 - index))?;
            }
            operator::escape::ROLL => {
                require(stack, 2)?;
                let j = stack.pop() as i32;
                let n = stack.pop() as i32;
                if n < 0 || n as usize > stack.len() {
                    return Err(CharStringError::InvalidArgumentCount);
                }
                if n > 0 {
                    let len = stack.len();
                    let top = &mut stack.all_mut()[len - n as usize..];
                    top.rotate_right(j.rem_euclid(n) as usize);
                }
            }
            operator::escape::HFLEX => self.parse_hflex(stack)?,
            operator::escape::FLEX => self.parse_flex(stack)?,
            operator::escape::HFLEX1 => self.parse_hflex1(stack)?,
            operator::escape::FLEX1 => self.parse_flex1(stack)?,
            _ => return Err(CharStringError::InvalidOperator),
        }

        Ok(())
    }

    /// Consume the leading width operand if `stack` holds one more operand
    /// than the operator expects. Returns the index of the first argument.
    fn parse_width(&mut self, stack: &ArgumentsStack, n_args: usize) -> usize {
        if stack.len() == n_args + 1 && !self.width_parsed {
            self.width = Some(stack.at(0));
            self.width_parsed = true;
            1
        } else {
            0
        }
    }

    fn move_to(&mut self) {
        self.has_move_to = true;
        self.operations.push(GlyphOp::MoveTo {
            x: self.x,
            y: self.y,
        });
    }

    fn line_to(&mut self) {
        self.operations.push(GlyphOp::LineTo {
            x: self.x,
            y: self.y,
        });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.operations.push(GlyphOp::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x: self.x,
            y: self.y,
        });
    }

    fn check_has_move_to(&self) -> Result<(), CharStringError> {
        if self.has_move_to {
            Ok(())
        } else {
            Err(CharStringError::MissingMoveTo)
        }
    }

    fn stems(&mut self, stack: &mut ArgumentsStack, vertical: bool) -> Result<(), CharStringError> {
        // The odd operand is the width.
        let len = if stack.len() & 1 == 1 && !self.width_parsed {
            self.width = Some(stack.at(0));
            self.width_parsed = true;
            stack.len() - 1
        } else {
            stack.len()
        };
        self.stems_len += len as u32 >> 1;

        // Each pair is an edge delta relative to the previous stem in the
        // same orientation, followed by the stem width.
        let mut pos = if vertical {
            self.v_stem_pos
        } else {
            self.h_stem_pos
        };
        let mut i = stack.len() - len;
        while i + 2 <= stack.len() {
            let edge = pos + stack.at(i);
            let width = stack.at(i + 1);
            pos = edge + width;
            self.operations.push(GlyphOp::HintStem {
                edge,
                width,
                vertical,
            });
            i += 2;
        }
        if vertical {
            self.v_stem_pos = pos;
        } else {
            self.h_stem_pos = pos;
        }

        stack.clear();
        Ok(())
    }

    fn parse_line_to(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() & 1 == 1 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        let mut i = 0;
        while i < stack.len() {
            self.x += stack.at(i);
            self.y += stack.at(i + 1);
            self.line_to();
            i += 2;
        }

        stack.clear();
        Ok(())
    }

    fn parse_alternating_line_to(
        &mut self,
        stack: &mut ArgumentsStack,
        mut horizontal: bool,
    ) -> Result<(), CharStringError> {
        self.check_has_move_to()?;

        for i in 0..stack.len() {
            if horizontal {
                self.x += stack.at(i);
            } else {
                self.y += stack.at(i);
            }
            horizontal = !horizontal;
            self.line_to();
        }

        stack.clear();
        Ok(())
    }

    fn parse_curve_to(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() % 6 != 0 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        let mut i = 0;
        while i < stack.len() {
            let x1 = self.x + stack.at(i);
            let y1 = self.y + stack.at(i + 1);
            let x2 = x1 + stack.at(i + 2);
            let y2 = y1 + stack.at(i + 3);
            self.x = x2 + stack.at(i + 4);
            self.y = y2 + stack.at(i + 5);
            self.curve_to(x1, y1, x2, y2);
            i += 6;
        }

        stack.clear();
        Ok(())
    }

    fn parse_curve_line(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() < 8 || (stack.len() - 2) % 6 != 0 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        let mut i = 0;
        while i < stack.len() - 2 {
            let x1 = self.x + stack.at(i);
            let y1 = self.y + stack.at(i + 1);
            let x2 = x1 + stack.at(i + 2);
            let y2 = y1 + stack.at(i + 3);
            self.x = x2 + stack.at(i + 4);
            self.y = y2 + stack.at(i + 5);
            self.curve_to(x1, y1, x2, y2);
            i += 6;
        }

        self.x += stack.at(i);
        self.y += stack.at(i + 1);
        self.line_to();

        stack.clear();
        Ok(())
    }

    fn parse_line_curve(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() < 8 || (stack.len() - 6) & 1 == 1 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        let mut i = 0;
        while i < stack.len() - 6 {
            self.x += stack.at(i);
            self.y += stack.at(i + 1);
            self.line_to();
            i += 2;
        }

        let x1 = self.x + stack.at(i);
        let y1 = self.y + stack.at(i + 1);
        let x2 = x1 + stack.at(i + 2);
        let y2 = y1 + stack.at(i + 3);
        self.x = x2 + stack.at(i + 4);
        self.y = y2 + stack.at(i + 5);
        self.curve_to(x1, y1, x2, y2);

        stack.clear();
        Ok(())
    }

    fn parse_hh_curve_to(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;

        let mut i = 0;
        // The odd operand is the Y delta of the first control point.
        if stack.len() & 1 == 1 {
            self.y += stack.at(0);
            i += 1;
        }
        if (stack.len() - i) % 4 != 0 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        while i < stack.len() {
            let x1 = self.x + stack.at(i);
            let y1 = self.y;
            let x2 = x1 + stack.at(i + 1);
            let y2 = y1 + stack.at(i + 2);
            self.x = x2 + stack.at(i + 3);
            self.y = y2;
            self.curve_to(x1, y1, x2, y2);
            i += 4;
        }

        stack.clear();
        Ok(())
    }

    fn parse_vv_curve_to(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;

        let mut i = 0;
        // The odd operand is the X delta of the first control point.
        if stack.len() & 1 == 1 {
            self.x += stack.at(0);
            i += 1;
        }
        if (stack.len() - i) % 4 != 0 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        while i < stack.len() {
            let x1 = self.x;
            let y1 = self.y + stack.at(i);
            let x2 = x1 + stack.at(i + 1);
            let y2 = y1 + stack.at(i + 2);
            self.x = x2;
            self.y = y2 + stack.at(i + 3);
            self.curve_to(x1, y1, x2, y2);
            i += 4;
        }

        stack.clear();
        Ok(())
    }

    fn parse_hv_curve_to(
        &mut self,
        stack: &mut ArgumentsStack,
        mut horizontal: bool,
    ) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() < 4 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        stack.reverse();
        while !stack.is_empty() {
            if stack.len() < 4 {
                return Err(CharStringError::InvalidArgumentCount);
            }

            // The curves alternate between a horizontal and a vertical
            // starting tangent. A spare fifth operand on the last curve is
            // the delta along the other axis of the end point.
            if horizontal {
                let x1 = self.x + stack.pop();
                let y1 = self.y;
                let x2 = x1 + stack.pop();
                let y2 = y1 + stack.pop();
                self.y = y2 + stack.pop();
                self.x = x2 + if stack.len() == 1 { stack.pop() } else { 0.0 };
                self.curve_to(x1, y1, x2, y2);
            } else {
                let x1 = self.x;
                let y1 = self.y + stack.pop();
                let x2 = x1 + stack.pop();
                let y2 = y1 + stack.pop();
                self.x = x2 + stack.pop();
                self.y = y2 + if stack.len() == 1 { stack.pop() } else { 0.0 };
                self.curve_to(x1, y1, x2, y2);
            }
            horizontal = !horizontal;
        }

        Ok(())
    }

    fn parse_flex(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() != 13 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        let x1 = self.x + stack.at(0);
        let y1 = self.y + stack.at(1);
        let x2 = x1 + stack.at(2);
        let y2 = y1 + stack.at(3);
        self.x = x2 + stack.at(4);
        self.y = y2 + stack.at(5);
        self.curve_to(x1, y1, x2, y2);

        let x3 = self.x + stack.at(6);
        let y3 = self.y + stack.at(7);
        let x4 = x3 + stack.at(8);
        let y4 = y3 + stack.at(9);
        self.x = x4 + stack.at(10);
        self.y = y4 + stack.at(11);
        // stack.at(12) is the flex depth, only relevant when rasterizing.
        self.curve_to(x3, y3, x4, y4);

        stack.clear();
        Ok(())
    }

    fn parse_hflex(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() != 7 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        let y0 = self.y;

        let x1 = self.x + stack.at(0);
        let y1 = self.y;
        let x2 = x1 + stack.at(1);
        let y2 = y1 + stack.at(2);
        self.x = x2 + stack.at(3);
        self.y = y2;
        self.curve_to(x1, y1, x2, y2);

        let x3 = self.x + stack.at(4);
        let y3 = y2;
        let x4 = x3 + stack.at(5);
        let y4 = y0;
        self.x = x4 + stack.at(6);
        self.y = y0;
        self.curve_to(x3, y3, x4, y4);

        stack.clear();
        Ok(())
    }

    fn parse_hflex1(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() != 9 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        let y0 = self.y;

        let x1 = self.x + stack.at(0);
        let y1 = self.y + stack.at(1);
        let x2 = x1 + stack.at(2);
        let y2 = y1 + stack.at(3);
        self.x = x2 + stack.at(4);
        self.y = y2;
        self.curve_to(x1, y1, x2, y2);

        let x3 = self.x + stack.at(5);
        let y3 = y2;
        let x4 = x3 + stack.at(6);
        let y4 = y3 + stack.at(7);
        self.x = x4 + stack.at(8);
        self.y = y0;
        self.curve_to(x3, y3, x4, y4);

        stack.clear();
        Ok(())
    }

    fn parse_flex1(&mut self, stack: &mut ArgumentsStack) -> Result<(), CharStringError> {
        self.check_has_move_to()?;
        if stack.len() != 11 {
            return Err(CharStringError::InvalidArgumentCount);
        }

        let dx = self.x + stack.at(0) + stack.at(2) + stack.at(4) + stack.at(6) + stack.at(8);
        let dy = self.y + stack.at(1) + stack.at(3) + stack.at(5) + stack.at(7) + stack.at(9);

        let x1 = self.x + stack.at(0);
        let y1 = self.y + stack.at(1);
        let x2 = x1 + stack.at(2);
        let y2 = y1 + stack.at(3);
        let x3 = x2 + stack.at(4);
        let y3 = y2 + stack.at(5);

        let x4 = x3 + stack.at(6);
        let y4 = y3 + stack.at(7);
        let x5 = x4 + stack.at(8);
        let y5 = y4 + stack.at(9);

        // The eleventh operand is the delta along the axis with the larger
        // overall movement. The end point returns to the start position on
        // the other axis.
        let (x6, y6) = if (dx - self.x).abs() > (dy - self.y).abs() {
            (x5 + stack.at(10), dy)
        } else {
            (dx, y5 + stack.at(10))
        };

        self.x = x3;
        self.y = y3;
        self.curve_to(x1, y1, x2, y2);

        self.x = x6;
        self.y = y6;
        self.curve_to(x4, y4, x5, y5);

        stack.clear();
        Ok(())
    }
}

fn require(stack: &ArgumentsStack, n: usize) -> Result<(), CharStringError> {
    if stack.len() < n {
        Err(CharStringError::InvalidArgumentCount)
    } else {
        Ok(())
    }
}

fn bool_operand(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

fn seac_code(value: f32) -> Result<u8, CharStringError> {
    if (0.0..=255.0).contains(&value) {
        Ok(value as u8)
    } else {
        Err(CharStringError::InvalidSeacCode)
    }
}

fn transient_index(value: f32) -> Result<usize, CharStringError> {
    let index = value as i32;
    if (0..TRANSIENT_ARRAY_LEN as i32).contains(&index) {
        Ok(index as usize)
    } else {
        Err(CharStringError::InvalidTransientIndex)
    }
}

pub(crate) fn calc_subroutine_bias(len: usize) -> u16 {
    if len < 1240 {
        107
    } else if len < 33900 {
        1131
    } else {
        32768
    }
}

fn conv_subroutine_index(index: f32, bias: u16) -> Result<usize, CharStringError> {
    let index = index as i32;
    let biased_index = index
        .checked_add(i32::from(bias))
        .ok_or(CharStringError::BadSubrIndex)?;
    usize::try_from(biased_index).map_err(|_| CharStringError::BadSubrIndex)
}

fn parse_int1(op: u8) -> Result<f32, CharStringError> {
    let n = i16::from(op) - 139;
    Ok(f32::from(n))
}

fn parse_int2(op: u8, ctxt: &mut ReadCtxt<'_>) -> Result<f32, CharStringError> {
    let b1 = ctxt.read_u8()?;
    let n = (i16::from(op) - 247) * 256 + i16::from(b1) + 108;
    debug_assert!((108..=1131).contains(&n));
    Ok(f32::from(n))
}

fn parse_int3(op: u8, ctxt: &mut ReadCtxt<'_>) -> Result<f32, CharStringError> {
    let b1 = ctxt.read_u8()?;
    let n = -(i16::from(op) - 251) * 256 - i16::from(b1) - 108;
    debug_assert!((-1131..=-108).contains(&n));
    Ok(f32::from(n))
}

fn parse_fixed(ctxt: &mut ReadCtxt<'_>) -> Result<f32, CharStringError> {
    let n = ctxt.read_i32be()?;
    Ok(n as f32 / 65536.0)
}

#[cfg(test)]
mod tests {
    use tinyvec::tiny_vec;

    use super::*;

    fn interpret(program: &[u8]) -> Result<Glyph, CharStringError> {
        let local_subrs = IndexTable::empty();
        let global_subrs = IndexTable::empty();
        Interpreter::new(&local_subrs, &global_subrs).interpret(program)
    }

    fn interpret_with_subrs(
        program: &[u8],
        local: Vec<Vec<u8>>,
        global: Vec<Vec<u8>>,
    ) -> Result<Glyph, CharStringError> {
        let local_subrs = IndexTable::from_objects(local);
        let global_subrs = IndexTable::from_objects(global);
        Interpreter::new(&local_subrs, &global_subrs).interpret(program)
    }

    // Encodes an integer in -107..=107 as a single byte operand.
    fn int(n: i8) -> u8 {
        (i16::from(n) + 139) as u8
    }

    #[test]
    fn test_calc_subroutine_bias() {
        assert_eq!(calc_subroutine_bias(0), 107);
        assert_eq!(calc_subroutine_bias(1239), 107);
        assert_eq!(calc_subroutine_bias(1240), 1131);
        assert_eq!(calc_subroutine_bias(33899), 1131);
        assert_eq!(calc_subroutine_bias(33900), 32768);
    }

    #[test]
    fn test_endchar_required() {
        let program = [int(10), int(20), operator::MOVE_TO];
        assert_eq!(interpret(&program), Err(CharStringError::MissingEndChar));
    }

    #[test]
    fn test_data_after_endchar() {
        let program = [operator::ENDCHAR, int(0)];
        assert_eq!(interpret(&program), Err(CharStringError::DataAfterEndChar));
    }

    #[test]
    fn test_bare_endchar() {
        let glyph = interpret(&[operator::ENDCHAR]).unwrap();
        assert_eq!(glyph.operations, vec![GlyphOp::EndChar]);
        assert_eq!(glyph.width, 0.0);
        assert!(glyph.seac.is_none());
    }

    #[test]
    fn test_endchar_width() {
        let glyph = interpret(&[int(50), operator::ENDCHAR]).unwrap();
        assert_eq!(glyph.width, 50.0);
    }

    #[test]
    fn test_endchar_two_or_three_args_rejected() {
        let program = [int(1), int(2), operator::ENDCHAR];
        assert_eq!(
            interpret(&program),
            Err(CharStringError::InvalidArgumentCount)
        );

        let program = [int(1), int(2), int(3), operator::ENDCHAR];
        assert_eq!(
            interpret(&program),
            Err(CharStringError::InvalidArgumentCount)
        );
    }

    #[test]
    fn test_endchar_seac() {
        // adx 10, ady 0, base 'A' (65), accent 66
        let program = [int(10), int(0), int(65), int(66), operator::ENDCHAR];
        let glyph = interpret(&program).unwrap();
        assert_eq!(
            glyph.seac,
            Some(Seac {
                adx: 10.0,
                ady: 0.0,
                base: 65,
                accent: 66,
            })
        );
        assert_eq!(glyph.operations, vec![GlyphOp::EndChar]);
    }

    #[test]
    fn test_endchar_seac_with_width() {
        let program = [
            int(100),
            int(10),
            int(0),
            int(65),
            int(66),
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.width, 100.0);
        assert!(glyph.seac.is_some());
    }

    #[test]
    fn test_move_to_width() {
        let program = [int(50), int(10), int(20), operator::MOVE_TO, operator::ENDCHAR];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.width, 50.0);
        assert_eq!(
            glyph.operations,
            vec![GlyphOp::MoveTo { x: 10.0, y: 20.0 }, GlyphOp::EndChar]
        );
    }

    #[test]
    fn test_move_to_bad_arity() {
        let program = [
            int(0),
            int(0),
            int(0),
            operator::HORIZONTAL_MOVE_TO,
            operator::ENDCHAR,
        ];
        assert_eq!(
            interpret(&program),
            Err(CharStringError::InvalidArgumentCount)
        );
    }

    #[test]
    fn test_width_resolution() {
        let local_subrs = IndexTable::empty();
        let global_subrs = IndexTable::empty();
        let mut interp = Interpreter::new(&local_subrs, &global_subrs);
        interp.default_width_x = 500.0;
        interp.nominal_width_x = 600.0;

        let glyph = interp.interpret(&[operator::ENDCHAR]).unwrap();
        assert_eq!(glyph.width, 500.0);

        let glyph = interp.interpret(&[int(-20), operator::ENDCHAR]).unwrap();
        assert_eq!(glyph.width, 580.0);
    }

    #[test]
    fn test_line_before_move_to() {
        let program = [int(10), int(10), operator::LINE_TO, operator::ENDCHAR];
        assert_eq!(interpret(&program), Err(CharStringError::MissingMoveTo));
    }

    #[test]
    fn test_alternating_lines() {
        #[rustfmt::skip]
        let program = [
            int(10), int(20), operator::MOVE_TO,
            int(30), int(40), operator::HORIZONTAL_LINE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(
            glyph.operations,
            vec![
                GlyphOp::MoveTo { x: 10.0, y: 20.0 },
                GlyphOp::LineTo { x: 40.0, y: 20.0 },
                GlyphOp::LineTo { x: 40.0, y: 60.0 },
                GlyphOp::EndChar,
            ]
        );
    }

    #[test]
    fn test_curve_to_arity() {
        #[rustfmt::skip]
        let program = [
            int(0), int(0), operator::MOVE_TO,
            int(1), int(2), int(3), int(4), int(5), operator::CURVE_TO,
            operator::ENDCHAR,
        ];
        assert_eq!(
            interpret(&program),
            Err(CharStringError::InvalidArgumentCount)
        );
    }

    #[test]
    fn test_curve_to() {
        #[rustfmt::skip]
        let program = [
            int(0), int(0), operator::MOVE_TO,
            int(10), int(10), int(10), int(10), int(10), int(10), operator::CURVE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(
            glyph.operations[1],
            GlyphOp::CurveTo {
                x1: 10.0,
                y1: 10.0,
                x2: 20.0,
                y2: 20.0,
                x: 30.0,
                y: 30.0,
            }
        );
    }

    #[test]
    fn test_hv_curve_to_arities() {
        // Legal argument counts produce one curve per group of four, with
        // an optional trailing fifth operand on the last curve.
        for (n_args, n_curves) in [(4, 1), (5, 1), (8, 2), (9, 2)] {
            let mut program = vec![int(0), int(0), operator::MOVE_TO];
            program.extend(std::iter::repeat(int(10)).take(n_args));
            program.push(operator::HV_CURVE_TO);
            program.push(operator::ENDCHAR);
            let glyph = interpret(&program).unwrap();
            let curves = glyph
                .operations
                .iter()
                .filter(|op| matches!(op, GlyphOp::CurveTo { .. }))
                .count();
            assert_eq!(curves, n_curves, "args: {}", n_args);
        }

        for n_args in [6, 7] {
            let mut program = vec![int(0), int(0), operator::MOVE_TO];
            program.extend(std::iter::repeat(int(10)).take(n_args));
            program.push(operator::HV_CURVE_TO);
            program.push(operator::ENDCHAR);
            assert_eq!(
                interpret(&program),
                Err(CharStringError::InvalidArgumentCount),
                "args: {}",
                n_args
            );
        }
    }

    #[test]
    fn test_vh_curve_to() {
        #[rustfmt::skip]
        let program = [
            int(0), int(0), operator::MOVE_TO,
            int(10), int(20), int(30), int(40), operator::VH_CURVE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(
            glyph.operations[1],
            GlyphOp::CurveTo {
                x1: 0.0,
                y1: 10.0,
                x2: 20.0,
                y2: 40.0,
                x: 60.0,
                y: 40.0,
            }
        );
    }

    #[test]
    fn test_hh_curve_to_leading_delta() {
        // Five arguments, the first is the Y delta of the first control
        // point.
        #[rustfmt::skip]
        let program = [
            int(0), int(0), operator::MOVE_TO,
            int(5), int(10), int(10), int(10), int(10), operator::HH_CURVE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(
            glyph.operations[1],
            GlyphOp::CurveTo {
                x1: 10.0,
                y1: 5.0,
                x2: 20.0,
                y2: 15.0,
                x: 30.0,
                y: 15.0,
            }
        );
    }

    #[test]
    fn test_flex() {
        #[rustfmt::skip]
        let program = [
            int(0), int(0), operator::MOVE_TO,
            int(10), int(10), int(10), int(10), int(10), int(10),
            int(10), int(10), int(10), int(10), int(10), int(10),
            int(50),
            operator::ESCAPE, operator::escape::FLEX,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(
            glyph.operations,
            vec![
                GlyphOp::MoveTo { x: 0.0, y: 0.0 },
                GlyphOp::CurveTo {
                    x1: 10.0,
                    y1: 10.0,
                    x2: 20.0,
                    y2: 20.0,
                    x: 30.0,
                    y: 30.0,
                },
                GlyphOp::CurveTo {
                    x1: 40.0,
                    y1: 40.0,
                    x2: 50.0,
                    y2: 50.0,
                    x: 60.0,
                    y: 60.0,
                },
                GlyphOp::EndChar,
            ]
        );
    }

    #[test]
    fn test_stem_hints() {
        // Three vertical stems of width 50 declared as implicit vstems
        // before a hintmask. One mask byte covers up to eight stems.
        #[rustfmt::skip]
        let program = [
            int(0), int(50), int(0), int(50), int(0), int(50),
            operator::HINT_MASK, 0xE0,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(
            glyph.operations,
            vec![
                GlyphOp::HintStem {
                    edge: 0.0,
                    width: 50.0,
                    vertical: true,
                },
                GlyphOp::HintStem {
                    edge: 50.0,
                    width: 50.0,
                    vertical: true,
                },
                GlyphOp::HintStem {
                    edge: 100.0,
                    width: 50.0,
                    vertical: true,
                },
                GlyphOp::HintMask(tiny_vec![0xE0]),
                GlyphOp::EndChar,
            ]
        );
    }

    #[test]
    fn test_stem_width() {
        // Odd operand count on the first stem operator carries the width.
        #[rustfmt::skip]
        let program = [
            int(45), int(0), int(50), operator::HORIZONTAL_STEM,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.width, 45.0);
        assert_eq!(
            glyph.operations[0],
            GlyphOp::HintStem {
                edge: 0.0,
                width: 50.0,
                vertical: false,
            }
        );
    }

    #[test]
    fn test_counter_mask() {
        #[rustfmt::skip]
        let program = [
            int(0), int(50), operator::HORIZONTAL_STEM,
            operator::COUNTER_MASK, 0x80,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.operations[1], GlyphOp::CounterMask(tiny_vec![0x80]));
    }

    #[test]
    fn test_hint_mask_truncated() {
        let program = [int(0), int(50), operator::HINT_MASK];
        assert_eq!(
            interpret(&program),
            Err(CharStringError::Parse(ParseError::BadEof))
        );
    }

    #[test]
    fn test_local_subroutine_bias() {
        // Five subroutines use a bias of 107, so operand -107 selects
        // subroutine 0.
        let subr = vec![int(10), int(20), operator::MOVE_TO, operator::RETURN];
        let filler = vec![operator::RETURN];
        let local = vec![
            subr,
            filler.clone(),
            filler.clone(),
            filler.clone(),
            filler,
        ];
        let program = [
            int(-107),
            operator::CALL_LOCAL_SUBROUTINE,
            operator::ENDCHAR,
        ];
        let glyph = interpret_with_subrs(&program, local, Vec::new()).unwrap();
        assert_eq!(
            glyph.operations,
            vec![GlyphOp::MoveTo { x: 10.0, y: 20.0 }, GlyphOp::EndChar]
        );
    }

    #[test]
    fn test_global_subroutine() {
        let global = vec![vec![int(5), operator::HORIZONTAL_MOVE_TO, operator::RETURN]];
        let program = [
            int(-107),
            operator::CALL_GLOBAL_SUBROUTINE,
            operator::ENDCHAR,
        ];
        let glyph = interpret_with_subrs(&program, Vec::new(), global).unwrap();
        assert_eq!(glyph.operations[0], GlyphOp::MoveTo { x: 5.0, y: 0.0 });
    }

    #[test]
    fn test_subroutine_with_endchar() {
        let local = vec![vec![operator::ENDCHAR]];
        let program = [int(-107), operator::CALL_LOCAL_SUBROUTINE];
        let glyph = interpret_with_subrs(&program, local, Vec::new()).unwrap();
        assert_eq!(glyph.operations, vec![GlyphOp::EndChar]);
    }

    #[test]
    fn test_bad_subroutine_index() {
        let program = [int(0), operator::CALL_LOCAL_SUBROUTINE];
        assert_eq!(interpret(&program), Err(CharStringError::BadSubrIndex));
    }

    #[test]
    fn test_recursion_limit() {
        let local = vec![vec![int(-107), operator::CALL_LOCAL_SUBROUTINE]];
        let program = [int(-107), operator::CALL_LOCAL_SUBROUTINE];
        assert_eq!(
            interpret_with_subrs(&program, local, Vec::new()),
            Err(CharStringError::NestingLimitReached)
        );
    }

    #[test]
    fn test_reserved_operator() {
        assert_eq!(interpret(&[2]), Err(CharStringError::InvalidOperator));
    }

    #[test]
    fn test_short_int_and_fixed() {
        #[rustfmt::skip]
        let program = [
            operator::SHORT_INT, 0x01, 0x00,
            operator::FIXED_16_16, 0x00, 0x02, 0x80, 0x00,
            operator::MOVE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.operations[0], GlyphOp::MoveTo { x: 256.0, y: 2.5 });
    }

    #[test]
    fn test_arithmetic_mul() {
        #[rustfmt::skip]
        let program = [
            int(2), int(3),
            operator::ESCAPE, operator::escape::MUL,
            operator::HORIZONTAL_MOVE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.operations[0], GlyphOp::MoveTo { x: 6.0, y: 0.0 });
    }

    #[test]
    fn test_transient_put_get() {
        #[rustfmt::skip]
        let program = [
            int(7), int(5),
            operator::ESCAPE, operator::escape::PUT,
            int(5),
            operator::ESCAPE, operator::escape::GET,
            operator::HORIZONTAL_MOVE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.operations[0], GlyphOp::MoveTo { x: 7.0, y: 0.0 });
    }

    #[test]
    fn test_transient_index_out_of_range() {
        let program = [
            int(7),
            int(32),
            operator::ESCAPE,
            operator::escape::PUT,
            operator::ENDCHAR,
        ];
        assert_eq!(
            interpret(&program),
            Err(CharStringError::InvalidTransientIndex)
        );
    }

    #[test]
    fn test_ifelse() {
        // v1 <= v2 selects s1.
        #[rustfmt::skip]
        let program = [
            int(1), int(2), int(3), int(3),
            operator::ESCAPE, operator::escape::IFELSE,
            operator::HORIZONTAL_MOVE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.operations[0], GlyphOp::MoveTo { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_random() {
        let program = [
            operator::ESCAPE,
            operator::escape::RANDOM,
            operator::HORIZONTAL_MOVE_TO,
            operator::ENDCHAR,
        ];
        let glyph = interpret(&program).unwrap();
        assert_eq!(glyph.operations[0], GlyphOp::MoveTo { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_arithmetic_underflow() {
        let program = [int(1), operator::ESCAPE, operator::escape::ADD];
        assert_eq!(
            interpret(&program),
            Err(CharStringError::InvalidArgumentCount)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GlyphOp::MoveTo { x: 10.0, y: 20.0 }.to_string(),
            "10 20 moveto"
        );
        assert_eq!(
            GlyphOp::HintStem {
                edge: 0.0,
                width: 50.0,
                vertical: true,
            }
            .to_string(),
            "0 50 vstem"
        );
        assert_eq!(
            GlyphOp::HintMask(tiny_vec![0xE0]).to_string(),
            "hintmask 11100000"
        );
    }
}
