#![warn(rust_2018_idioms)]

//! # cffread
//!
//! Decoder for the Compact Font Format (CFF): the header, INDEX tables,
//! DICTs, charset/encoding tables, and CID font-dict selection, plus an
//! interpreter for the Type 2 charstring programs that describe each
//! glyph's outline and hints.
//!
//! Decoding is a pure function from a byte buffer to an owned
//! [`FontSet`](fontset::FontSet). Individual glyphs are then interpreted on
//! demand into an ordered stream of drawing and hinting operations, which a
//! caller can rasterise, convert, or inspect.

/// Reading of binary data.
pub mod binary;
pub mod charset;
pub mod charstring;
pub mod dict;
pub mod encoding;
pub mod error;
pub mod fd_select;
pub mod fontset;
pub mod index;
mod standard;
