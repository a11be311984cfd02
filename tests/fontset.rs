//! End to end decoding and glyph interpretation over hand assembled CFF
//! streams.

use cffread::charset::Charset;
use cffread::charstring::GlyphOp;
use cffread::fontset::FontSet;

/// Serialize an INDEX with a one byte offset size.
fn index1(entries: &[&[u8]]) -> Vec<u8> {
    let count = u16::try_from(entries.len()).unwrap();
    let mut data = count.to_be_bytes().to_vec();
    if entries.is_empty() {
        return data;
    }

    data.push(0x01);
    let mut offset = 1u8;
    data.push(offset);
    for entry in entries {
        offset += u8::try_from(entry.len()).unwrap();
        data.push(offset);
    }
    for entry in entries {
        data.extend_from_slice(entry);
    }
    data
}

/// A DICT operand encoded as a three byte short integer.
fn short_int(value: usize) -> [u8; 3] {
    let value = u16::try_from(value).unwrap();
    let [hi, lo] = value.to_be_bytes();
    [28, hi, lo]
}

/// Encode an integer in -107..=107 as a single CharString operand byte.
fn int(n: i8) -> u8 {
    (i16::from(n) + 139) as u8
}

/// A font with a custom charset and encoding, a Private DICT with width
/// defaults, and local and global subroutines.
fn build_font() -> Vec<u8> {
    let name_index = index1(&[b"Test"]);
    let string_index = index1(&[b"mylig"]);
    // Draws a line 7 units right of the current point.
    let global_subrs = index1(&[&[int(7), int(0), 5, 11]]);
    // Moves to (5, 0).
    let local_subrs = index1(&[&[int(5), 22, 11]]);

    // Glyph 1 is SID 391 ("mylig"), glyph 2 is SID 1 ("space")
    let charset = [0x00, 0x01, 0x87, 0x00, 0x01];
    // Codes 'A' and 'B' for glyphs 1 and 2
    let encoding = [0x00, 0x02, 0x41, 0x42];

    let glyph0 = [14];
    // Width delta 100, move to (10, 20), line to (40, 20)
    let glyph1 = [int(100), int(10), int(20), 21, int(30), int(0), 5, 14];
    // Calls local subroutine 0 then global subroutine 0
    let glyph2 = [int(-107), 10, int(-107), 29, 14];
    let char_strings = index1(&[&glyph0, &glyph1, &glyph2]);

    const TOP_DICT_LEN: usize = 19;
    const PRIVATE_DICT_LEN: usize = 12;

    let charset_offset = 4 + name_index.len() + (2 + 1 + 2 + TOP_DICT_LEN) + string_index.len()
        + global_subrs.len();
    let encoding_offset = charset_offset + charset.len();
    let char_strings_offset = encoding_offset + encoding.len();
    let private_offset = char_strings_offset + char_strings.len();

    let mut top_dict = Vec::new();
    top_dict.extend(short_int(charset_offset));
    top_dict.push(15);
    top_dict.extend(short_int(encoding_offset));
    top_dict.push(16);
    top_dict.extend(short_int(char_strings_offset));
    top_dict.push(17);
    top_dict.extend(short_int(PRIVATE_DICT_LEN));
    top_dict.extend(short_int(private_offset));
    top_dict.push(18);
    assert_eq!(top_dict.len(), TOP_DICT_LEN);
    let top_dict_index = index1(&[&top_dict]);

    let mut private_dict = Vec::new();
    private_dict.extend(short_int(250));
    private_dict.push(20); // defaultWidthX
    private_dict.extend(short_int(300));
    private_dict.push(21); // nominalWidthX
    private_dict.extend(short_int(PRIVATE_DICT_LEN)); // Subrs follow the dict
    private_dict.push(19);
    assert_eq!(private_dict.len(), PRIVATE_DICT_LEN);

    let mut data = vec![0x01, 0x00, 0x04, 0x01];
    data.extend(name_index);
    data.extend(top_dict_index);
    data.extend(string_index);
    data.extend(global_subrs);
    assert_eq!(data.len(), charset_offset);
    data.extend(charset);
    data.extend(encoding);
    data.extend(char_strings);
    data.extend(private_dict);
    data.extend(local_subrs);
    data
}

/// A CID keyed font with two Font DICTs.
fn build_cid_font() -> Vec<u8> {
    let name_index = index1(&[b"TestCID"]);
    let string_index = index1(&[]);
    let global_subrs = index1(&[]);

    // Format 2 charset: glyphs 1 and 2 are CIDs 1 and 2
    let charset = [0x02, 0x00, 0x01, 0x00, 0x01];

    let glyph0 = [14];
    // Width delta 50, move to (20, 0). Uses Font DICT 0.
    let glyph1 = [int(50), int(20), 22, 14];
    // Move to (0, 30) with no width operand. Uses Font DICT 1.
    let glyph2 = [int(30), 4, 14];
    let char_strings = index1(&[&glyph0, &glyph1, &glyph2]);

    const TOP_DICT_LEN: usize = 27;
    const FONT_DICT_LEN: usize = 7;
    const PRIVATE_DICT_LEN: usize = 4;

    let charset_offset = 4 + name_index.len() + (2 + 1 + 2 + TOP_DICT_LEN) + string_index.len()
        + global_subrs.len();
    let char_strings_offset = charset_offset + charset.len();
    let fd_array_offset = char_strings_offset + char_strings.len();
    let fd_array_len = 2 + 1 + 3 + 2 * FONT_DICT_LEN;
    let private0_offset = fd_array_offset + fd_array_len;
    let private1_offset = private0_offset + PRIVATE_DICT_LEN;
    let fd_select_offset = private1_offset + PRIVATE_DICT_LEN;

    let mut top_dict = Vec::new();
    top_dict.extend(short_int(1)); // registry SID
    top_dict.extend(short_int(2)); // ordering SID
    top_dict.push(int(0)); // supplement
    top_dict.extend([12, 30]); // ROS
    top_dict.extend(short_int(charset_offset));
    top_dict.push(15);
    top_dict.extend(short_int(char_strings_offset));
    top_dict.push(17);
    top_dict.extend(short_int(fd_array_offset));
    top_dict.extend([12, 36]); // FDArray
    top_dict.extend(short_int(fd_select_offset));
    top_dict.extend([12, 37]); // FDSelect
    assert_eq!(top_dict.len(), TOP_DICT_LEN);
    let top_dict_index = index1(&[&top_dict]);

    let mut font_dict0 = Vec::new();
    font_dict0.extend(short_int(PRIVATE_DICT_LEN));
    font_dict0.extend(short_int(private0_offset));
    font_dict0.push(18);
    assert_eq!(font_dict0.len(), FONT_DICT_LEN);
    let mut font_dict1 = Vec::new();
    font_dict1.extend(short_int(PRIVATE_DICT_LEN));
    font_dict1.extend(short_int(private1_offset));
    font_dict1.push(18);
    let fd_array = index1(&[&font_dict0, &font_dict1]);
    assert_eq!(fd_array.len(), fd_array_len);

    let mut private0 = short_int(100).to_vec();
    private0.push(21); // nominalWidthX
    let mut private1 = short_int(77).to_vec();
    private1.push(20); // defaultWidthX

    // Format 3: glyphs 0..=1 use FD 0, glyph 2 uses FD 1
    #[rustfmt::skip]
    let fd_select = [
        0x03,
        0x00, 0x02,
        0x00, 0x00, 0x00,
        0x00, 0x02, 0x01,
        0x00, 0x03,
    ];

    let mut data = vec![0x01, 0x00, 0x04, 0x01];
    data.extend(name_index);
    data.extend(top_dict_index);
    data.extend(string_index);
    data.extend(global_subrs);
    assert_eq!(data.len(), charset_offset);
    data.extend(charset);
    data.extend(char_strings);
    data.extend(fd_array);
    data.extend(private0);
    data.extend(private1);
    data.extend(fd_select);
    data
}

#[test]
fn decode_font() {
    let data = build_font();
    let font_set = FontSet::decode(&data).unwrap();
    assert_eq!(font_set.fonts.len(), 1);

    let font = &font_set.fonts[0];
    assert_eq!(font.name, "Test");
    assert_eq!(font.n_glyphs(), 3);
    assert!(!font.is_cid());
    assert!(matches!(font.charset, Charset::Custom(_)));

    assert_eq!(font_set.glyph_name(0, 0), Ok(Some(".notdef")));
    assert_eq!(font_set.glyph_name(0, 1), Ok(Some("mylig")));
    assert_eq!(font_set.glyph_name(0, 2), Ok(Some("space")));

    assert_eq!(font.glyph_id_for_code(0x41), Some(1));
    assert_eq!(font.glyph_id_for_code(0x42), Some(2));
    assert_eq!(font.glyph_id_for_code(0x43), None);
}

#[test]
fn interpret_glyphs() {
    let data = build_font();
    let font_set = FontSet::decode(&data).unwrap();

    // No width operand, so the default width applies.
    let notdef = font_set.interpret_glyph(0, 0).unwrap();
    assert_eq!(notdef.width, 250.0);
    assert_eq!(notdef.operations, vec![GlyphOp::EndChar]);

    // Width delta 100 over a nominal width of 300.
    let glyph = font_set.interpret_glyph(0, 1).unwrap();
    assert_eq!(glyph.width, 400.0);
    assert_eq!(
        glyph.operations,
        vec![
            GlyphOp::MoveTo { x: 10.0, y: 20.0 },
            GlyphOp::LineTo { x: 40.0, y: 20.0 },
            GlyphOp::EndChar,
        ]
    );
}

#[test]
fn interpret_glyph_with_subroutines() {
    let data = build_font();
    let font_set = FontSet::decode(&data).unwrap();

    let glyph = font_set.interpret_glyph(0, 2).unwrap();
    assert_eq!(glyph.width, 250.0);
    assert_eq!(
        glyph.operations,
        vec![
            GlyphOp::MoveTo { x: 5.0, y: 0.0 },
            GlyphOp::LineTo { x: 12.0, y: 0.0 },
            GlyphOp::EndChar,
        ]
    );
}

#[test]
fn decode_cid_font() {
    let data = build_cid_font();
    let font_set = FontSet::decode(&data).unwrap();

    let font = &font_set.fonts[0];
    assert_eq!(font.name, "TestCID");
    assert!(font.is_cid());
    assert_eq!(font.encoding, None);
    assert_eq!(font.cid.as_ref().unwrap().font_dicts.len(), 2);

    // The charset maps glyphs to CIDs and the glyphs have no names.
    assert_eq!(font.charset.id_for_glyph(2), Some(2));
    assert_eq!(font_set.glyph_name(0, 1), Ok(None));
}

#[test]
fn interpret_cid_glyphs() {
    let data = build_cid_font();
    let font_set = FontSet::decode(&data).unwrap();

    // Glyph 1 resolves widths through Font DICT 0.
    let glyph = font_set.interpret_glyph(0, 1).unwrap();
    assert_eq!(glyph.width, 150.0);
    assert_eq!(
        glyph.operations,
        vec![GlyphOp::MoveTo { x: 20.0, y: 0.0 }, GlyphOp::EndChar]
    );

    // Glyph 2 resolves widths through Font DICT 1.
    let glyph = font_set.interpret_glyph(0, 2).unwrap();
    assert_eq!(glyph.width, 77.0);
    assert_eq!(
        glyph.operations,
        vec![GlyphOp::MoveTo { x: 0.0, y: 30.0 }, GlyphOp::EndChar]
    );
}
