//! Standard-14 Times-Roman advance widths and WinAnsi text encoding.
//!
//! Widths come from the Times-Roman AFM, indexed by WinAnsi code. The
//! mapping is total: characters without a WinAnsi slot measure and encode
//! as `?`, so measurement can never fail mid-layout.

/// Advance widths in 1/1000 em for WinAnsi codes `0x20..=0xFF`.
const WIDTHS: [u16; 224] = [
    // 0x20..0x2F: space ! " # $ % & ' ( ) * + , - . /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 0x30..0x3F: digits and : ; < = > ?
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    // 0x40..0x4F: @ A-O
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    // 0x50..0x5F: P-Z [ \ ] ^ _
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    // 0x60..0x6F: ` a-o
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    // 0x70..0x7F: p-z { | } ~ (0x7F unused)
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, 500,
    // 0x80..0x8F: Euro, CP1252 punctuation, Scaron, OE, Zcaron
    500, 500, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889, 500, 611, 500,
    // 0x90..0x9F: curly quotes, bullet, dashes, trademark, scaron, oe, zcaron, Ydieresis
    500, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722, 500, 444, 722,
    // 0xA0..0xAF
    250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
    // 0xB0..0xBF
    400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
    // 0xC0..0xCF: A-grave..I-dieresis
    722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    // 0xD0..0xDF: Eth..germandbls
    722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
    // 0xE0..0xEF: a-grave..i-dieresis
    444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    // 0xF0..0xFF: eth..y-dieresis
    500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
];

/// WinAnsi code for `ch`, when one exists.
pub(crate) fn winansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E => Some(code as u8),
        0xA0..=0xFF => Some(code as u8),
        _ => match ch {
            '\u{20AC}' => Some(0x80), // euro
            '\u{201A}' => Some(0x82),
            '\u{0192}' => Some(0x83),
            '\u{201E}' => Some(0x84),
            '\u{2026}' => Some(0x85),
            '\u{2020}' => Some(0x86),
            '\u{2021}' => Some(0x87),
            '\u{02C6}' => Some(0x88),
            '\u{2030}' => Some(0x89),
            '\u{0160}' => Some(0x8A),
            '\u{2039}' => Some(0x8B),
            '\u{0152}' => Some(0x8C),
            '\u{017D}' => Some(0x8E),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201C}' => Some(0x93),
            '\u{201D}' => Some(0x94),
            '\u{2022}' => Some(0x95),
            '\u{2013}' => Some(0x96), // en dash, used by the clause headings
            '\u{2014}' => Some(0x97),
            '\u{02DC}' => Some(0x98),
            '\u{2122}' => Some(0x99),
            '\u{0161}' => Some(0x9A),
            '\u{203A}' => Some(0x9B),
            '\u{0153}' => Some(0x9C),
            '\u{017E}' => Some(0x9E),
            '\u{0178}' => Some(0x9F),
            _ => None,
        },
    }
}

/// Advance width of `ch` in 1/1000 em units.
pub(crate) fn advance_milli(ch: char) -> u32 {
    let byte = winansi_byte(ch).unwrap_or(b'?');
    let index = usize::from(byte).saturating_sub(0x20);
    u32::from(WIDTHS.get(index).copied().unwrap_or(500))
}

/// Encode `text` as WinAnsi bytes; unmapped characters become `?`.
pub(crate) fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| winansi_byte(ch).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode_winansi("Data: 01/01"), b"Data: 01/01".to_vec());
    }

    #[test]
    fn latin1_and_cp1252_punctuation_map() {
        assert_eq!(winansi_byte('Á'), Some(0xC1));
        assert_eq!(winansi_byte('ª'), Some(0xAA));
        assert_eq!(winansi_byte('ç'), Some(0xE7));
        assert_eq!(winansi_byte('–'), Some(0x96));
        assert_eq!(winansi_byte('\u{2192}'), None);
        assert_eq!(encode_winansi("a\u{2192}b"), vec![b'a', b'?', b'b']);
    }

    #[test]
    fn accented_letters_share_base_widths() {
        assert_eq!(advance_milli('Á'), advance_milli('A'));
        assert_eq!(advance_milli('é'), advance_milli('e'));
        assert_eq!(advance_milli('0'), 500);
        assert_eq!(advance_milli(' '), 250);
        // Unmapped characters take the `?` width.
        assert_eq!(advance_milli('\u{2192}'), advance_milli('?'));
    }
}
