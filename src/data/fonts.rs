// ============================================================
// Layer 4 — Page Fonts
// ============================================================
// What the fragment walker needs to know about each font a page
// uses, looked up by resource name (the operand of Tf):
//
//   decode   string bytes → text, through the font's encoding
//            (WinAnsi, Standard, ...) or its ToUnicode CMap
//   advance  how far a string moves the pen, from real widths
//
// Widths, in thousandths of an em (PDF 32000-1 §9.6.2, §9.7.4.3):
//
//   simple font   /FirstChar + /Widths, /MissingWidth otherwise
//   Type0 font    /DW + /W of the descendant CIDFont
//   base-14 font  without /Widths: the standard AFM metrics
//
// Type0 fonts are read two bytes per code (Identity-H/V).
//
// Reference: lopdf crate documentation (get_page_fonts, decode_text)

use anyhow::{Context, Result};
use lopdf::{Dictionary, Document, Encoding, Object, ObjectId};
use std::collections::BTreeMap;

/// Helvetica advance widths for codes 32..=126
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Courier is monospaced
const COURIER_WIDTH: f32 = 600.0;

/// CIDFont /DW when absent
const DEFAULT_CID_WIDTH: f32 = 1000.0;

/// Text state that changes how far a string advances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub font_size: f32,
    pub char_spacing: f32,
    pub word_spacing: f32,
    pub horizontal_scale: f32,
}

#[derive(Debug)]
enum GlyphWidths {
    Simple { first_char: u32, widths: Vec<f32>, missing: f32 },
    Helvetica,
    Courier,
    Cid { default: f32, widths: BTreeMap<u32, f32> },
}

impl GlyphWidths {
    fn width(&self, code: u32) -> f32 {
        match self {
            GlyphWidths::Simple { first_char, widths, missing } => code
                .checked_sub(*first_char)
                .and_then(|i| widths.get(i as usize))
                .copied()
                .unwrap_or(*missing),
            GlyphWidths::Helvetica => code
                .checked_sub(32)
                .and_then(|i| HELVETICA_WIDTHS.get(i as usize))
                .map(|&w| w as f32)
                .unwrap_or(556.0),
            GlyphWidths::Courier => COURIER_WIDTH,
            GlyphWidths::Cid { default, widths } => widths.get(&code).copied().unwrap_or(*default),
        }
    }

    /// Metrics for a base-14 font named by /BaseFont
    fn standard(base_font: &str) -> Self {
        if base_font.contains("Courier") {
            GlyphWidths::Courier
        } else {
            GlyphWidths::Helvetica
        }
    }
}

/// One font resource of a page
#[derive(Debug)]
pub struct PageFont<'a> {
    encoding: Option<Encoding<'a>>,
    widths: GlyphWidths,
    two_byte: bool,
}

impl<'a> PageFont<'a> {
    /// Read a font dictionary. Never fails: a font whose encoding
    /// cannot be worked out still has widths, it just cannot decode.
    pub fn from_dict(font: &'a Dictionary, doc: &'a Document) -> Self {
        let two_byte = font.get(b"Subtype").and_then(Object::as_name_str).ok() == Some("Type0");

        let encoding = if font.type_is(b"Font") {
            match font.get_font_encoding(doc) {
                Ok(enc) => Some(enc),
                Err(e) => {
                    tracing::debug!("Font without a usable encoding: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let widths = if two_byte {
            cid_widths(font, doc)
        } else {
            simple_widths(font, doc)
        };

        Self { encoding, widths, two_byte }
    }

    /// Character codes of a string operand
    fn codes<'b>(&self, bytes: &'b [u8]) -> Box<dyn Iterator<Item = u32> + 'b> {
        if self.two_byte {
            Box::new(bytes.chunks_exact(2).map(|c| u32::from(c[0]) << 8 | u32::from(c[1])))
        } else {
            Box::new(bytes.iter().map(|&b| u32::from(b)))
        }
    }

    /// Text of a string operand, or None if this font cannot be decoded
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        let encoding = self.encoding.as_ref()?;
        Document::decode_text(encoding, bytes).ok()
    }

    /// Horizontal displacement of a string operand in text space
    pub fn advance(&self, bytes: &[u8], sp: &Spacing) -> f32 {
        self.codes(bytes)
            .map(|code| {
                let glyph = self.widths.width(code) / 1000.0 * sp.font_size;
                // Word spacing applies to the single-byte space only
                let word = if !self.two_byte && code == 32 { sp.word_spacing } else { 0.0 };
                (glyph + sp.char_spacing + word) * sp.horizontal_scale
            })
            .sum()
    }
}

/// Fonts of one page by resource name
#[derive(Debug, Default)]
pub struct FontTable<'a> {
    fonts: BTreeMap<Vec<u8>, PageFont<'a>>,
}

impl<'a> FontTable<'a> {
    pub fn new() -> Self {
        Self { fonts: BTreeMap::new() }
    }

    /// Every font reachable from the page's (possibly inherited) resources
    pub fn for_page(doc: &'a Document, page_id: ObjectId) -> Result<Self> {
        let mut table = Self::new();
        for (name, dict) in doc.get_page_fonts(page_id).context("Cannot read page fonts")? {
            table.insert(name, PageFont::from_dict(dict, doc));
        }
        Ok(table)
    }

    pub fn insert(&mut self, name: impl Into<Vec<u8>>, font: PageFont<'a>) {
        self.fonts.insert(name.into(), font);
    }

    pub fn get(&self, name: &[u8]) -> Option<&PageFont<'a>> {
        self.fonts.get(name)
    }
}

/// Integer or real as f32, following one reference
fn number(obj: &Object, doc: &Document) -> Option<f32> {
    match doc.dereference(obj).ok()?.1 {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

fn simple_widths(font: &Dictionary, doc: &Document) -> GlyphWidths {
    let widths = font
        .get_deref(b"Widths", doc)
        .and_then(Object::as_array)
        .ok()
        .map(|arr| arr.iter().map(|w| number(w, doc).unwrap_or(0.0)).collect::<Vec<_>>());

    match widths {
        Some(widths) => {
            let first_char = font
                .get(b"FirstChar")
                .and_then(Object::as_i64)
                .ok()
                .and_then(|c| u32::try_from(c).ok())
                .unwrap_or(0);
            let missing = font
                .get_deref(b"FontDescriptor", doc)
                .and_then(Object::as_dict)
                .ok()
                .and_then(|fd| fd.get(b"MissingWidth").ok())
                .and_then(|w| number(w, doc))
                .unwrap_or(0.0);
            GlyphWidths::Simple { first_char, widths, missing }
        }
        None => {
            let base = font.get(b"BaseFont").and_then(Object::as_name_str).unwrap_or("");
            GlyphWidths::standard(base)
        }
    }
}

fn cid_widths(font: &Dictionary, doc: &Document) -> GlyphWidths {
    let descendant = font
        .get_deref(b"DescendantFonts", doc)
        .and_then(Object::as_array)
        .ok()
        .and_then(|fonts| fonts.first())
        .and_then(|f| doc.dereference(f).ok())
        .and_then(|(_, f)| f.as_dict().ok());

    let Some(descendant) = descendant else {
        return GlyphWidths::Cid { default: DEFAULT_CID_WIDTH, widths: BTreeMap::new() };
    };

    let default = descendant
        .get(b"DW")
        .ok()
        .and_then(|w| number(w, doc))
        .unwrap_or(DEFAULT_CID_WIDTH);

    let widths = descendant
        .get_deref(b"W", doc)
        .and_then(Object::as_array)
        .map(|w| parse_w_array(w, doc))
        .unwrap_or_default();

    GlyphWidths::Cid { default, widths }
}

/// The /W array mixes two forms:
///   c [w1 w2 ...]      consecutive codes from c
///   c_first c_last w   one width for a range
fn parse_w_array(items: &[Object], doc: &Document) -> BTreeMap<u32, f32> {
    let mut widths = BTreeMap::new();
    let mut i = 0;
    while i < items.len() {
        let Some(first) = number(&items[i], doc).map(|c| c as u32) else {
            break;
        };
        let next = items.get(i + 1).and_then(|o| doc.dereference(o).ok()).map(|(_, o)| o);
        match next {
            Some(Object::Array(list)) => {
                for (k, w) in list.iter().enumerate() {
                    if let Some(w) = number(w, doc) {
                        widths.insert(first + k as u32, w);
                    }
                }
                i += 2;
            }
            Some(last) => {
                let (Some(last), Some(w)) = (
                    number(last, doc).map(|c| c as u32),
                    items.get(i + 2).and_then(|w| number(w, doc)),
                ) else {
                    break;
                };
                // A malformed range must not allocate the whole code space
                if last >= first && last - first <= u32::from(u16::MAX) {
                    for code in first..=last {
                        widths.insert(code, w);
                    }
                }
                i += 3;
            }
            None => break,
        }
    }
    widths
}
