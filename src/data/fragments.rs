// ============================================================
// Layer 4 — Text Fragment Walker
// ============================================================
// Walks the operators of a decoded page content stream and
// records where each run of text is drawn.
//
// Text state tracked (PDF 32000-1 §9.3, §9.4):
//
//   q / Q / cm        graphics state stack and current transform
//   BT / ET           begin / end a text object
//   Tf                font and size
//   Tc Tw Tz TL       char spacing, word spacing, horizontal scale, leading
//   Td TD Tm T*       text positioning
//   Tj TJ ' "         text showing
//
// Strings are decoded and measured by the font selected with Tf
// (see fonts.rs). A string whose font is unknown or cannot be
// decoded is counted, not guessed at; the loader uses that count
// to decide whether the page needs lopdf's own extraction.

use lopdf::content::Operation;
use lopdf::Object;

use crate::data::fonts::{FontTable, PageFont, Spacing};
use crate::data::layout::TextFragment;

/// 2D affine transform [a b c d e f] as used by PDF
#[derive(Debug, Clone, Copy, PartialEq)]
struct Matrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Matrix {
    const IDENTITY: Matrix = Matrix { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    fn translate(tx: f32, ty: f32) -> Self {
        Matrix { e: tx, f: ty, ..Matrix::IDENTITY }
    }

    /// `self × other` (apply self first, then other)
    fn then(&self, o: &Matrix) -> Matrix {
        Matrix {
            a: self.a * o.a + self.b * o.c,
            b: self.a * o.b + self.b * o.d,
            c: self.c * o.a + self.d * o.c,
            d: self.c * o.b + self.d * o.d,
            e: self.e * o.a + self.f * o.c + o.e,
            f: self.e * o.b + self.f * o.d + o.f,
        }
    }

    /// Length of the transformed x unit vector
    fn x_scale(&self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    fn from_operands(ops: &[Object]) -> Option<Matrix> {
        if ops.len() < 6 {
            return None;
        }
        Some(Matrix {
            a: number(&ops[0])?,
            b: number(&ops[1])?,
            c: number(&ops[2])?,
            d: number(&ops[3])?,
            e: number(&ops[4])?,
            f: number(&ops[5])?,
        })
    }
}

/// Text state parameters that survive across text objects
#[derive(Debug, Clone, Copy)]
struct TextState {
    font_size: f32,
    char_spacing: f32,
    word_spacing: f32,
    horizontal_scale: f32,
    leading: f32,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            font_size: 0.0,
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scale: 1.0,
            leading: 0.0,
        }
    }
}

/// What one content stream drew
#[derive(Debug)]
pub struct WalkedPage {
    pub fragments: Vec<TextFragment>,
    /// Strings that could not be turned into text
    pub undecoded: usize,
}

/// Collects positioned text while replaying a content stream
pub struct FragmentWalker<'f> {
    fonts: &'f FontTable<'f>,
    font: Option<&'f PageFont<'f>>,
    undecoded: usize,
    ctm: Matrix,
    ctm_stack: Vec<(Matrix, TextState, Option<&'f PageFont<'f>>)>,
    text_matrix: Matrix,
    line_matrix: Matrix,
    state: TextState,
    fragments: Vec<TextFragment>,
}

impl<'f> FragmentWalker<'f> {
    pub fn new(fonts: &'f FontTable<'f>) -> Self {
        Self {
            fonts,
            font: None,
            undecoded: 0,
            ctm: Matrix::IDENTITY,
            ctm_stack: Vec::new(),
            text_matrix: Matrix::IDENTITY,
            line_matrix: Matrix::IDENTITY,
            state: TextState::default(),
            fragments: Vec::new(),
        }
    }

    /// Replay every operation and return the fragments that were drawn
    pub fn walk(mut self, operations: &[Operation]) -> WalkedPage {
        for op in operations {
            self.apply(op);
        }
        WalkedPage {
            fragments: self.fragments,
            undecoded: self.undecoded,
        }
    }

    fn apply(&mut self, op: &Operation) {
        let ops = &op.operands;
        match op.operator.as_str() {
            "q" => self.ctm_stack.push((self.ctm, self.state, self.font)),
            "Q" => {
                if let Some((ctm, state, font)) = self.ctm_stack.pop() {
                    self.ctm   = ctm;
                    self.state = state;
                    self.font  = font;
                }
            }
            "cm" => {
                if let Some(m) = Matrix::from_operands(ops) {
                    self.ctm = m.then(&self.ctm);
                }
            }
            "BT" => {
                self.text_matrix = Matrix::IDENTITY;
                self.line_matrix = Matrix::IDENTITY;
            }
            "Tf" => {
                let fonts = self.fonts;
                self.font = ops
                    .first()
                    .and_then(|name| name.as_name().ok())
                    .and_then(|name| fonts.get(name));
                if let Some(size) = ops.get(1).and_then(number) {
                    self.state.font_size = size;
                }
            }
            "Tc" => set_from(&mut self.state.char_spacing, ops),
            "Tw" => set_from(&mut self.state.word_spacing, ops),
            "TL" => set_from(&mut self.state.leading, ops),
            "Tz" => {
                if let Some(scale) = ops.first().and_then(number) {
                    self.state.horizontal_scale = scale / 100.0;
                }
            }
            "Td" => {
                if let (Some(tx), Some(ty)) = first_two(ops) {
                    self.move_line(tx, ty);
                }
            }
            "TD" => {
                if let (Some(tx), Some(ty)) = first_two(ops) {
                    self.state.leading = -ty;
                    self.move_line(tx, ty);
                }
            }
            "Tm" => {
                if let Some(m) = Matrix::from_operands(ops) {
                    self.text_matrix = m;
                    self.line_matrix = m;
                }
            }
            "T*" => self.next_line(),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = ops.first() {
                    self.show(bytes);
                }
            }
            "'" => {
                self.next_line();
                if let Some(Object::String(bytes, _)) = ops.first() {
                    self.show(bytes);
                }
            }
            "\"" => {
                set_from(&mut self.state.word_spacing, ops);
                if let Some(ac) = ops.get(1).and_then(number) {
                    self.state.char_spacing = ac;
                }
                self.next_line();
                if let Some(Object::String(bytes, _)) = ops.get(2) {
                    self.show(bytes);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = ops.first() {
                    for item in items {
                        match item {
                            Object::String(bytes, _) => self.show(bytes),
                            other => {
                                if let Some(adjust) = number(other) {
                                    let tx = -adjust / 1000.0
                                        * self.state.font_size
                                        * self.state.horizontal_scale;
                                    self.advance(tx);
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn move_line(&mut self, tx: f32, ty: f32) {
        self.line_matrix = Matrix::translate(tx, ty).then(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    fn next_line(&mut self) {
        let leading = self.state.leading;
        self.move_line(0.0, -leading);
    }

    fn advance(&mut self, tx: f32) {
        self.text_matrix = Matrix::translate(tx, 0.0).then(&self.text_matrix);
    }

    /// Record one string at the current text position and move past it
    fn show(&mut self, bytes: &[u8]) {
        let Some(font) = self.font else {
            self.undecoded += 1;
            return;
        };

        let st = &self.state;
        let tx = font.advance(
            bytes,
            &Spacing {
                font_size: st.font_size,
                char_spacing: st.char_spacing,
                word_spacing: st.word_spacing,
                horizontal_scale: st.horizontal_scale,
            },
        );

        match font.decode(bytes) {
            Some(text) if !text.trim().is_empty() => {
                let trm = self.text_matrix.then(&self.ctm);
                let width = tx * trm.x_scale();
                self.fragments.push(TextFragment::new(trm.e, trm.f, width, text));
            }
            Some(_) => {}
            None => self.undecoded += 1,
        }
        self.advance(tx);
    }
}

/// Integer or real operand as f32
fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

fn first_two(ops: &[Object]) -> (Option<f32>, Option<f32>) {
    (ops.first().and_then(number), ops.get(1).and_then(number))
}

fn set_from(target: &mut f32, ops: &[Object]) {
    if let Some(v) = ops.first().and_then(number) {
        *target = v;
    }
}
