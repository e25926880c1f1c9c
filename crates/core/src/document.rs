//! Learning Plan Document
//!
//! The plan is written through a small [`DocumentBuilder`] abstraction with a
//! handful of layout primitives. [`PdfBuilder`] lays those primitives out on
//! A4 pages with `printpdf`; [`OutlineBuilder`] records them as plain text
//! lines, which is what the CLI preview and structural comparisons use.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use tracing::debug;

use crate::error::DocumentError;
use crate::plan::LearningPlan;

pub const MIME_TYPE: &str = "application/pdf";
pub const KEY_CONCEPTS: &str = "Key Concepts:";
pub const PRACTICE_QUESTIONS: &str = "Practice Questions:";

/// Document title line for a subject.
pub fn document_title(subject: &str) -> String {
    format!("Smart Learning Advisor - {}", subject)
}

/// Layout primitives a document backend must provide.
pub trait DocumentBuilder {
    type Output;

    /// Centered title at the top of the document.
    fn title(&mut self, text: &str);
    /// Bold section heading.
    fn heading(&mut self, text: &str);
    /// Plain label line introducing a list.
    fn label(&mut self, text: &str);
    /// List item; long items wrap onto continuation lines.
    fn item(&mut self, text: &str);
    /// Vertical gap in millimetres.
    fn space(&mut self, height: f32);

    fn finish(self) -> Result<Self::Output, DocumentError>;
}

/// Emits the plan through any builder.
pub fn write_plan<B: DocumentBuilder>(builder: &mut B, plan: &LearningPlan) {
    builder.title(&document_title(&plan.subject));
    builder.space(8.0);
    for entry in &plan.entries {
        builder.heading(&entry.heading());
        builder.label(KEY_CONCEPTS);
        for concept in &entry.concepts {
            builder.item(&format!("- {}", concept));
        }
        builder.label(PRACTICE_QUESTIONS);
        for question in &entry.practice_questions {
            builder.item(&format!("- {}", question));
        }
        builder.space(5.0);
    }
}

/// Renders the plan as PDF bytes.
///
/// A plan with no entries yields a one-page document carrying only the title.
pub fn render_document(plan: &LearningPlan) -> Result<Vec<u8>, DocumentError> {
    let mut builder = PdfBuilder::new(&document_title(&plan.subject))?;
    write_plan(&mut builder, plan);
    let bytes = builder.finish()?;
    debug!(subject = %plan.subject, entries = plan.len(), bytes = bytes.len(), "Rendered PDF");
    Ok(bytes)
}

/// Renders the plan as the text lines the PDF would contain.
pub fn render_outline(plan: &LearningPlan) -> Vec<String> {
    let mut builder = OutlineBuilder::default();
    write_plan(&mut builder, plan);
    builder.lines
}

/// Maps text into the Latin-1 range supported by the builtin PDF fonts.
///
/// Common typographic characters get ASCII stand-ins; anything else outside
/// the range becomes `?`.
pub fn transliterate(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => '"',
            '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
            '\u{2022}' | '\u{2023}' | '\u{2043}' => '-',
            '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' => ' ',
            '\t' => ' ',
            c if (' '..='~').contains(&c) || ('\u{00A1}'..='\u{00FF}').contains(&c) => c,
            _ => '?',
        })
        .collect()
}

/// Splits text into lines of at most `max_chars` characters on word boundaries.
///
/// Continuation lines are indented by two spaces. Words longer than a line are
/// hard-broken.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(8);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for mut word in text.split_whitespace() {
        loop {
            let limit = if lines.is_empty() { max_chars } else { max_chars - 2 };
            let used = current.chars().count();
            let separator = usize::from(used > 0);
            if used + separator + word.chars().count() <= limit {
                if separator == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                break;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            let split = word
                .char_indices()
                .nth(limit)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| if i == 0 { line } else { format!("  {}", line) })
        .collect()
}

/// Records primitives as text lines. Spacing is not recorded.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    lines: Vec<String>,
}

impl DocumentBuilder for OutlineBuilder {
    type Output = Vec<String>;

    fn title(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn heading(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn label(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn item(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn space(&mut self, _height: f32) {}

    fn finish(self) -> Result<Vec<String>, DocumentError> {
        Ok(self.lines)
    }
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;
const LAYER_NAME: &str = "Layer 1";

#[derive(Clone, Copy)]
struct LineStyle {
    size: f32,
    height: f32,
    bold: bool,
}

const TITLE: LineStyle = LineStyle { size: 16.0, height: 10.0, bold: true };
const HEADING: LineStyle = LineStyle { size: 14.0, height: 10.0, bold: true };
const LABEL: LineStyle = LineStyle { size: 12.0, height: 8.0, bold: false };
const ITEM: LineStyle = LineStyle { size: 12.0, height: 6.0, bold: false };

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM
}

/// Lays primitives out on A4 pages, starting a new page whenever the next
/// line would cross the bottom margin.
pub struct PdfBuilder {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    cursor: f32,
    pages: usize,
}

impl PdfBuilder {
    pub fn new(title: &str) -> Result<Self, DocumentError> {
        let (doc, page, layer) = PdfDocument::new(
            transliterate(title),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            LAYER_NAME,
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentError::Backend(format!("{:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DocumentError::Backend(format!("{:?}", e)))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    fn ensure_room(&mut self, height: f32) {
        if self.cursor - height < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor = PAGE_HEIGHT - MARGIN;
            self.pages += 1;
        }
    }

    fn line(&mut self, text: &str, style: LineStyle, centered: bool) {
        self.ensure_room(style.height);
        let text = transliterate(text);
        let x = if centered {
            ((PAGE_WIDTH - text_width(&text, style.size)) / 2.0).max(MARGIN)
        } else {
            MARGIN
        };
        // Baseline sits a little below the middle of the cell.
        let baseline = self.cursor - style.height * 0.7;
        let font = if style.bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, style.size, Mm(x), Mm(baseline), font);
        self.cursor -= style.height;
    }
}

impl DocumentBuilder for PdfBuilder {
    type Output = Vec<u8>;

    fn title(&mut self, text: &str) {
        self.line(text, TITLE, true);
    }

    fn heading(&mut self, text: &str) {
        self.line(text, HEADING, false);
    }

    fn label(&mut self, text: &str) {
        self.line(text, LABEL, false);
    }

    fn item(&mut self, text: &str) {
        let usable = PAGE_WIDTH - 2.0 * MARGIN;
        let max_chars = (usable / (ITEM.size * AVG_GLYPH_WIDTH * PT_TO_MM)) as usize;
        for line in wrap(text, max_chars) {
            self.line(&line, ITEM, false);
        }
    }

    fn space(&mut self, height: f32) {
        self.cursor -= height;
    }

    fn finish(self) -> Result<Vec<u8>, DocumentError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| DocumentError::Backend(format!("{:?}", e)))
    }
}
