//! Career plan PDF writer.
//!
//! Pages are US letter. Text is laid out top-down with a moving baseline; when the
//! baseline drops below the bottom margin a fresh page starts at the top.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::advisor::insights::{display_number, Insights};
use crate::report::font_metrics::BaseFont;
use crate::report::ReportError;

pub const PAGE_WIDTH: i64 = 612;
pub const PAGE_HEIGHT: i64 = 792;

const MARGIN_LEFT: i64 = 40;
const ITEM_INDENT: i64 = 60;
const CONTINUATION_INDENT: i64 = 70;
const RIGHT_EDGE: i64 = PAGE_WIDTH - MARGIN_LEFT;
const TOP_Y: i64 = 750;
const BOTTOM_Y: i64 = 80;

const TITLE_SIZE: i64 = 16;
const HEADER_SIZE: i64 = 13;
const BODY_SIZE: i64 = 12;

const BODY_LEADING: i64 = 20;
const HEADER_GAP: i64 = 18;
const ITEM_LEADING: i64 = 16;
const SECTION_GAP: i64 = 10;

/// Accumulates content-stream operations page by page.
struct PageWriter {
    pages: Vec<Vec<Operation>>,
    y: i64,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: TOP_Y,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.y = TOP_Y;
    }

    fn draw(&mut self, font: BaseFont, size: i64, x: i64, text: &str) {
        let ops = [
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(font.resource_name().as_bytes().to_vec()),
                    Object::Integer(size),
                ],
            ),
            Operation::new("Td", vec![Object::Integer(x), Object::Integer(self.y)]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ];
        // pages is never empty: constructed with one page, only ever pushed to
        if let Some(page) = self.pages.last_mut() {
            page.extend(ops);
        }
    }

    /// Draws a body line and moves the baseline down by `leading`.
    fn line(&mut self, font: BaseFont, size: i64, x: i64, text: &str, leading: i64) {
        self.draw(font, size, x, text);
        self.advance(leading);
    }

    fn advance(&mut self, by: i64) {
        self.y -= by;
        if self.y < BOTTOM_Y {
            self.new_page();
        }
    }

    fn section<I, S>(&mut self, title: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line(BaseFont::HelveticaBold, HEADER_SIZE, MARGIN_LEFT, title, HEADER_GAP);

        for item in items {
            for (x, wrapped) in item_lines(&format!("- {}", item.as_ref())) {
                self.line(BaseFont::Helvetica, BODY_SIZE, x, &wrapped, ITEM_LEADING);
            }
        }
        self.advance(SECTION_GAP);
    }
}

/// Wraps one bullet item into `(x, text)` lines. The first line starts at the item
/// indent; continuation lines are indented further and wrapped to the narrower
/// column so every line ends at or before the right edge.
fn item_lines(bullet: &str) -> Vec<(i64, String)> {
    let metrics = BaseFont::Helvetica.metrics();
    let size = BODY_SIZE as f32;

    let mut first = metrics.wrap(bullet, size, (RIGHT_EDGE - ITEM_INDENT) as f32);
    if first.len() <= 1 {
        return first.into_iter().map(|line| (ITEM_INDENT, line)).collect();
    }
    let rest = first.split_off(1).join(" ");

    first
        .into_iter()
        .map(|line| (ITEM_INDENT, line))
        .chain(
            metrics
                .wrap(&rest, size, (RIGHT_EDGE - CONTINUATION_INDENT) as f32)
                .into_iter()
                .map(|line| (CONTINUATION_INDENT, line)),
        )
        .collect()
}

/// Renders the career plan for one student and returns the PDF bytes.
pub fn render_career_plan(insights: &Insights) -> Result<Vec<u8>, ReportError> {
    let pages = layout(insights);
    debug!(
        "Rendering career plan for {} ({} pages)",
        insights.student_id,
        pages.len()
    );
    assemble(
        pages,
        &format!("Career Plan - {}", display_name(&insights.name)),
    )
}

/// Content-stream operations for each page of the plan.
fn layout(insights: &Insights) -> Vec<Vec<Operation>> {
    let mut writer = PageWriter::new();
    let name = display_name(&insights.name);

    writer.line(
        BaseFont::HelveticaBold,
        TITLE_SIZE,
        MARGIN_LEFT,
        &format!("Career Plan — {name} (ID: {})", insights.student_id),
        30,
    );
    writer.line(
        BaseFont::Helvetica,
        BODY_SIZE,
        MARGIN_LEFT,
        &format!("GPA: {}", display_number(insights.gpa)),
        BODY_LEADING,
    );
    writer.line(
        BaseFont::Helvetica,
        BODY_SIZE,
        MARGIN_LEFT,
        &format!(
            "10th Marks: {}, 12th Marks: {}",
            display_number(insights.marks.tenth),
            display_number(insights.marks.twelfth)
        ),
        BODY_LEADING,
    );
    if !insights.domain.is_empty() {
        writer.line(
            BaseFont::Helvetica,
            BODY_SIZE,
            MARGIN_LEFT,
            &format!("Domain: {}", insights.domain),
            BODY_LEADING,
        );
    }
    writer.line(
        BaseFont::Helvetica,
        BODY_SIZE,
        MARGIN_LEFT,
        &format!(
            "Performance: {} ({}/100)",
            insights.performance.level, insights.performance.score
        ),
        30,
    );

    writer.section(
        "Career Suggestions:",
        insights
            .career_suggestions
            .iter()
            .map(|c| format!("{} ({}%)", c.career, c.weight)),
    );
    writer.section("Certifications:", &insights.certifications);
    writer.section("Internships / Experience:", &insights.internships);
    if !insights.radar.gaps.is_empty() {
        writer.section("Skills to Build:", &insights.radar.gaps);
    }
    writer.section(
        "Roadmap:",
        insights
            .roadmap
            .iter()
            .map(|r| format!("{}: {}", r.step, r.desc)),
    );

    let mut pages = writer.pages;
    // A trailing page break can leave an empty page behind.
    if pages.len() > 1 && pages.last().is_some_and(Vec::is_empty) {
        pages.pop();
    }
    pages
}

fn assemble(pages: Vec<Vec<Operation>>, title: &str) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_ids: Vec<(BaseFont, ObjectId)> = [BaseFont::Helvetica, BaseFont::HelveticaBold]
        .into_iter()
        .map(|font| {
            let id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            (font, id)
        })
        .collect();

    let mut fonts = lopdf::Dictionary::new();
    for (font, id) in &font_ids {
        fonts.set(font.resource_name(), Object::Reference(*id));
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH),
                Object::Integer(PAGE_HEIGHT),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
        "Producer" => Object::string_literal("elix"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn display_name(name: &str) -> &str {
    match name.trim() {
        "" => "Student",
        trimmed => trimmed,
    }
}

/// Download filename. Whitespace, control characters, quotes and backslashes
/// become underscores; other non-ASCII letters are kept.
pub fn plan_filename(name: &str) -> String {
    let stem: String = display_name(name)
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{stem}_career_plan.pdf")
}

// RFC 5987 attr-char: everything else in `filename*` is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// `Content-Disposition` value for a download. The quoted `filename` is an ASCII
/// fallback; `filename*` carries the exact UTF-8 name.
pub fn attachment_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        utf8_percent_encode(filename, ATTR_CHAR)
    )
}

/// Encodes text for a WinAnsiEncoding base font. Unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
