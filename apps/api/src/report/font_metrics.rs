//! Static glyph-width tables for the two PDF base fonts the career plan uses.
//!
//! Widths are AFM advance widths in 1/1000 em, covering ASCII 0x20..=0x7E.
//! Index = (char as usize) - 32. Anything else measures as `average_char_width`.

/// The Type1 base fonts used in generated reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseFont {
    Helvetica,
    HelveticaBold,
}

impl BaseFont {
    /// PostScript name written into the font dictionary.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            BaseFont::Helvetica => "Helvetica",
            BaseFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name the content stream refers to.
    pub fn resource_name(&self) -> &'static str {
        match self {
            BaseFont::Helvetica => "F1",
            BaseFont::HelveticaBold => "F2",
        }
    }

    pub fn metrics(&self) -> &'static FontMetricTable {
        match self {
            BaseFont::Helvetica => &HELVETICA_TABLE,
            BaseFont::HelveticaBold => &HELVETICA_BOLD_TABLE,
        }
    }
}

pub struct FontMetricTable {
    widths: [u16; 95],
    average_char_width: u16,
}

impl FontMetricTable {
    /// Width of `s` in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    u32::from(self.widths[code - 32])
                } else {
                    u32::from(self.average_char_width)
                }
            })
            .sum();
        units as f32 * size_pt / 1000.0
    }

    /// Greedy word-wrap at `max_width_pt`. A single word wider than the line is
    /// kept whole on its own line. Blank input yields no lines.
    pub fn wrap(&self, text: &str, size_pt: f32, max_width_pt: f32) -> Vec<String> {
        let space_w = self.measure_str(" ", size_pt);
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_w = self.measure_str(word, size_pt);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width_pt {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    average_char_width: 611,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_known_widths() {
        let m = BaseFont::Helvetica.metrics();
        // "Hi" = 722 + 222 = 944 units → 11.328pt at 12pt
        assert!((m.measure_str("Hi", 12.0) - 11.328).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider() {
        let text = "Career Suggestions";
        assert!(
            BaseFont::HelveticaBold.metrics().measure_str(text, 12.0)
                > BaseFont::Helvetica.metrics().measure_str(text, 12.0)
        );
    }

    #[test]
    fn test_non_ascii_uses_average() {
        let m = BaseFont::Helvetica.metrics();
        assert!((m.measure_str("é", 10.0) - 5.56).abs() < 1e-3);
    }

    #[test]
    fn test_short_text_single_line() {
        let lines = BaseFont::Helvetica.metrics().wrap("- Data Analyst", 12.0, 512.0);
        assert_eq!(lines, vec!["- Data Analyst"]);
    }

    #[test]
    fn test_long_text_wraps_within_width() {
        let m = BaseFont::Helvetica.metrics();
        let text = "Work on convolutional networks and natural language processing projects, \
                    publish the notebooks, and present the results at the department showcase";
        let lines = m.wrap(text, 12.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(m.measure_str(line, 12.0) <= 200.0, "overflow: {line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_oversized_word_kept_whole() {
        let lines = BaseFont::Helvetica.metrics().wrap("Supercalifragilistic", 12.0, 20.0);
        assert_eq!(lines, vec!["Supercalifragilistic"]);
    }

    #[test]
    fn test_blank_input_no_lines() {
        assert!(BaseFont::Helvetica.metrics().wrap("   ", 12.0, 100.0).is_empty());
    }
}
