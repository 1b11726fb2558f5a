//! Typst backend: transpiles a rendered surface to Typst markup and compiles it
//! to PDF with typst-as-lib.
//!
//! Structure follows the surface's elements (headings, lists, rows, column grids)
//! and styling follows their classes through `style::Style`: colours, weights,
//! sizes, case, borders and backgrounds. Output is vector, so it is at least as
//! sharp as the requested raster scale.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use typst_as_lib::TypstEngine;

use crate::export::style::{rgb, pt, Style, SANS_FONTS, SERIF_FONTS};
use crate::export::{DocumentExporter, ExportError, ExportOptions, Orientation};
use crate::models::resume::Template;
use crate::render::surface::{Element, Node, Surface, Tag};

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];
/// Gap used when a row or grid names none.
const STEP_GAP: f32 = 6.0;

pub struct TypstExporter {
    fonts: Arc<Vec<Vec<u8>>>,
}

impl TypstExporter {
    pub fn new(fonts: Vec<Vec<u8>>) -> Self {
        Self {
            fonts: Arc::new(fonts),
        }
    }

    /// Loads every font file directly inside `dir`. A missing directory yields an
    /// exporter without fonts; text then falls back to whatever Typst can find.
    pub fn from_font_dir(dir: &Path) -> anyhow::Result<Self> {
        if !dir.is_dir() {
            warn!("Font directory {} not found; exporting without fonts", dir.display());
            return Ok(Self::new(Vec::new()));
        }

        let mut fonts = Vec::new();
        for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
            let path = entry?.path();
            let is_font = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| FONT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
            if is_font {
                fonts.push(
                    std::fs::read(&path)
                        .with_context(|| format!("Failed to read font {}", path.display()))?,
                );
            }
        }

        info!("Loaded {} font file(s) from {}", fonts.len(), dir.display());
        Ok(Self::new(fonts))
    }
}

#[async_trait]
impl DocumentExporter for TypstExporter {
    async fn export(&self, surface: &Surface, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
        let markup = transpile(surface, options);
        debug!(
            "Compiling {} markup ({} bytes) at scale {}",
            surface.template.as_str(),
            markup.len(),
            options.scale
        );

        // Compilation is CPU-bound
        let fonts = Arc::clone(&self.fonts);
        tokio::task::spawn_blocking(move || compile(&markup, &fonts))
            .await
            .map_err(|e| ExportError::Worker(e.to_string()))?
    }
}

/// Compiles Typst markup to PDF bytes with the given font files available.
pub fn compile(markup: &str, fonts: &[Vec<u8>]) -> Result<Vec<u8>, ExportError> {
    let mut builder = TypstEngine::builder().main_file(markup.to_string());
    for font in fonts {
        builder = builder.fonts([font.clone()]);
    }
    let engine = builder.build();

    let compiled = engine.compile();
    let document = compiled
        .output
        .map_err(|e| ExportError::Compilation(format!("{:?}", e)))?;

    let options = typst_pdf::PdfOptions::default();
    let pdf_bytes = typst_pdf::pdf(&document, &options)
        .map_err(|e| ExportError::Compilation(format!("PDF generation failed: {:?}", e)))?;

    Ok(pdf_bytes.into())
}

/// Builds the Typst source for a surface.
pub fn transpile(surface: &Surface, options: &ExportOptions) -> String {
    let root = &surface.root;
    let root_style = Style::parse(root.class);

    let mut out = String::new();
    out.push_str(&format!(
        "#set page(paper: \"{}\", flipped: {}, margin: 1.5cm)\n",
        options.page.typst_name(),
        options.orientation == Orientation::Landscape
    ));
    out.push_str(&format!(
        "#set text(font: {}, size: 12pt, fill: {})\n#set par(justify: false)\n\n",
        font_stack(surface.template),
        rgb(root_style.fill.unwrap_or("#0f172a"))
    ));

    // The root only carries page-level styling, handled above.
    out.push_str(&block_body(root, &root_style));
    out.push('\n');
    out
}

fn font_stack(template: Template) -> &'static str {
    match template {
        Template::Modern | Template::Classic | Template::Executive => SERIF_FONTS,
        Template::Minimal | Template::Creative => SANS_FONTS,
    }
}

/// Elements that flow inside a line rather than starting a block.
fn is_inline(element: &Element) -> bool {
    matches!(element.tag, Tag::Span | Tag::Br) || element.children.is_empty()
}

/// True when every child is text or an inline element.
fn is_leaf(element: &Element) -> bool {
    element.children.iter().all(|c| match c {
        Node::Text(_) => true,
        Node::Element(e) => is_inline(e) && is_leaf(e),
    })
}

fn node_fragment(node: &Node) -> String {
    match node {
        Node::Text(t) => text_literal(t),
        Node::Element(e) => element_fragment(e),
    }
}

/// Typst markup for one element, or an empty string when it prints nothing.
fn element_fragment(element: &Element) -> String {
    let style = Style::parse(element.class);
    if style.absolute {
        return String::new();
    }
    if element.tag == Tag::Br {
        return "#linebreak()".to_string();
    }
    if element.children.is_empty() {
        return decoration(&style);
    }

    let body = block_body(element, &style);
    if body.trim().is_empty() {
        return String::new();
    }

    let mut markup = body;
    if style.upper {
        markup = format!("#upper[{markup}]");
    }
    if let Some(args) = style.text_args() {
        markup = format!("#text({args})[{markup}]");
    }
    markup = match element.tag {
        Tag::H1 => format!("#heading(level: 1, outlined: false)[{markup}]"),
        Tag::H2 => format!("#heading(level: 2, outlined: false)[{markup}]"),
        Tag::H3 => format!("#heading(level: 3, outlined: false)[{markup}]"),
        _ => markup,
    };
    if style.has_box() {
        markup = if element.tag == Tag::Span {
            format!("#box({}, inset: (x: 3pt, y: 1.5pt), radius: 2pt)[{markup}]", style_fill_only(&style))
        } else {
            format!("#block({})[{markup}]", style.box_args())
        };
    }
    if let Some(align) = style.align {
        markup = format!("#align({align})[{markup}]");
    }
    markup
}

/// `fill:` argument of an inline pill.
fn style_fill_only(style: &Style) -> String {
    style
        .background
        .map(|bg| format!("fill: {}", rgb(bg)))
        .unwrap_or_else(|| "fill: none".to_string())
}

/// Childless elements print only as coloured bars or dots.
fn decoration(style: &Style) -> String {
    let Some(bg) = style.background else {
        return String::new();
    };
    let height = style.height.map(pt).unwrap_or_else(|| "2pt".to_string());
    let width = if style.full_width {
        "100%".to_string()
    } else {
        style.width.map(pt).unwrap_or_else(|| height.clone())
    };
    let radius = if style.rounded_full { ", radius: 50%" } else { "" };
    format!("#box(width: {width}, height: {height}, fill: {}{radius})", rgb(bg))
}

/// The content of an element without its own wrappers.
fn block_body(element: &Element, style: &Style) -> String {
    if element.tag == Tag::Ul {
        return list_body(element, style);
    }
    if style.grid_columns.is_some() || (style.flex && style.justify_between) {
        return grid_body(element, style);
    }
    if is_leaf(element) {
        return join_inline(element.children.iter().map(node_fragment).collect());
    }

    let parts: Vec<String> = element
        .children
        .iter()
        .map(node_fragment)
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    let body = parts.join("\n\n");
    match style.space_y {
        // Set rules stay scoped to the wrapping block.
        Some(gap) => format!(
            "#block(width: 100%)[#set block(spacing: {0})\n#set par(spacing: {0})\n{body}]",
            pt(gap)
        ),
        None => body,
    }
}

/// Bulleted items: one per line, or run together when the list wraps like a row.
fn list_body(element: &Element, style: &Style) -> String {
    let items: Vec<String> = element
        .children
        .iter()
        .map(node_fragment)
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        return String::new();
    }
    if style.grid_columns.is_some() {
        return grid_body(element, style);
    }
    if style.flex {
        let gap = pt(style.column_gap.unwrap_or(STEP_GAP));
        let bullet = if style.list_disc { "• " } else { "" };
        return items
            .iter()
            .map(|item| format!("{bullet}{item}"))
            .collect::<Vec<_>>()
            .join(&format!(" #h({gap}) "));
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Children laid out as grid cells. Column widths follow `col-span-*` when the
/// children carry it, a row of equal columns for `grid-cols-*`, and one
/// stretching column followed by fitted ones for `justify-between` rows.
fn grid_body(element: &Element, style: &Style) -> String {
    let cells: Vec<(Option<u32>, String)> = element
        .children
        .iter()
        .filter_map(|child| {
            let span = match child {
                Node::Element(e) => Style::parse(e.class).col_span,
                Node::Text(_) => None,
            };
            let fragment = node_fragment(child);
            (!fragment.is_empty()).then_some((span, fragment))
        })
        .collect();
    if cells.is_empty() {
        return String::new();
    }

    let columns: Vec<String> = if cells.iter().any(|(span, _)| span.is_some()) {
        cells
            .iter()
            .map(|(span, _)| format!("{}fr", span.unwrap_or(1)))
            .collect()
    } else if let Some(n) = style.grid_columns {
        (0..n.min(cells.len() as u32).max(1)).map(|_| "1fr".to_string()).collect()
    } else {
        std::iter::once("1fr".to_string())
            .chain((1..cells.len()).map(|_| "auto".to_string()))
            .collect()
    };
    let columns = if columns.len() == 1 {
        format!("({},)", columns[0])
    } else {
        format!("({})", columns.join(", "))
    };

    let column_gap = pt(style.column_gap.unwrap_or(STEP_GAP));
    let row_gap = pt(style.row_gap.unwrap_or(STEP_GAP));
    let cells: Vec<String> = cells.into_iter().map(|(_, c)| format!("[{c}]")).collect();
    format!(
        "#grid(columns: {columns}, column-gutter: {column_gap}, row-gutter: {row_gap}, {})",
        cells.join(", ")
    )
}

/// Joins inline parts; separate runs are spaced apart, line breaks are not.
fn join_inline(parts: Vec<String>) -> String {
    let mut out = String::new();
    let mut prev_break = true;
    for part in parts.into_iter().filter(|p| !p.is_empty()) {
        let is_break = part == "#linebreak()";
        if !out.is_empty() {
            out.push_str(if prev_break || is_break { " " } else { " #h(1em) " });
        }
        out.push_str(&part);
        prev_break = is_break;
    }
    out
}

/// Emits text as Typst string literals so no character is read as markup.
/// Line breaks inside the text become explicit Typst line breaks.
fn text_literal(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("#\"{}\"", escape_string(line)))
        .collect::<Vec<_>>()
        .join(" #linebreak() ")
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' | '\t' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PageSize;
    use crate::models::presets;
    use crate::models::resume::Resume;
    use crate::render::render;

    #[test]
    fn test_preamble_sets_a4_portrait() {
        let markup = transpile(&render(&Resume::empty()), &ExportOptions::standard());
        assert!(markup.starts_with("#set page(paper: \"a4\", flipped: false"));
    }

    #[test]
    fn test_landscape_letter_preamble() {
        let options = ExportOptions {
            page: PageSize::Letter,
            orientation: Orientation::Landscape,
            ..ExportOptions::standard()
        };
        let markup = transpile(&render(&Resume::empty()), &options);
        assert!(markup.contains("paper: \"us-letter\", flipped: true"));
    }

    #[test]
    fn test_text_is_quoted_not_markup() {
        assert_eq!(text_literal("C# & *bold* \"q\""), "#\"C# & *bold* \\\"q\\\"\"");
    }

    #[test]
    fn test_multiline_text_uses_linebreaks() {
        assert_eq!(text_literal("• one\n• two\n"), "#\"• one\" #linebreak() #\"• two\"");
    }

    #[test]
    fn test_sections_become_headings() {
        let resume = presets::by_name("Project Manager").unwrap();
        let markup = transpile(&render(&resume), &ExportOptions::standard());
        assert!(markup.contains("#heading(level: 2, outlined: false)"));
        assert!(markup.contains("#\"Professional Experience\""));
        assert!(markup.contains("#heading(level: 1, outlined: false)"));
        assert!(markup.contains("#\"David Miller\""));
    }

    #[test]
    fn test_wrapping_list_keeps_bullets_inline() {
        let resume = presets::by_name("Project Manager").unwrap();
        let markup = transpile(&render(&resume), &ExportOptions::standard());
        assert!(markup.contains("• "));
        assert!(markup.contains("#\"Budgeting\""));
    }

    fn markup_for(preset: &str, template: Template) -> String {
        let resume = Resume {
            template,
            ..presets::by_name(preset).unwrap()
        };
        transpile(&render(&resume), &ExportOptions::standard())
    }

    #[test]
    fn test_creative_carries_emerald_accent() {
        let markup = markup_for("Marketing Manager", Template::Creative);
        assert!(markup.contains("rgb(\"#10b981\")"), "no emerald in:\n{markup}");
        assert!(markup.contains("stroke: (bottom: 6pt + rgb(\"#10b981\"))"));
        assert!(markup.contains("#grid(columns: (4fr, 8fr)"));
    }

    #[test]
    fn test_executive_banner_is_filled() {
        let markup = markup_for("Executive", Template::Executive);
        assert!(markup.contains("#block(width: 100%, fill: rgb(\"#0f172a\")"));
        assert!(markup.contains("fill: rgb(\"#ffffff\")"));
        assert!(markup.contains("#grid(columns: (1fr, 3fr)"));
    }

    #[test]
    fn test_classic_profile_is_italic() {
        let markup = markup_for("Project Manager", Template::Classic);
        assert!(markup.contains("style: \"italic\""));
        assert!(markup.contains("#align(center)"));
    }

    #[test]
    fn test_modern_uses_two_columns_and_uppercase_name() {
        let markup = markup_for("Software Engineer", Template::Modern);
        assert!(markup.contains("#grid(columns: (8fr, 4fr)"));
        assert!(markup.contains("#upper[#\"Alex Rivera\"]"));
    }

    #[test]
    fn test_templates_differ_in_styling() {
        let creative = markup_for("Marketing Manager", Template::Creative);
        let minimal = markup_for("Marketing Manager", Template::Minimal);
        assert!(creative.contains("#10b981"));
        assert!(!minimal.contains("#10b981"));
    }

    #[test]
    fn test_positioned_decorations_are_dropped() {
        let markup = markup_for("Software Engineer", Template::Modern);
        // The full-height side accent is absolutely positioned in the preview.
        assert!(!markup.contains("height: 100%"));
    }

    #[test]
    fn test_join_inline_spacing() {
        let parts = vec!["#\"a\"".to_string(), "#linebreak()".to_string(), "#\"b\"".to_string(), "#\"c\"".to_string()];
        assert_eq!(join_inline(parts), "#\"a\" #linebreak() #\"b\" #h(1em) #\"c\"");
    }

    #[test]
    fn test_missing_font_dir_gives_empty_exporter() {
        let exporter = TypstExporter::from_font_dir(Path::new("/nonexistent/fonts")).unwrap();
        assert!(exporter.fonts.is_empty());
    }

    #[test]
    fn test_transpile_is_deterministic() {
        let resume = presets::by_name("Software Engineer").unwrap();
        let surface = render(&resume);
        let options = ExportOptions::standard();
        assert_eq!(transpile(&surface, &options), transpile(&surface, &options));
    }

    #[test]
    fn test_compile_produces_pdf() {
        let resume = presets::by_name("Graphic Designer").unwrap();
        let markup = transpile(&render(&resume), &ExportOptions::standard());
        let result = compile(&markup, &[]);
        assert!(result.is_ok(), "Compilation failed: {:?}", result.err());
        assert!(result.unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_every_template_compiles() {
        for template in Template::ALL {
            let markup = markup_for("Executive", template);
            let result = compile(&markup, &[]);
            assert!(result.is_ok(), "{} failed: {:?}\n{markup}", template.as_str(), result.err());
        }
    }
}
