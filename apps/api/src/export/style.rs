//! Reads the utility classes a template puts on an element and turns the ones
//! with a print meaning (colour, size, weight, case, borders, columns, spacing)
//! into Typst arguments. Classes with no print meaning are ignored.

/// Preview pixels to PDF points.
const PX_TO_PT: f32 = 0.75;
/// One spacing step (`p-1`, `gap-1`, `space-y-1`) is 4 preview pixels.
const STEP_PT: f32 = 4.0 * PX_TO_PT;

pub const SERIF_FONTS: &str = "(\"Libertinus Serif\", \"New Computer Modern\")";
pub const SANS_FONTS: &str = "(\"Inter\", \"New Computer Modern Sans\")";
pub const MONO_FONTS: &str = "(\"DejaVu Sans Mono\", \"New Computer Modern Mono\")";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
}

impl Side {
    fn name(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Style {
    pub size: Option<f32>,
    pub fill: Option<&'static str>,
    pub weight: Option<&'static str>,
    pub italic: bool,
    pub upper: bool,
    pub font: Option<&'static str>,
    pub tracking: Option<String>,
    pub background: Option<&'static str>,
    pub border_color: Option<&'static str>,
    pub borders: Vec<(Side, f32)>,
    pub padding: Padding,
    pub align: Option<&'static str>,
    pub flex: bool,
    pub justify_between: bool,
    pub grid_columns: Option<u32>,
    pub col_span: Option<u32>,
    pub column_gap: Option<f32>,
    pub row_gap: Option<f32>,
    pub space_y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub full_width: bool,
    pub rounded_full: bool,
    pub list_disc: bool,
    pub absolute: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        *self == Padding::default()
    }
}

impl Style {
    pub fn parse(class: &str) -> Self {
        let mut style = Style::default();
        for token in class.split_whitespace() {
            style.apply(token);
        }
        style
    }

    fn apply(&mut self, token: &str) {
        match token {
            "italic" => self.italic = true,
            "uppercase" => self.upper = true,
            "font-light" => self.weight = Some("light"),
            "font-medium" => self.weight = Some("medium"),
            "font-bold" => self.weight = Some("bold"),
            "font-black" => self.weight = Some("black"),
            "font-serif" => self.font = Some(SERIF_FONTS),
            "font-sans" => self.font = Some(SANS_FONTS),
            "font-mono" => self.font = Some(MONO_FONTS),
            "text-center" => self.align = Some("center"),
            "text-right" => self.align = Some("right"),
            "flex" => self.flex = true,
            "justify-between" => self.justify_between = true,
            "list-disc" => self.list_disc = true,
            "absolute" => self.absolute = true,
            "rounded-full" => self.rounded_full = true,
            "w-full" => self.full_width = true,
            "border-t" => self.borders.push((Side::Top, PX_TO_PT)),
            "border-b" => self.borders.push((Side::Bottom, PX_TO_PT)),
            "border-l" => self.borders.push((Side::Left, PX_TO_PT)),
            _ => self.apply_prefixed(token),
        }
    }

    fn apply_prefixed(&mut self, token: &str) {
        if let Some(rest) = token.strip_prefix("text-") {
            if let Some(size) = text_size(rest) {
                self.size = Some(size);
            } else if let Some(color) = color(rest) {
                self.fill = Some(color);
            }
        } else if let Some(rest) = token.strip_prefix("bg-") {
            self.background = color(rest);
        } else if let Some(rest) = token.strip_prefix("border-") {
            self.apply_border(rest);
        } else if let Some(rest) = token.strip_prefix("tracking-") {
            self.tracking = tracking(rest);
        } else if let Some(n) = token.strip_prefix("grid-cols-").and_then(parse_u32) {
            self.grid_columns = Some(n);
        } else if let Some(n) = token.strip_prefix("col-span-").and_then(parse_u32) {
            self.col_span = Some(n);
        } else if let Some(n) = token.strip_prefix("space-y-").and_then(steps) {
            self.space_y = Some(n);
        } else if let Some(n) = token.strip_prefix("gap-x-").and_then(steps) {
            self.column_gap = Some(n);
        } else if let Some(n) = token.strip_prefix("gap-y-").and_then(steps) {
            self.row_gap = Some(n);
        } else if let Some(n) = token.strip_prefix("gap-").and_then(steps) {
            self.column_gap = Some(n);
            self.row_gap = Some(n);
        } else if let Some(n) = token.strip_prefix("pt-").and_then(steps) {
            self.padding.top = n;
        } else if let Some(n) = token.strip_prefix("pb-").and_then(steps) {
            self.padding.bottom = n;
        } else if let Some(n) = token.strip_prefix("pl-").and_then(steps) {
            self.padding.left = n;
        } else if let Some(n) = token.strip_prefix("px-").and_then(steps) {
            self.padding.left = n;
            self.padding.right = n;
        } else if let Some(n) = token.strip_prefix("py-").and_then(steps) {
            self.padding.top = n;
            self.padding.bottom = n;
        } else if let Some(n) = token.strip_prefix("p-").and_then(steps) {
            self.padding = Padding { top: n, bottom: n, left: n, right: n };
        } else if let Some(n) = token.strip_prefix("w-").and_then(steps) {
            self.width = Some(n);
        } else if let Some(n) = token.strip_prefix("h-").and_then(steps) {
            self.height = Some(n);
        }
    }

    fn apply_border(&mut self, rest: &str) {
        let side = match rest.chars().next() {
            Some('t') => Side::Top,
            Some('b') => Side::Bottom,
            Some('l') => Side::Left,
            _ => {
                self.border_color = color(rest);
                return;
            }
        };
        // `border-b-2`, `border-l-2`, ...; a bare colour name starting with t/b/l
        // never has a numeric suffix directly after the side letter.
        match rest[1..].strip_prefix('-').and_then(parse_u32) {
            Some(px) => self.borders.push((side, px as f32 * PX_TO_PT)),
            None => self.border_color = color(rest),
        }
    }

    /// Named arguments for `#text(..)`, or `None` when nothing changes the text.
    pub fn text_args(&self) -> Option<String> {
        let mut args = Vec::new();
        if let Some(font) = self.font {
            args.push(format!("font: {font}"));
        }
        if let Some(size) = self.size {
            args.push(format!("size: {}", pt(size)));
        }
        if let Some(weight) = self.weight {
            args.push(format!("weight: \"{weight}\""));
        }
        if self.italic {
            args.push("style: \"italic\"".to_string());
        }
        if let Some(fill) = self.fill {
            args.push(format!("fill: {}", rgb(fill)));
        }
        if let Some(tracking) = &self.tracking {
            args.push(format!("tracking: {tracking}"));
        }
        (!args.is_empty()).then(|| args.join(", "))
    }

    pub fn has_box(&self) -> bool {
        self.background.is_some() || !self.borders.is_empty()
    }

    /// Arguments for the `#block(..)`/`#box(..)` that draws background, borders and padding.
    pub fn box_args(&self) -> String {
        let mut args = Vec::new();
        if self.full_width || self.background.is_some() {
            args.push("width: 100%".to_string());
        }
        if let Some(bg) = self.background {
            args.push(format!("fill: {}", rgb(bg)));
        }
        if !self.borders.is_empty() {
            let color = rgb(self.border_color.unwrap_or("#e2e8f0"));
            let sides: Vec<String> = self
                .borders
                .iter()
                .map(|(side, width)| format!("{}: {} + {color}", side.name(), pt(*width)))
                .collect();
            args.push(format!("stroke: ({})", sides.join(", ")));
        }
        if !self.padding.is_zero() {
            let p = self.padding;
            args.push(format!(
                "inset: (top: {}, bottom: {}, left: {}, right: {})",
                pt(p.top),
                pt(p.bottom),
                pt(p.left),
                pt(p.right)
            ));
        }
        if self.rounded_full {
            args.push("radius: 50%".to_string());
        }
        args.join(", ")
    }
}

pub fn pt(value: f32) -> String {
    format!("{}pt", (value * 100.0).round() / 100.0)
}

pub fn rgb(hex: &str) -> String {
    format!("rgb(\"{hex}\")")
}

fn parse_u32(s: &str) -> Option<u32> {
    s.parse().ok()
}

/// Spacing steps (`12`, `1.5`) to points.
fn steps(s: &str) -> Option<f32> {
    s.parse::<f32>().ok().map(|n| n * STEP_PT)
}

fn text_size(name: &str) -> Option<f32> {
    let px = match name {
        "xs" => 12.0,
        "sm" => 14.0,
        "base" => 16.0,
        "lg" => 18.0,
        "xl" => 20.0,
        "2xl" => 24.0,
        "3xl" => 30.0,
        "4xl" => 36.0,
        "5xl" => 48.0,
        "6xl" => 60.0,
        "7xl" => 72.0,
        _ => name
            .strip_prefix('[')?
            .strip_suffix("px]")?
            .parse::<f32>()
            .ok()?,
    };
    Some(px * PX_TO_PT)
}

fn tracking(name: &str) -> Option<String> {
    let em = match name {
        "tighter" => "-0.05em",
        "tight" => "-0.025em",
        "wide" => "0.025em",
        "wider" => "0.05em",
        "widest" => "0.1em",
        _ => {
            let value = name.strip_prefix('[')?.strip_suffix("em]")?;
            value.parse::<f32>().ok()?;
            return Some(format!("{value}em"));
        }
    };
    Some(em.to_string())
}

/// The palette entries the templates use.
fn color(name: &str) -> Option<&'static str> {
    Some(match name {
        "white" => "#ffffff",
        "slate-50" => "#f8fafc",
        "slate-100" => "#f1f5f9",
        "slate-200" => "#e2e8f0",
        "slate-300" => "#cbd5e1",
        "slate-400" => "#94a3b8",
        "slate-500" => "#64748b",
        "slate-600" => "#475569",
        "slate-700" => "#334155",
        "slate-800" => "#1e293b",
        "slate-900" => "#0f172a",
        "emerald-100" => "#d1fae5",
        "emerald-500" => "#10b981",
        "emerald-700" => "#047857",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_classes() {
        let style = Style::parse("text-sm font-bold text-slate-500 uppercase tracking-wider italic");
        assert_eq!(style.size, Some(10.5));
        assert_eq!(style.fill, Some("#64748b"));
        assert_eq!(style.weight, Some("bold"));
        assert!(style.upper);
        assert!(style.italic);
        assert_eq!(style.tracking.as_deref(), Some("0.05em"));
    }

    #[test]
    fn test_arbitrary_size_and_tracking() {
        let style = Style::parse("text-[10px] tracking-[0.3em]");
        assert_eq!(style.size, Some(7.5));
        assert_eq!(style.tracking.as_deref(), Some("0.3em"));
    }

    #[test]
    fn test_borders_and_border_color() {
        let style = Style::parse("border-b-8 border-emerald-500 pb-8");
        assert_eq!(style.borders, vec![(Side::Bottom, 6.0)]);
        assert_eq!(style.border_color, Some("#10b981"));
        assert_eq!(style.padding.bottom, 24.0);
        assert!(style.box_args().contains("stroke: (bottom: 6pt + rgb(\"#10b981\"))"));
    }

    #[test]
    fn test_bare_border_side() {
        let style = Style::parse("border-l border-slate-100 pl-6");
        assert_eq!(style.borders, vec![(Side::Left, 0.75)]);
        assert_eq!(style.border_color, Some("#f1f5f9"));
    }

    #[test]
    fn test_grid_classes() {
        let style = Style::parse("grid grid-cols-12 gap-12");
        assert_eq!(style.grid_columns, Some(12));
        assert_eq!(style.column_gap, Some(36.0));
        assert_eq!(Style::parse("col-span-8").col_span, Some(8));
    }

    #[test]
    fn test_background_box() {
        let style = Style::parse("bg-slate-900 p-16 text-white");
        assert!(style.has_box());
        assert_eq!(style.fill, Some("#ffffff"));
        assert!(style.box_args().starts_with("width: 100%, fill: rgb(\"#0f172a\")"));
    }

    #[test]
    fn test_unknown_classes_are_ignored() {
        assert_eq!(Style::parse("shadow-2xl relative z-10 leading-relaxed"), Style::default());
        assert_eq!(Style::parse("text-text-rose-500").text_args(), None);
    }
}
