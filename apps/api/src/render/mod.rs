//! Template Renderer — pure mapping from a `Resume` to its visual `Surface`.
//!
//! The active template picks one of five strategies in `templates`. All of them
//! share the rules implemented by the helpers below: blank sections emit no
//! nodes, experience ranges end in "Present" when open, education ranges are
//! shown verbatim, and an empty name displays as "Your Name" without touching
//! the underlying value.

pub mod handlers;
pub mod surface;
pub mod templates;

use crate::models::resume::{Education, Experience, PersonalField, PersonalInfo, Resume, Template};
use surface::{el, Element, Surface, Tag};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const OPEN_END_DATE: &str = "Present";

/// Renders the résumé with its active template. Deterministic.
pub fn render(resume: &Resume) -> Surface {
    let (font_class, body) = match resume.template {
        Template::Modern => (SERIF_ROOT, templates::modern::render(resume)),
        Template::Classic => (SERIF_ROOT, templates::classic::render(resume)),
        Template::Minimal => (SANS_ROOT, templates::minimal::render(resume)),
        Template::Executive => (SERIF_ROOT, templates::executive::render(resume)),
        Template::Creative => (SANS_ROOT, templates::creative::render(resume)),
    };

    let root = el(Tag::Div)
        .class(font_class)
        .attr("id", "resume-preview")
        .attr("data-template", resume.template.as_str())
        .children(body);

    Surface {
        template: resume.template,
        root,
    }
}

const SERIF_ROOT: &str = "bg-white w-full max-w-[800px] mx-auto shadow-2xl min-h-[1122px] p-16 \
    text-slate-900 relative overflow-hidden font-serif";
const SANS_ROOT: &str = "bg-white w-full max-w-[800px] mx-auto shadow-2xl min-h-[1122px] p-16 \
    text-slate-900 relative overflow-hidden font-sans";

/// Keeps a layout wrapper only when something was placed in it, so empty
/// sections leave no grid or spacing behind.
pub(crate) fn non_empty(element: Element) -> Option<Element> {
    (!element.children.is_empty()).then_some(element)
}

pub(crate) fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

pub(crate) fn display_name(info: &PersonalInfo) -> &str {
    if has_text(&info.full_name) {
        &info.full_name
    } else {
        NAME_PLACEHOLDER
    }
}

/// The objective, if there is one to show.
pub(crate) fn objective(info: &PersonalInfo) -> Option<&str> {
    has_text(&info.objective).then_some(info.objective.as_str())
}

/// The non-blank contact values among `fields`, in the given order.
pub(crate) fn contacts<'a>(info: &'a PersonalInfo, fields: &[PersonalField]) -> Vec<&'a str> {
    fields
        .iter()
        .map(|f| info.field(*f))
        .filter(|v| has_text(v))
        .collect()
}

pub(crate) fn experience_dates(exp: &Experience) -> String {
    let end = if has_text(&exp.end_date) {
        exp.end_date.as_str()
    } else {
        OPEN_END_DATE
    };
    format!("{} — {}", exp.start_date, end)
}

pub(crate) fn education_dates(edu: &Education) -> String {
    format!("{} — {}", edu.start_date, edu.end_date)
}
