//! Executive: dark banner header, dates in a left gutter, and a two-column footer
//! block for competencies and education.

use crate::models::resume::{PersonalField, Resume};
use crate::render::surface::{el, Element, Node, Tag};
use crate::render::{contacts, display_name, experience_dates, non_empty, objective};

const H2: &str = "text-lg font-bold text-slate-900 border-b-2 border-slate-900 pb-2 mb-4";

pub fn render(resume: &Resume) -> Vec<Node> {
    let info = &resume.personal_info;

    let header = el(Tag::Header)
        .class("bg-slate-900 -mx-16 -mt-16 p-16 text-white mb-12")
        .child(el(Tag::H1).class("text-5xl font-bold tracking-tight mb-4").text(display_name(info)))
        .child(
            el(Tag::Div)
                .class("flex flex-wrap gap-6 text-sm text-slate-300 font-light")
                .children(
                    contacts(info, &[PersonalField::Email, PersonalField::Phone, PersonalField::Address])
                        .into_iter()
                        .map(|value| el(Tag::Span).text(value)),
                ),
        );

    let lower = el(Tag::Div)
        .class("grid grid-cols-2 gap-12")
        .child_opt(skills(resume))
        .child_opt(education(resume));

    let body = el(Tag::Div)
        .class("space-y-12")
        .child_opt(summary(resume))
        .child_opt(history(resume))
        .child_opt(non_empty(lower));

    vec![el(Tag::Div)
        .class("space-y-12 font-serif")
        .child(header)
        .child(body)
        .into()]
}

fn summary(resume: &Resume) -> Option<Element> {
    let text = objective(&resume.personal_info)?;
    Some(
        el(Tag::Section)
            .section("profile")
            .child(el(Tag::H2).class(H2).text("Executive Summary"))
            .child(el(Tag::P).class("text-base leading-relaxed text-slate-700").text(text)),
    )
}

fn history(resume: &Resume) -> Option<Element> {
    if resume.experience.is_empty() {
        return None;
    }
    let entries = resume.experience.iter().map(|exp| {
        el(Tag::Div)
            .class("grid grid-cols-4 gap-8")
            .child(
                el(Tag::Div)
                    .class("col-span-1 text-sm font-bold text-slate-500 uppercase tracking-wider")
                    .text(experience_dates(exp)),
            )
            .child(
                el(Tag::Div)
                    .class("col-span-3")
                    .child(el(Tag::H3).class("text-xl font-bold text-slate-900 mb-1").text(exp.position.as_str()))
                    .child(el(Tag::Div).class("text-base font-bold text-slate-600 mb-3").text(exp.company.as_str()))
                    .child(el(Tag::P).class("text-sm text-slate-700 leading-relaxed").text(exp.description.as_str())),
            )
    });
    Some(
        el(Tag::Section)
            .section("experience")
            .child(el(Tag::H2).class(H2).text("Professional History"))
            .child(el(Tag::Div).class("space-y-10").children(entries)),
    )
}

fn skills(resume: &Resume) -> Option<Element> {
    let skills = resume.visible_skills();
    if skills.is_empty() {
        return None;
    }
    Some(
        el(Tag::Section)
            .section("skills")
            .child(el(Tag::H2).class(H2).text("Core Competencies"))
            .child(
                el(Tag::Ul)
                    .class("grid grid-cols-1 gap-2")
                    .children(
                        skills
                            .into_iter()
                            .map(|skill| el(Tag::Li).class("text-sm text-slate-700 flex items-center gap-2").text(skill)),
                    ),
            ),
    )
}

/// Degree over "school | end date"; the start date is not shown here.
fn education(resume: &Resume) -> Option<Element> {
    if resume.education.is_empty() {
        return None;
    }
    let entries = resume.education.iter().map(|edu| {
        el(Tag::Div)
            .child(el(Tag::H3).class("text-sm font-bold text-slate-900").text(edu.degree.as_str()))
            .child(
                el(Tag::Div)
                    .class("text-xs text-slate-600")
                    .text(format!("{} | {}", edu.school, edu.end_date)),
            )
    });
    Some(
        el(Tag::Section)
            .section("education")
            .child(el(Tag::H2).class(H2).text("Education"))
            .child(el(Tag::Div).class("space-y-4").children(entries)),
    )
}

#[cfg(test)]
mod tests {
    use crate::models::presets;
    use crate::render;

    #[test]
    fn test_executive_sections() {
        let resume = presets::by_name("Executive").unwrap();
        assert_eq!(
            render::render(&resume).section_names(),
            vec!["profile", "experience", "skills", "education"]
        );
    }

    #[test]
    fn test_lower_grid_omitted_without_skills_or_education() {
        let mut resume = presets::by_name("Executive").unwrap();
        resume.skills.clear();
        resume.education.clear();
        let html = render::render(&resume).to_html();
        assert!(!html.contains("grid grid-cols-2 gap-12"));
        assert!(html.contains("Professional History"));

        let full = render::render(&presets::by_name("Executive").unwrap()).to_html();
        assert!(full.contains("grid grid-cols-2 gap-12"));
    }

    #[test]
    fn test_executive_education_line() {
        let resume = presets::by_name("Executive").unwrap();
        let surface = render::render(&resume);
        let text = surface.section("education").unwrap().text_content();
        assert!(text.contains("Harvard Business School | 2007"));
    }
}
