//! Classic: centered letter-spaced header over a single ruled column.

use crate::models::resume::{PersonalField, Resume};
use crate::render::surface::{el, Element, Node, Tag};
use crate::render::{contacts, display_name, education_dates, experience_dates, objective};

const H2: &str = "text-sm font-bold text-slate-900 uppercase tracking-[0.3em] border-b border-slate-200 pb-2 mb-4";

pub fn render(resume: &Resume) -> Vec<Node> {
    let info = &resume.personal_info;

    let header = el(Tag::Header)
        .class("text-center border-b-2 border-slate-900 pb-8")
        .child(
            el(Tag::H1)
                .class("text-5xl font-bold text-slate-900 uppercase tracking-[0.2em] mb-4")
                .text(display_name(info)),
        )
        .child(
            el(Tag::Div)
                .class("flex flex-wrap justify-center gap-x-6 gap-y-2 text-xs font-mono text-slate-600 uppercase tracking-wider")
                .children(
                    contacts(
                        info,
                        &[
                            PersonalField::Email,
                            PersonalField::Phone,
                            PersonalField::Address,
                            PersonalField::Website,
                        ],
                    )
                    .into_iter()
                    .map(|value| el(Tag::Span).text(value)),
                ),
        );

    let body = el(Tag::Div)
        .class("space-y-10")
        .child_opt(profile(resume))
        .child_opt(experience(resume))
        .child_opt(skills(resume))
        .child_opt(education(resume));

    vec![el(Tag::Div)
        .class("space-y-10")
        .child(header)
        .child(body)
        .into()]
}

fn profile(resume: &Resume) -> Option<Element> {
    let text = objective(&resume.personal_info)?;
    Some(
        el(Tag::Section)
            .section("profile")
            .child(el(Tag::H2).class(H2).text("Professional Profile"))
            .child(el(Tag::P).class("text-base leading-relaxed text-slate-700 italic").text(text)),
    )
}

fn experience(resume: &Resume) -> Option<Element> {
    if resume.experience.is_empty() {
        return None;
    }
    let entries = resume.experience.iter().map(|exp| {
        el(Tag::Div)
            .child(
                el(Tag::Div)
                    .class("flex justify-between items-baseline mb-1")
                    .child(el(Tag::H3).class("text-lg font-bold text-slate-900 uppercase tracking-tight").text(exp.position.as_str()))
                    .child(el(Tag::Span).class("text-xs font-mono text-slate-500").text(experience_dates(exp))),
            )
            .child(el(Tag::Div).class("text-sm font-bold text-slate-600 italic mb-3").text(exp.company.as_str()))
            .child(el(Tag::P).class("text-sm text-slate-700 leading-relaxed").text(exp.description.as_str()))
    });
    Some(
        el(Tag::Section)
            .section("experience")
            .child(el(Tag::H2).class(H2).text("Professional Experience"))
            .child(el(Tag::Div).class("space-y-8").children(entries)),
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
                    .class("flex flex-wrap gap-x-8 gap-y-2 list-disc list-inside")
                    .children(skills.into_iter().map(|skill| {
                        el(Tag::Li)
                            .class("text-sm text-slate-700 font-medium uppercase tracking-wide")
                            .text(skill)
                    })),
            ),
    )
}

fn education(resume: &Resume) -> Option<Element> {
    if resume.education.is_empty() {
        return None;
    }
    let entries = resume.education.iter().map(|edu| {
        el(Tag::Div)
            .child(
                el(Tag::Div)
                    .class("flex justify-between items-baseline mb-1")
                    .child(el(Tag::H3).class("text-base font-bold text-slate-900 uppercase").text(edu.degree.as_str()))
                    .child(el(Tag::Span).class("text-xs font-mono text-slate-500").text(education_dates(edu))),
            )
            .child(el(Tag::Div).class("text-sm text-slate-700 italic").text(edu.school.as_str()))
    });
    Some(
        el(Tag::Section)
            .section("education")
            .child(el(Tag::H2).class(H2).text("Academic History"))
            .child(el(Tag::Div).class("space-y-6").children(entries)),
    )
}

#[cfg(test)]
mod tests {
    use crate::models::presets;
    use crate::render;

    #[test]
    fn test_classic_omits_projects_and_certifications() {
        let resume = presets::by_name("Project Manager").unwrap();
        let surface = render::render(&resume);
        assert_eq!(
            surface.section_names(),
            vec!["profile", "experience", "skills", "education"]
        );
    }

    #[test]
    fn test_classic_shows_all_contacts() {
        let resume = presets::by_name("Project Manager").unwrap();
        let texts = render::render(&resume).texts().join("|");
        for value in ["david.miller@pmp.com", "+1 (555) 555-6666", "Austin, TX", "pmp-david.com"] {
            assert!(texts.contains(value), "missing {value}");
        }
    }
}
