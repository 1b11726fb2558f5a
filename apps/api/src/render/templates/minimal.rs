//! Minimal: light type, no rules, the objective set as a lead paragraph.

use crate::models::resume::{PersonalField, Resume};
use crate::render::surface::{el, Element, Node, Tag};
use crate::render::{contacts, display_name, education_dates, experience_dates, objective};

const H2: &str = "text-[10px] font-bold text-slate-300 uppercase tracking-[0.4em]";

pub fn render(resume: &Resume) -> Vec<Node> {
    let info = &resume.personal_info;

    // No address line in this layout.
    let header = el(Tag::Header)
        .class("space-y-6")
        .child(el(Tag::H1).class("text-5xl font-light text-slate-900 tracking-tight").text(display_name(info)))
        .child(
            el(Tag::Div)
                .class("flex flex-col gap-1 text-sm text-slate-400 font-light")
                .children(
                    contacts(info, &[PersonalField::Email, PersonalField::Phone, PersonalField::Website])
                        .into_iter()
                        .map(|value| el(Tag::Span).text(value)),
                ),
        );

    let body = el(Tag::Div)
        .class("space-y-16 max-w-2xl")
        .child_opt(lead(resume))
        .child_opt(experience(resume))
        .child_opt(skills(resume))
        .child_opt(education(resume));

    vec![el(Tag::Div)
        .class("space-y-16 font-sans")
        .child(header)
        .child(body)
        .into()]
}

fn lead(resume: &Resume) -> Option<Element> {
    let text = objective(&resume.personal_info)?;
    Some(
        el(Tag::Section)
            .class("space-y-4")
            .section("profile")
            .child(el(Tag::P).class("text-xl leading-relaxed text-slate-600 font-light").text(text)),
    )
}

fn experience(resume: &Resume) -> Option<Element> {
    if resume.experience.is_empty() {
        return None;
    }
    let entries = resume.experience.iter().map(|exp| {
        el(Tag::Div)
            .class("space-y-2")
            .child(el(Tag::Div).class("text-xs text-slate-400 font-mono tracking-widest").text(experience_dates(exp)))
            .child(el(Tag::H3).class("text-xl font-medium text-slate-900").text(exp.position.as_str()))
            .child(el(Tag::Div).class("text-sm text-slate-500").text(exp.company.as_str()))
            .child(el(Tag::P).class("text-sm text-slate-600 font-light leading-relaxed pt-2").text(exp.description.as_str()))
    });
    Some(
        el(Tag::Section)
            .class("space-y-8")
            .section("experience")
            .child(el(Tag::H2).class(H2).text("Experience"))
            .child(el(Tag::Div).class("space-y-12").children(entries)),
    )
}

fn skills(resume: &Resume) -> Option<Element> {
    let skills = resume.visible_skills();
    if skills.is_empty() {
        return None;
    }
    Some(
        el(Tag::Section)
            .class("space-y-6")
            .section("skills")
            .child(el(Tag::H2).class(H2).text("Skills"))
            .child(
                el(Tag::Div)
                    .class("flex flex-wrap gap-x-12 gap-y-4")
                    .children(
                        skills
                            .into_iter()
                            .map(|skill| el(Tag::Div).class("text-sm text-slate-600 font-light").text(skill)),
                    ),
            ),
    )
}

fn education(resume: &Resume) -> Option<Element> {
    if resume.education.is_empty() {
        return None;
    }
    let entries = resume.education.iter().map(|edu| {
        el(Tag::Div)
            .class("space-y-1")
            .child(el(Tag::H3).class("text-lg font-medium text-slate-900").text(edu.degree.as_str()))
            .child(el(Tag::Div).class("text-sm text-slate-500").text(edu.school.as_str()))
            .child(el(Tag::Div).class("text-xs text-slate-400 font-mono pt-1").text(education_dates(edu)))
    });
    Some(
        el(Tag::Section)
            .class("space-y-8")
            .section("education")
            .child(el(Tag::H2).class(H2).text("Education"))
            .child(el(Tag::Div).class("space-y-8").children(entries)),
    )
}

#[cfg(test)]
mod tests {
    use crate::models::presets;
    use crate::render;

    #[test]
    fn test_minimal_leaves_out_address() {
        let resume = presets::by_name("Graphic Designer").unwrap();
        let surface = render::render(&resume);
        let texts = surface.texts();
        assert!(texts.contains(&"elena@rossi.design"));
        assert!(!texts.contains(&"Milan, Italy"));
    }

    #[test]
    fn test_minimal_dates_precede_position() {
        let resume = presets::by_name("Graphic Designer").unwrap();
        let surface = render::render(&resume);
        let texts = surface.section("experience").unwrap().texts();
        assert_eq!(&texts[1..3], &["2020 — Present", "Senior Designer"]);
    }
}
