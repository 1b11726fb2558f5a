//! Modern: bold uppercase name with a side accent, two columns (work on the left,
//! expertise, education and awards on the right) and a page footer.

use crate::models::resume::{PersonalField, Resume};
use crate::render::surface::{el, Element, Node, Tag};
use crate::render::{
    contacts, display_name, education_dates, experience_dates, has_text, non_empty, objective,
};

const H2: &str = "text-xs font-bold text-slate-400 uppercase tracking-[0.3em] mb-6";

pub fn render(resume: &Resume) -> Vec<Node> {
    let info = &resume.personal_info;

    let contact_grid = el(Tag::Div)
        .class("mt-8 grid grid-cols-2 gap-y-3 gap-x-8 text-[11px] text-slate-500 font-mono uppercase tracking-widest")
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
            .map(|value| {
                el(Tag::Div)
                    .class("flex items-center gap-2")
                    .child(el(Tag::Div).class("w-1 h-1 rounded-full bg-slate-300"))
                    .text(value)
            }),
        );

    let header = el(Tag::Header)
        .class("mb-12 relative")
        .child(
            el(Tag::Div)
                .class("flex flex-col gap-4")
                .child(
                    el(Tag::H1)
                        .class("text-6xl font-bold text-slate-900 tracking-tighter leading-[0.9] uppercase")
                        .text(display_name(info)),
                )
                .child(el(Tag::Div).class("h-1 w-24 bg-slate-900")),
        )
        .child_opt(non_empty(contact_grid));

    let main = el(Tag::Div)
        .class("col-span-8 space-y-12")
        .child_opt(profile(resume))
        .child_opt(experience(resume))
        .child_opt(projects(resume));

    let side = el(Tag::Div)
        .class("col-span-4 space-y-12")
        .child_opt(skills(resume))
        .child_opt(education(resume))
        .child_opt(awards(resume));

    let footer = el(Tag::Footer)
        .class("mt-20 pt-8 border-t border-slate-100 flex justify-between items-center text-[9px] font-mono text-slate-300 uppercase tracking-[0.4em]")
        .child(el(Tag::Span).text("Generated via ProResume Workspace"))
        .child(el(Tag::Span).text("Page 01"));

    vec![
        el(Tag::Div)
            .class("absolute top-0 left-0 w-1.5 h-full bg-slate-900")
            .into(),
        el(Tag::Div)
            .class("relative z-10")
            .child(header)
            .child_opt(non_empty(
                el(Tag::Div)
                    .class("grid grid-cols-12 gap-12")
                    .child_opt(non_empty(main))
                    .child_opt(non_empty(side)),
            ))
            .child(footer)
            .into(),
    ]
}

fn profile(resume: &Resume) -> Option<Element> {
    let text = objective(&resume.personal_info)?;
    Some(
        el(Tag::Section)
            .section("profile")
            .child(el(Tag::H2).class("text-xs font-bold text-slate-400 uppercase tracking-[0.3em] mb-4").text("Profile"))
            .child(el(Tag::P).class("text-base leading-relaxed text-slate-700 font-sans font-light").text(text)),
    )
}

fn experience(resume: &Resume) -> Option<Element> {
    if resume.experience.is_empty() {
        return None;
    }
    let entries = resume.experience.iter().map(|exp| {
        el(Tag::Div)
            .class("relative pl-6 border-l border-slate-100")
            .child(el(Tag::Div).class("absolute -left-[4.5px] top-1.5 w-2 h-2 rounded-full bg-slate-900"))
            .child(
                el(Tag::Div)
                    .class("flex justify-between items-baseline mb-2")
                    .child(el(Tag::H3).class("text-xl font-bold text-slate-900 tracking-tight").text(exp.position.as_str()))
                    .child(
                        el(Tag::Span)
                            .class("text-[10px] font-mono text-slate-400 uppercase tracking-widest")
                            .text(experience_dates(exp)),
                    ),
            )
            .child(el(Tag::Div).class("text-sm font-bold text-slate-500 mb-4 uppercase tracking-wider").text(exp.company.as_str()))
            .child(
                el(Tag::P)
                    .class("text-sm text-slate-600 whitespace-pre-line leading-relaxed font-sans")
                    .text(exp.description.as_str()),
            )
    });
    Some(
        el(Tag::Section)
            .section("experience")
            .child(el(Tag::H2).class(H2).text("Experience"))
            .child(el(Tag::Div).class("space-y-10").children(entries)),
    )
}

fn projects(resume: &Resume) -> Option<Element> {
    if resume.projects.is_empty() {
        return None;
    }
    let entries = resume.projects.iter().map(|project| {
        let link = has_text(&project.link).then(|| {
            el(Tag::Span)
                .class("text-[10px] font-mono text-slate-400 uppercase tracking-widest")
                .text(project.link.as_str())
        });
        el(Tag::Div)
            .class("group")
            .child(
                el(Tag::Div)
                    .class("flex items-center gap-3 mb-2")
                    .child(el(Tag::H3).class("text-lg font-bold text-slate-900 tracking-tight").text(project.name.as_str()))
                    .child_opt(link),
            )
            .child(el(Tag::P).class("text-sm text-slate-600 leading-relaxed font-sans").text(project.description.as_str()))
    });
    Some(
        el(Tag::Section)
            .section("projects")
            .child(el(Tag::H2).class(H2).text("Selected Work"))
            .child(el(Tag::Div).class("grid grid-cols-1 gap-8").children(entries)),
    )
}

fn skills(resume: &Resume) -> Option<Element> {
    let skills = resume.visible_skills();
    if skills.is_empty() {
        return None;
    }
    let items = skills.into_iter().map(|skill| {
        el(Tag::Div)
            .class("flex items-center gap-3")
            .child(el(Tag::Div).class("w-1.5 h-1.5 bg-slate-900 rotate-45"))
            .child(el(Tag::Span).class("text-sm text-slate-700 font-sans font-medium uppercase tracking-wide").text(skill))
    });
    Some(
        el(Tag::Section)
            .section("skills")
            .child(el(Tag::H2).class(H2).text("Expertise"))
            .child(el(Tag::Div).class("flex flex-col gap-3").children(items)),
    )
}

fn education(resume: &Resume) -> Option<Element> {
    if resume.education.is_empty() {
        return None;
    }
    let entries = resume.education.iter().map(|edu| {
        el(Tag::Div)
            .child(el(Tag::H3).class("text-sm font-bold text-slate-900 mb-1 uppercase tracking-tight leading-tight").text(edu.degree.as_str()))
            .child(el(Tag::Div).class("text-[11px] text-slate-500 mb-2 font-mono uppercase tracking-widest").text(education_dates(edu)))
            .child(el(Tag::Div).class("text-xs text-slate-700 font-sans font-medium").text(edu.school.as_str()))
    });
    Some(
        el(Tag::Section)
            .section("education")
            .child(el(Tag::H2).class(H2).text("Education"))
            .child(el(Tag::Div).class("space-y-8").children(entries)),
    )
}

fn awards(resume: &Resume) -> Option<Element> {
    let certifications = resume.visible_certifications();
    if certifications.is_empty() {
        return None;
    }
    let items = certifications.into_iter().map(|cert| {
        el(Tag::Div)
            .class("text-xs text-slate-600 font-sans leading-relaxed border-l-2 border-slate-100 pl-3")
            .text(cert)
    });
    Some(
        el(Tag::Section)
            .section("certifications")
            .child(el(Tag::H2).class(H2).text("Awards"))
            .child(el(Tag::Div).class("space-y-4").children(items)),
    )
}
