//! Creative: oversized two-line name with an accent surname, skills and education
//! in a narrow left column, objective and experience on the right.

use crate::models::resume::{PersonalField, Resume};
use crate::render::surface::{el, Element, Node, Tag};
use crate::render::{display_name, experience_dates, has_text, non_empty, objective};

const H2: &str = "text-2xl font-black text-slate-900 mb-6 italic";

pub fn render(resume: &Resume) -> Vec<Node> {
    let info = &resume.personal_info;
    let (first, rest) = split_name(display_name(info));

    let name = el(Tag::H1)
        .class("text-7xl font-black text-slate-900 tracking-tighter leading-none")
        .text(first)
        .child_opt((!rest.is_empty()).then(|| el(Tag::Br)))
        .child_opt((!rest.is_empty()).then(|| el(Tag::Span).class("text-emerald-500").text(rest)));

    let contact_block = el(Tag::Div).class("text-right space-y-1").children(
        [
            (PersonalField::Email, "text-sm font-bold text-slate-900"),
            (PersonalField::Phone, "text-sm text-slate-500"),
            (PersonalField::Website, "text-sm text-slate-500"),
        ]
        .into_iter()
        .filter(|(field, _)| has_text(info.field(*field)))
        .map(|(field, class)| el(Tag::Div).class(class).text(info.field(field))),
    );

    let header = el(Tag::Header)
        .class("flex justify-between items-end border-b-8 border-emerald-500 pb-8")
        .child(el(Tag::Div).child(name))
        .child(contact_block);

    let side = el(Tag::Div)
        .class("col-span-4 space-y-12")
        .child_opt(skills(resume))
        .child_opt(education(resume));

    let main = el(Tag::Div)
        .class("col-span-8 space-y-12")
        .child_opt(statement(resume))
        .child_opt(experience(resume));

    vec![el(Tag::Div)
        .class("space-y-12 font-sans")
        .child(header)
        .child_opt(non_empty(
            el(Tag::Div)
                .class("grid grid-cols-12 gap-12")
                .child_opt(non_empty(side))
                .child_opt(non_empty(main)),
        ))
        .into()]
}

/// First word, then everything after it.
fn split_name(name: &str) -> (&str, &str) {
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (name, ""),
    }
}

fn skills(resume: &Resume) -> Option<Element> {
    let skills = resume.visible_skills();
    if skills.is_empty() {
        return None;
    }
    Some(
        el(Tag::Section)
            .section("skills")
            .child(el(Tag::H2).class(H2).text("Skills_"))
            .child(
                el(Tag::Div).class("flex flex-wrap gap-2").children(skills.into_iter().map(|skill| {
                    el(Tag::Span)
                        .class("px-3 py-1 bg-slate-100 text-slate-700 text-xs font-bold rounded-full")
                        .text(skill)
                })),
            ),
    )
}

/// Only the end date is shown, above the degree.
fn education(resume: &Resume) -> Option<Element> {
    if resume.education.is_empty() {
        return None;
    }
    let entries = resume.education.iter().map(|edu| {
        el(Tag::Div)
            .child(el(Tag::Div).class("text-xs font-bold text-emerald-500 mb-1").text(edu.end_date.as_str()))
            .child(el(Tag::H3).class("text-sm font-bold text-slate-900").text(edu.degree.as_str()))
            .child(el(Tag::Div).class("text-xs text-slate-500").text(edu.school.as_str()))
    });
    Some(
        el(Tag::Section)
            .section("education")
            .child(el(Tag::H2).class(H2).text("Edu_"))
            .child(el(Tag::Div).class("space-y-6").children(entries)),
    )
}

fn statement(resume: &Resume) -> Option<Element> {
    let text = objective(&resume.personal_info)?;
    Some(
        el(Tag::Section).section("profile").child(
            el(Tag::P)
                .class("text-2xl font-medium text-slate-700 leading-tight tracking-tight")
                .text(text),
        ),
    )
}

fn experience(resume: &Resume) -> Option<Element> {
    if resume.experience.is_empty() {
        return None;
    }
    let entries = resume.experience.iter().map(|exp| {
        el(Tag::Div)
            .class("space-y-3")
            .child(
                el(Tag::Div)
                    .class("flex justify-between items-center")
                    .child(el(Tag::H3).class("text-xl font-bold text-slate-900").text(exp.position.as_str()))
                    .child(
                        el(Tag::Span)
                            .class("text-xs font-bold bg-emerald-100 text-emerald-700 px-2 py-1 rounded")
                            .text(experience_dates(exp)),
                    ),
            )
            .child(el(Tag::Div).class("text-sm font-bold text-slate-500 uppercase tracking-widest").text(exp.company.as_str()))
            .child(el(Tag::P).class("text-sm text-slate-600 leading-relaxed").text(exp.description.as_str()))
    });
    Some(
        el(Tag::Section)
            .section("experience")
            .child(el(Tag::H2).class("text-2xl font-black text-slate-900 mb-8 italic").text("Experience_"))
            .child(el(Tag::Div).class("space-y-12").children(entries)),
    )
}
