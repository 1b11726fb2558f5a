//! Form Editor — atomic edits over a `Resume`.
//!
//! Every operation borrows the current value and returns a complete replacement;
//! the caller commits it to the session in a single write. Requests that point at
//! a missing id, an out-of-range index, or a field the list does not have are
//! no-ops, never errors.

pub mod handlers;

use crate::models::ids::IdGenerator;
use crate::models::resume::{
    Entry, EntryField, ListEntry, ListKind, PersonalField, Resume, Template,
};

pub fn set_personal_field(resume: &Resume, field: PersonalField, value: &str) -> Resume {
    let mut next = resume.clone();
    *next.personal_info.field_mut(field) = value.to_string();
    next
}

/// Appends an empty entry with a fresh id. Returns the new value and the id.
pub fn add_list_entry(
    resume: &Resume,
    kind: ListKind,
    ids: &dyn IdGenerator,
) -> (Resume, String) {
    let id = ids.next_id();
    let mut next = resume.clone();
    match kind.new_entry(id.clone()) {
        ListEntry::Education(e) => next.education.push(e),
        ListEntry::Experience(e) => next.experience.push(e),
        ListEntry::Project(p) => next.projects.push(p),
    }
    (next, id)
}

pub fn remove_list_entry(resume: &Resume, kind: ListKind, id: &str) -> Resume {
    let mut next = resume.clone();
    match kind {
        ListKind::Education => next.education.retain(|e| e.id != id),
        ListKind::Experience => next.experience.retain(|e| e.id != id),
        ListKind::Projects => next.projects.retain(|p| p.id != id),
    }
    next
}

pub fn update_list_entry_field(
    resume: &Resume,
    kind: ListKind,
    id: &str,
    field: EntryField,
    value: &str,
) -> Resume {
    let mut next = resume.clone();
    let updated = match kind {
        ListKind::Education => set_entry_field(&mut next.education, id, field, value),
        ListKind::Experience => set_entry_field(&mut next.experience, id, field, value),
        ListKind::Projects => set_entry_field(&mut next.projects, id, field, value),
    };
    if updated {
        next
    } else {
        resume.clone()
    }
}

fn set_entry_field<E: Entry>(entries: &mut [E], id: &str, field: EntryField, value: &str) -> bool {
    entries
        .iter_mut()
        .find(|e| e.id() == id)
        .and_then(|e| e.field_mut(field))
        .map(|slot| *slot = value.to_string())
        .is_some()
}

pub fn add_skill(resume: &Resume, text: &str) -> Resume {
    let mut next = resume.clone();
    push_trimmed(&mut next.skills, text);
    next
}

pub fn add_certification(resume: &Resume, text: &str) -> Resume {
    let mut next = resume.clone();
    push_trimmed(&mut next.certifications, text);
    next
}

fn push_trimmed(list: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        list.push(text.to_string());
    }
}

pub fn remove_skill(resume: &Resume, index: usize) -> Resume {
    let mut next = resume.clone();
    remove_at(&mut next.skills, index);
    next
}

pub fn remove_certification(resume: &Resume, index: usize) -> Resume {
    let mut next = resume.clone();
    remove_at(&mut next.certifications, index);
    next
}

fn remove_at(list: &mut Vec<String>, index: usize) {
    if index < list.len() {
        list.remove(index);
    }
}

pub fn set_template(resume: &Resume, template: Template) -> Resume {
    Resume {
        template,
        ..resume.clone()
    }
}
