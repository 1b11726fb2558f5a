use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five visual layouts a résumé can be rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Minimal,
    Executive,
    Creative,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Modern,
        Template::Classic,
        Template::Minimal,
        Template::Executive,
        Template::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Minimal => "minimal",
            Template::Executive => "executive",
            Template::Creative => "creative",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub objective: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
}

/// The complete résumé record edited, rendered and exported by the service.
///
/// Every field is required on the wire: a payload missing any top-level field,
/// the template, or an entry id fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub template: Template,
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<String>,
}

impl Resume {
    /// The blank skeleton a new session starts from.
    pub fn empty() -> Self {
        Self {
            template: Template::default(),
            personal_info: PersonalInfo::default(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
        }
    }

    /// Skills with blank entries dropped, in list order.
    pub fn visible_skills(&self) -> Vec<&str> {
        non_blank(&self.skills)
    }

    /// Certifications with blank entries dropped, in list order.
    pub fn visible_certifications(&self) -> Vec<&str> {
        non_blank(&self.certifications)
    }

    /// Ids currently held by the given list, in order.
    pub fn ids(&self, kind: ListKind) -> Vec<&str> {
        match kind {
            ListKind::Education => self.education.iter().map(|e| e.id.as_str()).collect(),
            ListKind::Experience => self.experience.iter().map(|e| e.id.as_str()).collect(),
            ListKind::Projects => self.projects.iter().map(|p| p.id.as_str()).collect(),
        }
    }

    /// Checks that every list entry carries a non-empty id unique within its list.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        for kind in ListKind::ALL {
            let mut seen = HashSet::new();
            for id in self.ids(kind) {
                if id.trim().is_empty() {
                    return Err(IntegrityError::MissingId { list: kind });
                }
                if !seen.insert(id) {
                    return Err(IntegrityError::DuplicateId {
                        list: kind,
                        id: id.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::empty()
    }
}

fn non_blank(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("an entry in {} has an empty id", .list.as_str())]
    MissingId { list: ListKind },

    #[error("id '{id}' appears more than once in {}", .list.as_str())]
    DuplicateId { list: ListKind, id: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Editable fields
// ────────────────────────────────────────────────────────────────────────────

/// The three id-keyed lists of a résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Education,
    Experience,
    Projects,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Education, ListKind::Experience, ListKind::Projects];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Education => "education",
            ListKind::Experience => "experience",
            ListKind::Projects => "projects",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        ListKind::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Whether `field` is part of this list's entry shape.
    pub fn accepts(&self, field: EntryField) -> bool {
        use EntryField::*;
        match self {
            ListKind::Education => matches!(
                field,
                School | Degree | StartDate | EndDate | Description
            ),
            ListKind::Experience => matches!(
                field,
                Company | Position | StartDate | EndDate | Description
            ),
            ListKind::Projects => matches!(field, Name | Description | Link),
        }
    }

    /// Builds the empty record for this list.
    pub fn new_entry(&self, id: String) -> ListEntry {
        match self {
            ListKind::Education => ListEntry::Education(Education {
                id,
                ..Default::default()
            }),
            ListKind::Experience => ListEntry::Experience(Experience {
                id,
                ..Default::default()
            }),
            ListKind::Projects => ListEntry::Project(Project {
                id,
                ..Default::default()
            }),
        }
    }
}

/// A freshly built list entry, tagged with the list it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Education(Education),
    Experience(Experience),
    Project(Project),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Address,
    Website,
    Objective,
}

impl PersonalInfo {
    pub fn field(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FullName => &self.full_name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Address => &self.address,
            PersonalField::Website => &self.website,
            PersonalField::Objective => &self.objective,
        }
    }

    pub fn field_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Address => &mut self.address,
            PersonalField::Website => &mut self.website,
            PersonalField::Objective => &mut self.objective,
        }
    }
}

/// Every field name that appears on an education, experience or project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryField {
    School,
    Degree,
    Company,
    Position,
    Name,
    StartDate,
    EndDate,
    Description,
    Link,
}

/// Common access to id-keyed list entries.
pub trait Entry {
    fn id(&self) -> &str;

    /// Returns the slot for `field`, or `None` if the entry has no such field.
    fn field_mut(&mut self, field: EntryField) -> Option<&mut String>;
}

impl Entry for Education {
    fn id(&self) -> &str {
        &self.id
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::School => Some(&mut self.school),
            EntryField::Degree => Some(&mut self.degree),
            EntryField::StartDate => Some(&mut self.start_date),
            EntryField::EndDate => Some(&mut self.end_date),
            EntryField::Description => Some(&mut self.description),
            _ => None,
        }
    }
}

impl Entry for Experience {
    fn id(&self) -> &str {
        &self.id
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Company => Some(&mut self.company),
            EntryField::Position => Some(&mut self.position),
            EntryField::StartDate => Some(&mut self.start_date),
            EntryField::EndDate => Some(&mut self.end_date),
            EntryField::Description => Some(&mut self.description),
            _ => None,
        }
    }
}

impl Entry for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Name => Some(&mut self.name),
            EntryField::Description => Some(&mut self.description),
            EntryField::Link => Some(&mut self.link),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Resume::empty()).unwrap();
        assert_eq!(json["template"], "modern");
        assert!(json["personalInfo"]["fullName"].is_string());
        assert!(json["education"].as_array().unwrap().is_empty());
        assert!(json["certifications"].is_array());
    }

    #[test]
    fn test_resume_missing_top_level_field_fails() {
        let json = serde_json::json!({
            "template": "modern",
            "personalInfo": {
                "fullName": "", "email": "", "phone": "",
                "address": "", "website": "", "objective": ""
            },
            "education": [],
            "experience": [],
            "skills": [],
            "projects": []
        });
        let result: Result<Resume, _> = serde_json::from_value(json);
        assert!(result.is_err(), "Resume without certifications must not deserialize");
    }

    #[test]
    fn test_unknown_template_fails() {
        let result: Result<Template, _> = serde_json::from_str(r#""fancy""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_without_id_fails() {
        let json = r#"{"school": "MIT", "degree": "BS", "startDate": "", "endDate": "", "description": ""}"#;
        let result: Result<Education, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_visible_skills_drops_blank_entries() {
        let mut resume = Resume::empty();
        resume.skills = vec!["React".into(), "".into(), "  ".into(), "Go".into()];
        assert_eq!(resume.visible_skills(), vec!["React", "Go"]);
    }

    #[test]
    fn test_integrity_rejects_duplicate_ids_within_a_list() {
        let mut resume = Resume::empty();
        resume.projects = vec![
            Project { id: "a".into(), ..Default::default() },
            Project { id: "a".into(), ..Default::default() },
        ];
        assert_eq!(
            resume.check_integrity(),
            Err(IntegrityError::DuplicateId {
                list: ListKind::Projects,
                id: "a".into()
            })
        );
    }

    #[test]
    fn test_integrity_allows_same_id_across_lists() {
        let mut resume = Resume::empty();
        resume.education = vec![Education { id: "1".into(), ..Default::default() }];
        resume.experience = vec![Experience { id: "1".into(), ..Default::default() }];
        assert!(resume.check_integrity().is_ok());
    }

    #[test]
    fn test_integrity_rejects_blank_id() {
        let mut resume = Resume::empty();
        resume.experience = vec![Experience { id: " ".into(), ..Default::default() }];
        assert_eq!(
            resume.check_integrity(),
            Err(IntegrityError::MissingId {
                list: ListKind::Experience
            })
        );
    }

    #[test]
    fn test_list_kind_accepts_only_its_own_fields() {
        assert!(ListKind::Experience.accepts(EntryField::Position));
        assert!(!ListKind::Education.accepts(EntryField::Position));
        assert!(ListKind::Projects.accepts(EntryField::Link));
        assert!(!ListKind::Projects.accepts(EntryField::StartDate));
    }

    #[test]
    fn test_new_entry_has_only_the_id_set() {
        match ListKind::Experience.new_entry("x1".into()) {
            ListEntry::Experience(exp) => {
                assert_eq!(exp.id, "x1");
                assert!(exp.company.is_empty() && exp.position.is_empty());
            }
            other => panic!("unexpected entry {other:?}"),
        }
    }

    #[test]
    fn test_list_kind_parse() {
        assert_eq!(ListKind::parse("projects"), Some(ListKind::Projects));
        assert_eq!(ListKind::parse("skills"), None);
    }
}
