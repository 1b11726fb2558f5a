//! Response schema sent with every fill request, in the generative API's
//! OpenAPI-subset dialect (`OBJECT`, `ARRAY`, `STRING`).

use serde_json::{json, Value};

use crate::models::resume::Template;

fn string() -> Value {
    json!({ "type": "STRING" })
}

/// An object whose listed properties are all strings and all required.
fn string_object(fields: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> =
        fields.iter().map(|f| (f.to_string(), string())).collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": fields,
    })
}

fn array_of(items: Value) -> Value {
    json!({ "type": "ARRAY", "items": items })
}

/// The schema of a complete `Resume`.
pub fn resume_schema() -> Value {
    let templates: Vec<&str> = Template::ALL.iter().map(Template::as_str).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "template": { "type": "STRING", "enum": templates },
            "personalInfo": string_object(&[
                "fullName", "email", "phone", "address", "website", "objective",
            ]),
            "education": array_of(string_object(&[
                "id", "school", "degree", "startDate", "endDate", "description",
            ])),
            "experience": array_of(string_object(&[
                "id", "company", "position", "startDate", "endDate", "description",
            ])),
            "skills": array_of(string()),
            "projects": array_of(string_object(&["id", "name", "description", "link"])),
            "certifications": array_of(string()),
        },
        "required": [
            "template", "personalInfo", "education", "experience",
            "skills", "projects", "certifications",
        ],
    })
}
