// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it and pulls cross-cutting pieces from here.

/// Appended to every prompt sent with a response schema.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with a single JSON object that matches the response schema exactly. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
