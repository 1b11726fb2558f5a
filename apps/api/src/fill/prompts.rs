// Prompt text for the AI fill request.

/// Replace: {description}, {json_only_instruction}
pub const FILL_PROMPT_TEMPLATE: &str = r#"Generate a professional resume based on this input: "{description}".
If the input is sparse, use your knowledge to fill in realistic details for a high-quality resume.
Choose the most appropriate template ('modern', 'classic', 'minimal', 'executive', or 'creative') based on the profession or style.
Ensure all IDs are unique strings.

{json_only_instruction}"#;
