pub mod ids;
pub mod presets;
pub mod resume;
