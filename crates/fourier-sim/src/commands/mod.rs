pub mod presets;
pub mod sweep;
