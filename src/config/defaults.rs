use crate::ui::OutputFormat;

pub const CONFIG_DIR_NAME: &str = "ebvod";

pub const LOCAL_CONFIG_STEM: &str = ".ebvod";

pub fn default_output_format() -> OutputFormat {
    OutputFormat::Json
}

pub fn default_verbose() -> bool {
    false
}

/// Accepts the usual spellings of a true flag in environment variables.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
