//! Text helpers for rendering

/// Treat blank strings the same as missing values
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fit a value into `width` characters, ending with an ellipsis when cut
pub fn truncate_to_width(value: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let count = value.chars().count();
    if count <= width {
        return value.to_string();
    }

    let mut truncated: String = value.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}
