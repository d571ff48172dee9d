//! Corporate stamp renderer.
//!
//! Turns profile fields and a date into a circular SVG seal. Rendering is pure:
//! the same input always yields the same markup.

use askama::Template;

/// Font size for the name line when it fits comfortably.
const NAME_FONT_SIZE: u32 = 22;
/// Name lines longer than this many characters are drawn smaller.
const NAME_FIT_CHARS: usize = 16;

/// Input to [`render`]. Missing values are empty strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StampRequest<'a> {
    /// Company drawn around the top of the seal.
    pub company: &'a str,
    pub full_name: &'a str,
    pub department: &'a str,
    pub position: &'a str,
    /// Date shown verbatim, e.g. "2024-01-01".
    pub date: &'a str,
}

/// A rendered stamp.
///
/// Call [`Template::render`] for the SVG document. Text is XML-escaped.
#[derive(Debug, Clone, Template)]
#[template(path = "stamp.svg", escape = "html")]
pub struct StampSvg {
    pub company: String,
    pub full_name: String,
    pub department_line: String,
    pub position: String,
    pub date: String,
    pub name_font_size: u32,
}

/// Build the stamp for a profile.
///
/// Name, department and position are uppercased. The department line reads
/// `<DEPARTMENT> DIVISION`, or is empty when there is no department.
#[must_use]
pub fn render(request: &StampRequest<'_>) -> StampSvg {
    let full_name = request.full_name.trim().to_uppercase();
    let department = request.department.trim();
    let department_line = if department.is_empty() {
        String::new()
    } else {
        format!("{} DIVISION", department.to_uppercase())
    };

    StampSvg {
        company: request.company.trim().to_uppercase(),
        name_font_size: name_font_size(&full_name),
        full_name,
        department_line,
        position: request.position.trim().to_uppercase(),
        date: request.date.to_string(),
    }
}

/// Shrink long names so they stay inside the inner ring.
fn name_font_size(name: &str) -> u32 {
    let len = name.chars().count();
    if len <= NAME_FIT_CHARS {
        return NAME_FONT_SIZE;
    }
    #[allow(clippy::cast_possible_truncation)] // Bounded by NAME_FONT_SIZE
    let scaled = (NAME_FONT_SIZE as usize * NAME_FIT_CHARS / len) as u32;
    scaled.max(12)
}
