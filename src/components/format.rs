// src/components/format.rs
//! Display strings derived from a raw career record.

use serde::Serialize;

pub const SALARY_PLACEHOLDER: &str = "Not specified";
pub const DEFAULT_PATHWAY_COLOR: &str = "#6b7280";

/// Salary with thousands separators, or a placeholder when absent or zero.
///
/// Fractional values are rounded to the nearest whole rupee.
pub fn format_salary(salary: Option<f64>) -> String {
    let value = match salary {
        Some(v) if v.is_finite() && v.round() != 0.0 => v.round() as i64,
        _ => return SALARY_PLACEHOLDER.to_string(),
    };

    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn education_display(education: &[String]) -> String {
    match education.len() {
        0 => "Flexible".to_string(),
        1 => "1 path".to_string(),
        n => format!("{n} paths"),
    }
}

pub fn skills_display(skills: &[String]) -> String {
    match skills.len() {
        0 => "Basic".to_string(),
        n @ 1..=3 => format!("{n} core"),
        n => format!("{n} skills"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pathway {
    Technology,
    Creative,
    Healthcare,
    Business,
    Finance,
    Education,
    Science,
    Engineering,
    Social,
    Law,
}

impl Pathway {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "technology" => Some(Pathway::Technology),
            "creative" => Some(Pathway::Creative),
            "healthcare" => Some(Pathway::Healthcare),
            "business" => Some(Pathway::Business),
            "finance" => Some(Pathway::Finance),
            "education" => Some(Pathway::Education),
            "science" => Some(Pathway::Science),
            "engineering" => Some(Pathway::Engineering),
            "social" => Some(Pathway::Social),
            "law" => Some(Pathway::Law),
            _ => None,
        }
    }
}

/// Theme color for a pathway tag; unknown tags get [`DEFAULT_PATHWAY_COLOR`].
pub fn pathway_color(tag: &str) -> &'static str {
    match Pathway::from_tag(tag) {
        Some(Pathway::Technology) => "#3b82f6",
        Some(Pathway::Creative) => "#ec4899",
        Some(Pathway::Healthcare) => "#10b981",
        Some(Pathway::Business) => "#f59e0b",
        Some(Pathway::Finance) => "#14b8a6",
        Some(Pathway::Education) => "#8b5cf6",
        Some(Pathway::Science) => "#06b6d4",
        Some(Pathway::Engineering) => "#ef4444",
        Some(Pathway::Social) => "#f97316",
        Some(Pathway::Law) => "#64748b",
        None => DEFAULT_PATHWAY_COLOR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathwayIcon {
    Laptop,
    Palette,
    Heart,
    Briefcase,
    Chart,
    Book,
    Flask,
    Gear,
    People,
    Scales,
    Star,
}

impl PathwayIcon {
    pub fn name(self) -> &'static str {
        match self {
            PathwayIcon::Laptop => "laptop",
            PathwayIcon::Palette => "palette",
            PathwayIcon::Heart => "heart",
            PathwayIcon::Briefcase => "briefcase",
            PathwayIcon::Chart => "chart",
            PathwayIcon::Book => "book",
            PathwayIcon::Flask => "flask",
            PathwayIcon::Gear => "gear",
            PathwayIcon::People => "people",
            PathwayIcon::Scales => "scales",
            PathwayIcon::Star => "star",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PathwayIcon::Laptop => "💻",
            PathwayIcon::Palette => "🎨",
            PathwayIcon::Heart => "❤️",
            PathwayIcon::Briefcase => "💼",
            PathwayIcon::Chart => "📈",
            PathwayIcon::Book => "📚",
            PathwayIcon::Flask => "🧪",
            PathwayIcon::Gear => "⚙️",
            PathwayIcon::People => "🤝",
            PathwayIcon::Scales => "⚖️",
            PathwayIcon::Star => "⭐",
        }
    }
}

/// Icon for a pathway tag; unknown tags get [`PathwayIcon::Star`].
pub fn pathway_icon(tag: &str) -> PathwayIcon {
    match Pathway::from_tag(tag) {
        Some(Pathway::Technology) => PathwayIcon::Laptop,
        Some(Pathway::Creative) => PathwayIcon::Palette,
        Some(Pathway::Healthcare) => PathwayIcon::Heart,
        Some(Pathway::Business) => PathwayIcon::Briefcase,
        Some(Pathway::Finance) => PathwayIcon::Chart,
        Some(Pathway::Education) => PathwayIcon::Book,
        Some(Pathway::Science) => PathwayIcon::Flask,
        Some(Pathway::Engineering) => PathwayIcon::Gear,
        Some(Pathway::Social) => PathwayIcon::People,
        Some(Pathway::Law) => PathwayIcon::Scales,
        None => PathwayIcon::Star,
    }
}
