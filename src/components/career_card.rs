// src/components/career_card.rs
use serde::Serialize;

use super::career_pathway::{PathwayStep, pathway_steps, render_pathway};
use super::format::{
    education_display, format_salary, pathway_color, pathway_icon, skills_display,
};
use crate::message::CareerRecord;

pub const UNKNOWN_ROLE: &str = "Unnamed role";
pub const NO_DESCRIPTION: &str = "No description available.";

/// Per-instance UI flags. Nothing outside the owning card reads or writes these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CardState {
    pub expanded: bool,
    pub bookmarked: bool,
}

#[derive(Debug, Clone)]
pub struct CareerCard {
    record: CareerRecord,
    state: CardState,
}

impl CareerCard {
    pub fn new(record: CareerRecord) -> Self {
        Self { record, state: CardState::default() }
    }

    pub fn record(&self) -> &CareerRecord {
        &self.record
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Card body click.
    pub fn toggle_expand(&mut self) -> bool {
        self.state.expanded = !self.state.expanded;
        self.state.expanded
    }

    /// Bookmark control click. Leaves `expanded` untouched.
    pub fn toggle_bookmark(&mut self) -> bool {
        self.state.bookmarked = !self.state.bookmarked;
        self.state.bookmarked
    }

    pub fn view(&self, index: usize) -> CareerCardView {
        let r = &self.record;
        let icon = pathway_icon(&r.pathway);
        CareerCardView {
            index,
            role: non_empty_or(&r.role, UNKNOWN_ROLE),
            pathway: r.pathway.clone(),
            pathway_steps: pathway_steps(&r.pathway),
            pathway_label: render_pathway(&r.pathway),
            pathway_color: pathway_color(&r.pathway),
            pathway_icon: icon.name(),
            pathway_glyph: icon.glyph(),
            salary: format_salary(r.avg_salary_inr),
            education_summary: education_display(&r.education),
            skills_summary: skills_display(&r.skills_core),
            description: non_empty_or(&r.description, NO_DESCRIPTION),
            industry: r.industry.clone(),
            skills_core: r.skills_core.clone(),
            education: r.education.clone(),
            expanded: self.state.expanded,
            bookmarked: self.state.bookmarked,
        }
    }
}

/// Everything the card template needs, already formatted.
#[derive(Debug, Clone, Serialize)]
pub struct CareerCardView {
    pub index: usize,
    pub role: String,
    pub pathway: String,
    pub pathway_steps: Vec<PathwayStep>,
    pub pathway_label: String,
    pub pathway_color: &'static str,
    pub pathway_icon: &'static str,
    pub pathway_glyph: &'static str,
    pub salary: String,
    pub education_summary: String,
    pub skills_summary: String,
    pub description: String,
    pub industry: Option<String>,
    pub skills_core: Vec<String>,
    pub education: Vec<String>,
    pub expanded: bool,
    pub bookmarked: bool,
}

fn non_empty_or(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
