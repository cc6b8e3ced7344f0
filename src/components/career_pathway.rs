// src/components/career_pathway.rs
use serde::Serialize;

pub const STEP_SEPARATOR: &str = " -> ";
pub const STEP_GLYPH: &str = "→";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathwayStep {
    pub label: String,
    pub is_last: bool,
}

/// Splits a pathway such as `"Intern -> Analyst -> Lead"` into ordered steps.
pub fn pathway_steps(pathway: &str) -> Vec<PathwayStep> {
    let labels: Vec<&str> = pathway
        .split(STEP_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let last = labels.len().saturating_sub(1);
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| PathwayStep {
            label: label.to_string(),
            is_last: i == last,
        })
        .collect()
}

/// Plain-text rendering with the separator glyph between steps.
pub fn render_pathway(pathway: &str) -> String {
    let steps = pathway_steps(pathway);
    let mut out = String::new();
    for step in &steps {
        out.push_str(&step.label);
        if !step.is_last {
            out.push(' ');
            out.push_str(STEP_GLYPH);
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_step_has_no_separator() {
        let steps = pathway_steps("Intern -> Analyst -> Lead");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].label, "Intern");
        assert!(!steps[0].is_last);
        assert!(!steps[1].is_last);
        assert!(steps[2].is_last);
        assert_eq!(render_pathway("Intern -> Analyst -> Lead"), "Intern → Analyst → Lead");
    }

    #[test]
    fn single_tag_is_one_step() {
        let steps = pathway_steps("Technology");
        assert_eq!(steps, vec![PathwayStep { label: "Technology".into(), is_last: true }]);
        assert_eq!(render_pathway("Technology"), "Technology");
    }

    #[test]
    fn empty_pathway_has_no_steps() {
        assert!(pathway_steps("").is_empty());
        assert_eq!(render_pathway("   "), "");
    }
}
