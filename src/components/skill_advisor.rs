// src/components/skill_advisor.rs
use serde::Serialize;

use crate::message::CareerRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub url: &'static str,
}

pub const RESOURCES: [Resource; 2] = [
    Resource { name: "Coursera", url: "https://www.coursera.org" },
    Resource { name: "YouTube", url: "https://www.youtube.com" },
];

/// Skill-gap summary for the top match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillAdvisor {
    pub role: String,
    pub must_learn: String,
    pub optional: String,
    pub resources: [Resource; 2],
}

impl SkillAdvisor {
    pub fn from_record(record: &CareerRecord) -> Self {
        Self {
            role: record.role.clone(),
            must_learn: record.skills_core.join(", "),
            optional: record.skills_nice.join(", "),
            resources: RESOURCES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_skill_lists() {
        let record = CareerRecord {
            skills_core: vec!["Figma".into(), "Typography".into()],
            skills_nice: vec!["HTML".into()],
            ..CareerRecord::new("Designer")
        };
        let advisor = SkillAdvisor::from_record(&record);
        assert_eq!(advisor.role, "Designer");
        assert_eq!(advisor.must_learn, "Figma, Typography");
        assert_eq!(advisor.optional, "HTML");
        assert_eq!(advisor.resources[0].name, "Coursera");
    }

    #[test]
    fn absent_lists_join_empty() {
        let advisor = SkillAdvisor::from_record(&CareerRecord::new("Engineer"));
        assert_eq!(advisor.must_learn, "");
        assert_eq!(advisor.optional, "");
    }
}
