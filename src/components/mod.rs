// src/components/mod.rs
pub mod career_card;
pub mod career_filter;
pub mod career_pathway;
pub mod format;
pub mod skill_advisor;
