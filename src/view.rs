// src/view.rs
//! Page models and template rendering for the browser shell.

use minijinja::Environment;
use serde::Serialize;

use crate::components::career_card::CareerCardView;
use crate::components::career_filter::{Experience, FilterCriteria, Industry, SalaryRange};
use crate::components::skill_advisor::SkillAdvisor;
use crate::services::chat::{Chat, ChatMessage, MessageRole, SAMPLE_QUESTIONS};

pub const PAGE_TEMPLATE: &str = "page.html";

const TEMPLATES: [(&str, &str); 4] = [
    ("page.html", include_str!("../templates/page.html")),
    ("chat.html", include_str!("../templates/chat.html")),
    ("career_card.html", include_str!("../templates/career_card.html")),
    ("career_filter.html", include_str!("../templates/career_filter.html")),
];

/// Template environment. `.html` names get HTML auto-escaping.
pub fn templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub id: u64,
    pub role: MessageRole,
    pub text: String,
    pub time: String,
    pub is_error: bool,
}

impl From<&ChatMessage> for MessageView {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            id: msg.id,
            role: msg.role,
            text: msg.text.clone(),
            time: msg.created_at.format("%H:%M").to_string(),
            is_error: msg.is_error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct FilterControl {
    pub field: &'static str,
    pub label: &'static str,
    pub any_label: &'static str,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Serialize)]
pub struct FilterView {
    pub controls: Vec<FilterControl>,
    pub remote: bool,
    pub summary: String,
}

impl FilterView {
    pub fn new(criteria: &FilterCriteria) -> Self {
        let industry = control(
            ("industry", "Industry", "All Industries"),
            Industry::ALL,
            criteria.industry,
            |o| (o.value(), o.label()),
        );
        let experience = control(
            ("experience", "Experience Level", "Any Experience"),
            Experience::ALL,
            criteria.experience,
            |o| (o.value(), o.label()),
        );
        let salary = control(
            ("salary", "Salary Range", "Any Salary"),
            SalaryRange::ALL,
            criteria.salary,
            |o| (o.value(), o.label()),
        );

        Self {
            controls: vec![industry, experience, salary],
            remote: criteria.remote,
            summary: filter_summary(criteria),
        }
    }
}

/// `heading` is (form field, visible label, "any" label).
fn control<T: Copy + PartialEq>(
    heading: (&'static str, &'static str, &'static str),
    all: &[T],
    current: Option<T>,
    describe: impl Fn(T) -> (&'static str, &'static str),
) -> FilterControl {
    let options = all
        .iter()
        .map(|&opt| {
            let (value, label) = describe(opt);
            SelectOption { value, label, selected: current == Some(opt) }
        })
        .collect();
    let (field, label, any_label) = heading;
    FilterControl { field, label, any_label, options }
}

/// Human summary of the active criteria, e.g. "Finance · Remote".
pub fn filter_summary(criteria: &FilterCriteria) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(i) = criteria.industry {
        parts.push(i.to_string());
    }
    if let Some(e) = criteria.experience {
        parts.push(e.to_string());
    }
    if let Some(s) = criteria.salary {
        parts.push(s.to_string());
    }
    if criteria.remote {
        parts.push("Remote".to_string());
    }
    if parts.is_empty() {
        "Any".to_string()
    } else {
        parts.join(" · ")
    }
}

#[derive(Debug, Serialize)]
pub struct SampleQuestion {
    pub index: usize,
    pub text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PageView {
    pub messages: Vec<MessageView>,
    pub is_waiting: bool,
    pub draft: String,
    pub show_welcome: bool,
    pub samples: Vec<SampleQuestion>,
    pub cards: Vec<CareerCardView>,
    pub advisor: Option<SkillAdvisor>,
    pub filter: FilterView,
}

impl PageView {
    pub fn build(chat: &Chat, criteria: &FilterCriteria) -> Self {
        Self {
            messages: chat.messages().iter().map(MessageView::from).collect(),
            is_waiting: chat.is_waiting(),
            draft: chat.draft().to_string(),
            show_welcome: chat.is_fresh(),
            samples: SAMPLE_QUESTIONS
                .iter()
                .enumerate()
                .map(|(index, &text)| SampleQuestion { index, text })
                .collect(),
            cards: chat.cards().iter().enumerate().map(|(i, c)| c.view(i)).collect(),
            advisor: chat.advisor(),
            filter: FilterView::new(criteria),
        }
    }
}

pub fn render_page(env: &Environment<'_>, page: &PageView) -> Result<String, minijinja::Error> {
    env.get_template(PAGE_TEMPLATE)?.render(page)
}

/// JSON body of `GET /api/transcript`.
#[derive(Debug, Serialize)]
pub struct TranscriptView<'a> {
    pub messages: &'a [ChatMessage],
    pub is_waiting: bool,
    pub filters: FilterCriteria,
}
