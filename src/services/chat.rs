// src/services/chat.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

use crate::{
    components::{career_card::CareerCard, skill_advisor::SkillAdvisor},
    error::AskError,
    message::AskResponse,
    services::ask_client::AskService,
};

pub const GREETING: &str = "Hello! I'm your Career Assistant. Tell me about your skills, interests, or career goals and I'll suggest matching professions.";

pub const APOLOGY: &str =
    "Sorry, I'm having trouble connecting to the career database. Please try again later.";

pub const SAMPLE_QUESTIONS: [&str; 4] = [
    "What careers are good for creative people?",
    "I'm good with numbers, what jobs should I consider?",
    "What are some high-demand tech careers?",
    "I enjoy helping people, what careers match this?",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: MessageRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub result: Option<AskResponse>,
    pub is_error: bool,
}

/// Ticket for the one request in flight.
#[derive(Clone, Debug)]
pub struct PendingAsk {
    pub query: String,
    pub request_id: Uuid,
    epoch: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Answered,
    Failed,
    /// The conversation was cleared while the request was out; nothing appended.
    Stale,
}

/// Conversation controller. Message history is append-only between clears.
#[derive(Debug)]
pub struct Chat {
    draft: String,
    messages: Vec<ChatMessage>,
    is_waiting: bool,
    last_result: Option<AskResponse>,
    cards: Vec<CareerCard>,
    epoch: u64,
    next_id: u64,
    seed_greeting: bool,
}

impl Default for Chat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Chat {
    pub fn new(seed_greeting: bool) -> Self {
        let mut chat = Self {
            draft: String::new(),
            messages: Vec::new(),
            is_waiting: false,
            last_result: None,
            cards: Vec::new(),
            epoch: 0,
            next_id: 1,
            seed_greeting,
        };
        chat.seed();
        chat
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_waiting(&self) -> bool {
        self.is_waiting
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Copies a sample question into the draft. Returns false for an unknown index.
    pub fn use_sample_question(&mut self, index: usize) -> bool {
        match SAMPLE_QUESTIONS.get(index) {
            Some(q) => {
                self.draft = q.to_string();
                true
            }
            None => false,
        }
    }

    pub fn last_result(&self) -> Option<&AskResponse> {
        self.last_result.as_ref()
    }

    pub fn cards(&self) -> &[CareerCard] {
        &self.cards
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut CareerCard> {
        self.cards.get_mut(index)
    }

    /// Advisor for the top match of the latest result, if any.
    pub fn advisor(&self) -> Option<SkillAdvisor> {
        self.cards.first().map(|c| SkillAdvisor::from_record(c.record()))
    }

    /// True when only the seeded state is showing.
    pub fn is_fresh(&self) -> bool {
        !self.messages.iter().any(|m| m.role == MessageRole::User)
    }

    /// Optimistically records the user turn and hands back the request to run.
    ///
    /// Returns `None` for blank input or while another request is in flight.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingAsk> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }
        if self.is_waiting {
            debug!("submit ignored while a request is in flight");
            return None;
        }

        self.push(MessageRole::User, query.to_string(), None, false);
        self.draft.clear();
        self.is_waiting = true;

        Some(PendingAsk {
            query: query.to_string(),
            request_id: Uuid::new_v4(),
            epoch: self.epoch,
        })
    }

    /// Lands the outcome of a request started by [`Chat::begin_submit`].
    pub fn complete(
        &mut self,
        ticket: PendingAsk,
        outcome: Result<AskResponse, AskError>,
    ) -> Completion {
        self.is_waiting = false;

        if ticket.epoch != self.epoch {
            info!(request_id = %ticket.request_id, "dropping response for a cleared conversation");
            return Completion::Stale;
        }

        match outcome {
            Ok(response) => {
                self.cards = response.matches.iter().cloned().map(CareerCard::new).collect();
                self.push(
                    MessageRole::Bot,
                    response.suggestion.clone(),
                    Some(response.clone()),
                    false,
                );
                self.last_result = Some(response);
                Completion::Answered
            }
            Err(err) => {
                error!(request_id = %ticket.request_id, error = %err, "ask request failed");
                self.cards.clear();
                self.last_result = None;
                self.push(MessageRole::Bot, APOLOGY.to_string(), None, true);
                Completion::Failed
            }
        }
    }

    /// Runs a whole submit cycle inline. Returns false when the input was ignored.
    pub async fn submit<S>(&mut self, service: &S, text: &str) -> bool
    where
        S: AskService + ?Sized,
    {
        let Some(ticket) = self.begin_submit(text) else {
            return false;
        };
        let outcome = run_ask(service, &ticket).await;
        self.complete(ticket, outcome);
        true
    }

    /// Back to the seeded state. An in-flight request is left to finish but
    /// its response will be discarded.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.last_result = None;
        self.cards.clear();
        self.epoch += 1;
        self.seed();
    }

    fn seed(&mut self) {
        if self.seed_greeting {
            self.push(MessageRole::Bot, GREETING.to_string(), None, false);
        }
    }

    fn push(&mut self, role: MessageRole, text: String, result: Option<AskResponse>, is_error: bool) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text,
            created_at: Utc::now(),
            result,
            is_error,
        });
    }
}

/// Performs the outbound call for `ticket` inside a span tagged with its request id.
pub async fn run_ask<S>(service: &S, ticket: &PendingAsk) -> Result<AskResponse, AskError>
where
    S: AskService + ?Sized,
{
    let span = info_span!("ask", request_id = %ticket.request_id);
    service.ask(&ticket.query).instrument(span).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::CareerRecord;

    fn ok(suggestion: &str, roles: &[&str]) -> Result<AskResponse, AskError> {
        Ok(AskResponse {
            suggestion: suggestion.to_string(),
            matches: roles.iter().map(|r| CareerRecord::new(*r)).collect(),
            error: None,
        })
    }

    fn failure() -> Result<AskResponse, AskError> {
        Err(AskError::Status { status: 503, body: String::new() })
    }

    #[test]
    fn begin_submit_is_optimistic() {
        let mut chat = Chat::new(false);
        chat.set_draft("hello");
        let ticket = chat.begin_submit("  hello  ").unwrap();
        assert_eq!(ticket.query, "hello");
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, MessageRole::User);
        assert!(chat.is_waiting());
        assert_eq!(chat.draft(), "");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut chat = Chat::new(true);
        assert!(chat.begin_submit("").is_none());
        assert!(chat.begin_submit("   \n\t").is_none());
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_waiting());
    }

    #[test]
    fn second_submit_refused_while_waiting() {
        let mut chat = Chat::new(false);
        let _ticket = chat.begin_submit("one").unwrap();
        assert!(chat.begin_submit("two").is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn success_builds_cards_in_order() {
        let mut chat = Chat::new(false);
        let ticket = chat.begin_submit("creative jobs").unwrap();
        let done = chat.complete(ticket, ok("Try X", &["Designer", "Engineer"]));

        assert_eq!(done, Completion::Answered);
        assert!(!chat.is_waiting());
        let roles: Vec<_> = chat.cards().iter().map(|c| c.record().role.as_str()).collect();
        assert_eq!(roles, ["Designer", "Engineer"]);
        assert_eq!(chat.advisor().unwrap().role, "Designer");

        let bot = chat.messages().last().unwrap();
        assert_eq!(bot.text, "Try X");
        assert_eq!(bot.result.as_ref(), chat.last_result());
    }

    #[test]
    fn failure_appends_apology_and_drops_result() {
        let mut chat = Chat::new(false);
        let ticket = chat.begin_submit("a").unwrap();
        chat.complete(ticket, ok("first", &["Designer"]));

        let ticket = chat.begin_submit("b").unwrap();
        assert_eq!(chat.complete(ticket, failure()), Completion::Failed);

        let bot = chat.messages().last().unwrap();
        assert_eq!(bot.text, APOLOGY);
        assert!(bot.result.is_none());
        assert!(bot.is_error);
        assert!(chat.last_result().is_none());
        assert!(chat.cards().is_empty());
        assert!(!chat.is_waiting());
    }

    #[test]
    fn stale_completion_after_clear_is_dropped() {
        let mut chat = Chat::new(true);
        let ticket = chat.begin_submit("question").unwrap();
        chat.clear();
        assert!(chat.is_waiting());

        assert_eq!(chat.complete(ticket, ok("late", &["Designer"])), Completion::Stale);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, GREETING);
        assert!(chat.last_result().is_none());
        assert!(!chat.is_waiting());
    }

    #[test]
    fn message_ids_stay_unique_across_clear() {
        let mut chat = Chat::new(true);
        let first = chat.messages()[0].id;
        chat.clear();
        assert_ne!(chat.messages()[0].id, first);
    }

    #[test]
    fn sample_questions_fill_draft() {
        let mut chat = Chat::new(true);
        assert!(chat.use_sample_question(2));
        assert_eq!(chat.draft(), SAMPLE_QUESTIONS[2]);
        assert!(!chat.use_sample_question(SAMPLE_QUESTIONS.len()));
    }
}
