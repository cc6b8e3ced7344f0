// src/services/mod.rs
pub mod ask_client;
pub mod chat;
