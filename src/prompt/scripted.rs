use std::collections::VecDeque;

use super::Prompter;
use crate::error::{Result, TrackerError};

/// One prepared answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index into the offered items
    Select(usize),
    /// Free-text reply
    Text(String),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// A prompt as it was presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskedPrompt {
    pub message: String,
    /// Offered items; empty for free-text prompts
    pub items: Vec<String>,
}

/// Replays prepared answers in order and records every prompt it was shown.
///
/// Running out of answers, or meeting the wrong kind of answer, is reported
/// as a prompt failure, the same way a closed terminal would be.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<AskedPrompt>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self { answers: answers.into_iter().collect(), asked: Vec::new() }
    }

    /// Prompts shown so far, oldest first
    pub fn asked(&self) -> &[AskedPrompt] {
        &self.asked
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, message: &str) -> Result<Answer> {
        self.answers.pop_front().ok_or_else(|| {
            TrackerError::prompt_failed(format!("no scripted answer for '{message}'"))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> Result<usize> {
        self.asked.push(AskedPrompt { message: message.to_string(), items: items.to_vec() });

        match self.next_answer(message)? {
            Answer::Select(idx) => Ok(idx),
            Answer::Text(text) => Err(TrackerError::prompt_failed(format!(
                "expected a selection for '{message}', got text '{text}'"
            ))),
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        self.asked.push(AskedPrompt { message: message.to_string(), items: Vec::new() });

        match self.next_answer(message)? {
            Answer::Text(text) => Ok(text),
            Answer::Select(idx) => Err(TrackerError::prompt_failed(format!(
                "expected text for '{message}', got selection {idx}"
            ))),
        }
    }
}
