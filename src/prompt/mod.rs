//! Operator prompts
//!
//! Handlers ask for input through the [`Prompter`] trait so the same handler
//! code runs against the terminal ([`TerminalPrompter`]) and against a fixed
//! answer script in tests ([`ScriptedPrompter`]).

use dialoguer::{Input, Select};

use crate::error::{Result, TrackerError};

mod scripted;

pub use scripted::{Answer, AskedPrompt, ScriptedPrompter};

/// Source of operator answers
pub trait Prompter {
    /// Single choice from `items`; returns the chosen index
    fn select(&mut self, message: &str, items: &[String]) -> Result<usize>;

    /// Free-text line; empty answers are allowed
    fn input(&mut self, message: &str) -> Result<String>;
}

/// Interactive prompts on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| TrackerError::prompt_failed(e.to_string()))
    }

    fn input(&mut self, message: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TrackerError::prompt_failed(e.to_string()))
    }
}
