use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::debug;

use crate::utils::validation::{parse_price, parse_quantity, validate_name};

/// Source of user answers for a shopping session.
///
/// Implementations keep asking until they get an acceptable value, so callers
/// only ever see validated input.
pub trait Prompter {
    /// Non-blank text, trimmed. An empty answer takes `default` when given.
    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Free text; a blank answer is `None`.
    fn ask_optional_text(&mut self, prompt: &str) -> Result<Option<String>>;

    /// A non-negative, finite price.
    fn ask_price(&mut self, prompt: &str) -> Result<f64>;

    /// A non-negative whole number.
    fn ask_quantity(&mut self, prompt: &str) -> Result<u32>;
}

/// Interactive prompts on the terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| validate_name(input).map(|_| ()));

        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        let answer = input.interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn ask_optional_text(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn ask_price(&mut self, prompt: &str) -> Result<f64> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| parse_price(input).map(|_| ()))
            .interact_text()?;

        Ok(parse_price(&answer)?)
    }

    fn ask_quantity(&mut self, prompt: &str) -> Result<u32> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| parse_quantity(input).map(|_| ()))
            .interact_text()?;

        Ok(parse_quantity(&answer)?)
    }
}

/// Replays a fixed list of answers, skipping the ones that fail validation
/// the way the terminal would re-prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, including re-prompts.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer left for prompt '{}'", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        loop {
            let answer = self.next_answer(prompt)?;
            if let (Some(default), true) = (default, answer.trim().is_empty()) {
                return Ok(default.to_string());
            }
            match validate_name(&answer) {
                Ok(text) => return Ok(text.to_string()),
                Err(e) => debug!("Rejected answer '{}' for '{}': {}", answer, prompt, e),
            }
        }
    }

    fn ask_optional_text(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.next_answer(prompt)?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn ask_price(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.next_answer(prompt)?;
            match parse_price(&answer) {
                Ok(price) => return Ok(price),
                Err(e) => debug!("Rejected answer '{}' for '{}': {}", answer, prompt, e),
            }
        }
    }

    fn ask_quantity(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let answer = self.next_answer(prompt)?;
            match parse_quantity(&answer) {
                Ok(quantity) => return Ok(quantity),
                Err(e) => debug!("Rejected answer '{}' for '{}': {}", answer, prompt, e),
            }
        }
    }
}
