use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{Choice, Prompter, TextPrompt};

/// A scripted reply to the next question.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    /// Accept whatever default the question offers.
    Default,
    Toggle(bool),
    Select(Vec<usize>),
    Confirm(bool),
    /// Abort the session, as Ctrl-C would.
    Cancel,
}

/// Prompter that replays a fixed list of answers and records every question.
#[derive(Default)]
#[allow(dead_code)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
    defaults: RefCell<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), ..Default::default() }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    /// Every question asked so far, re-asks included.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Defaults offered for each time the text question `message` was asked.
    pub fn defaults_offered(&self, message: &str) -> Vec<String> {
        self.defaults
            .borrow()
            .iter()
            .filter(|(asked, _)| asked == message)
            .map(|(_, default)| default.clone())
            .collect()
    }

    fn next(&self, message: &str) -> Answer {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for '{message}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: TextPrompt<'_>) -> Result<String, AppError> {
        loop {
            self.defaults
                .borrow_mut()
                .push((prompt.message.to_string(), prompt.default.clone()));
            let value = match self.next(prompt.message) {
                Answer::Text(text) if !text.is_empty() => text,
                Answer::Text(_) | Answer::Default => prompt.default.clone(),
                Answer::Cancel => return Err(AppError::Cancelled),
                other => panic!("expected a text answer for '{}', got {other:?}", prompt.message),
            };
            match prompt.validate {
                Some(validate) if validate(&value).is_err() => continue,
                _ => return Ok(value),
            }
        }
    }

    fn toggle(&self, message: &str, default: bool) -> Result<bool, AppError> {
        match self.next(message) {
            Answer::Toggle(value) => Ok(value),
            Answer::Default => Ok(default),
            Answer::Cancel => Err(AppError::Cancelled),
            other => panic!("expected a toggle answer for '{message}', got {other:?}"),
        }
    }

    fn multi_select(&self, message: &str, choices: &[Choice]) -> Result<Vec<usize>, AppError> {
        match self.next(message) {
            Answer::Select(mut picked) => {
                assert!(
                    picked.iter().all(|&index| index < choices.len()),
                    "selection {picked:?} out of range for '{message}'"
                );
                picked.sort_unstable();
                Ok(picked)
            }
            Answer::Default => Ok(Vec::new()),
            Answer::Cancel => Err(AppError::Cancelled),
            other => panic!("expected a selection for '{message}', got {other:?}"),
        }
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError> {
        match self.next(message) {
            Answer::Confirm(value) => Ok(value),
            Answer::Default => Ok(default),
            Answer::Cancel => Err(AppError::Cancelled),
            other => panic!("expected a confirmation for '{message}', got {other:?}"),
        }
    }
}
