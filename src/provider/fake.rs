//! In-memory match source for service and scheduler tests.

use std::{collections::HashMap, sync::Mutex};

use serenity::async_trait;

use crate::{error::AppError, model::football::Match, provider::MatchSource};

#[derive(Default)]
pub struct FakeMatchSource {
    current: Mutex<Option<u32>>,
    rounds: Mutex<HashMap<u32, Vec<Match>>>,
}

impl FakeMatchSource {
    pub fn new(current: u32) -> Self {
        let source = Self::default();
        source.set_current(current);
        source
    }

    pub fn set_current(&self, current: u32) {
        *self.current.lock().unwrap() = Some(current);
    }

    pub fn set_round(&self, number: u32, matches: Vec<Match>) {
        self.rounds.lock().unwrap().insert(number, matches);
    }
}

#[async_trait]
impl MatchSource for FakeMatchSource {
    async fn current_match_day(&self) -> Result<u32, AppError> {
        self.current
            .lock()
            .unwrap()
            .ok_or_else(|| AppError::NotFound("No current match day".to_string()))
    }

    async fn fetch_match_day(&self, number: u32) -> Result<Vec<Match>, AppError> {
        Ok(self
            .rounds
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .unwrap_or_default())
    }
}
