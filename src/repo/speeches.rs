use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use super::{read_state, write_state, RepoError, RepoResult, SpeechRepo};
use crate::ids::new_id;
use crate::models::{Speech, SpeechInput};
use crate::validation::validate_speech_input;

/// Daily speeches, at most one per calendar date.
#[derive(Clone, Default)]
pub struct SpeechStore {
    speeches: Arc<RwLock<Vec<Speech>>>,
}

impl SpeechStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Later records whose date is already taken are dropped.
    pub fn with_speeches(speeches: Vec<Speech>) -> Self {
        let mut unique: Vec<Speech> = Vec::with_capacity(speeches.len());
        for speech in speeches {
            if unique.iter().any(|s| s.scheduled_date == speech.scheduled_date) {
                warn!(date = %speech.scheduled_date, "dropping seeded speech with duplicate date");
                continue;
            }
            unique.push(speech);
        }
        Self {
            speeches: Arc::new(RwLock::new(unique)),
        }
    }
}

fn date_taken(speeches: &[Speech], date: NaiveDate, except_id: Option<&str>) -> bool {
    speeches
        .iter()
        .any(|s| s.scheduled_date == date && Some(s.id.as_str()) != except_id)
}

impl SpeechRepo for SpeechStore {
    fn list_speeches(&self) -> Vec<Speech> {
        read_state(&self.speeches).clone()
    }

    fn get_speech(&self, id: &str) -> Option<Speech> {
        read_state(&self.speeches).iter().find(|s| s.id == id).cloned()
    }

    fn find_speech_by_date(&self, date: NaiveDate) -> Option<Speech> {
        read_state(&self.speeches)
            .iter()
            .find(|s| s.scheduled_date == date)
            .cloned()
    }

    fn add_speech(&self, input: SpeechInput) -> RepoResult<Speech> {
        validate_speech_input(&input).map_err(RepoError::Validation)?;
        let mut speeches = write_state(&self.speeches);
        if date_taken(&speeches, input.scheduled_date, None) {
            return Err(RepoError::DuplicateSpeechDate(input.scheduled_date));
        }
        let speech = Speech {
            id: new_id(),
            title: input.title,
            content: input.content,
            scheduled_date: input.scheduled_date,
            status: input.status,
            created_at: Utc::now(),
        };
        speeches.push(speech.clone());
        drop(speeches);
        info!(id = %speech.id, date = %speech.scheduled_date, "speech scheduled");
        Ok(speech)
    }

    fn update_speech(&self, id: &str, input: SpeechInput) -> RepoResult<Option<Speech>> {
        validate_speech_input(&input).map_err(RepoError::Validation)?;
        let mut speeches = write_state(&self.speeches);
        if !speeches.iter().any(|s| s.id == id) {
            return Ok(None);
        }
        if date_taken(&speeches, input.scheduled_date, Some(id)) {
            return Err(RepoError::DuplicateSpeechDate(input.scheduled_date));
        }
        let Some(speech) = speeches.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        speech.title = input.title;
        speech.content = input.content;
        speech.scheduled_date = input.scheduled_date;
        speech.status = input.status;

        let updated = speech.clone();
        drop(speeches);
        info!(%id, date = %updated.scheduled_date, "speech updated");
        Ok(Some(updated))
    }

    fn delete_speech(&self, id: &str) -> bool {
        let mut speeches = write_state(&self.speeches);
        let before = speeches.len();
        speeches.retain(|s| s.id != id);
        let removed = speeches.len() < before;
        drop(speeches);
        if removed {
            info!(%id, "speech deleted");
        }
        removed
    }
}
