//! UI state of the games table and its event-driven update function.
//!
//! [`GameRecordManager`] never touches the network. Every operation hands
//! back the [`Request`] to run; the caller executes it (see
//! [`Request::execute`]) and feeds the [`Outcome`] into
//! [`GameRecordManager::complete`]. Mutations always answer with a
//! follow-up [`Request::List`], so the table is only ever a server snapshot.

use crate::api::GamesClient;
use crate::games::{AppId, FieldError, FormField, GameForm, GameRecord};
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    Create(GameRecord),
    Update(AppId, GameRecord),
    Delete(AppId),
}

impl Request {
    pub async fn execute(self, client: &GamesClient) -> Outcome {
        match self {
            Request::List => Outcome::Listed(client.list_games().await),
            Request::Create(record) => Outcome::Saved(client.create_game(&record).await),
            Request::Update(app_id, record) => {
                Outcome::Saved(client.update_game(&app_id, &record).await)
            }
            Request::Delete(app_id) => Outcome::Deleted(client.delete_game(&app_id).await),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Listed(Result<Vec<GameRecord>>),
    Saved(Result<()>),
    Deleted(Result<()>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    /// Editing the record with this id; the id input is locked.
    Edit(AppId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub values: GameForm,
    pub errors: Vec<FieldError>,
    pub saving: bool,
}

impl FormState {
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Game",
            FormMode::Edit(_) => "Edit Game",
        }
    }

    pub fn app_id_locked(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Default)]
pub struct GameRecordManager {
    games: Vec<GameRecord>,
    form: Option<FormState>,
    mounted: bool,
    status: Option<String>,
}

impl GameRecordManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        self.form.as_mut()
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Initial load. Only the first call asks for a List.
    pub fn mount(&mut self) -> Option<Request> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.list())
    }

    pub fn list(&self) -> Request {
        Request::List
    }

    /// True while a Create/Update from the open form is in flight.
    pub fn is_saving(&self) -> bool {
        self.form.as_ref().is_some_and(|f| f.saving)
    }

    // The form is pinned until its save completes.
    pub fn begin_create(&mut self) {
        if self.is_saving() {
            log::debug!("Ignoring Add while a save is in flight");
            return;
        }
        self.form = Some(FormState {
            mode: FormMode::Create,
            values: GameForm::empty(),
            errors: Vec::new(),
            saving: false,
        });
    }

    pub fn begin_edit(&mut self, record: &GameRecord) {
        if self.is_saving() {
            log::debug!("Ignoring Edit while a save is in flight");
            return;
        }
        self.form = Some(FormState {
            mode: FormMode::Edit(record.app_id.clone()),
            values: GameForm::from_record(record),
            errors: Vec::new(),
            saving: false,
        });
    }

    pub fn dismiss(&mut self) {
        if self.is_saving() {
            log::debug!("Ignoring dismiss while a save is in flight");
            return;
        }
        self.form = None;
    }

    /// Validate the open form and produce Create or Update.
    ///
    /// Returns `None` when no form is open, a save is already in flight, or
    /// validation fails. In the last case the form stays open with its errors.
    pub fn save(&mut self) -> Option<Request> {
        let form = self.form.as_mut()?;
        if form.saving {
            return None;
        }

        match form.values.validate() {
            Ok(record) => {
                form.errors.clear();
                form.saving = true;
                Some(match &form.mode {
                    FormMode::Create => Request::Create(record),
                    // The key stays the one the record was opened with
                    FormMode::Edit(app_id) => Request::Update(
                        app_id.clone(),
                        GameRecord {
                            app_id: app_id.clone(),
                            ..record
                        },
                    ),
                })
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("Form validation failed: {}", error.message);
                }
                form.errors = errors;
                None
            }
        }
    }

    pub fn delete(&self, app_id: &AppId) -> Request {
        Request::Delete(app_id.clone())
    }

    /// Apply a finished request. Returns the reload to run after mutations.
    pub fn complete(&mut self, outcome: Outcome) -> Option<Request> {
        match outcome {
            Outcome::Listed(Ok(games)) => {
                self.games = games;
                None
            }
            Outcome::Listed(Err(e)) => {
                log::error!("Error fetching games: {}", e);
                self.status = Some(format!("Failed to load games: {}", e));
                None
            }
            Outcome::Saved(result) => {
                if let Err(e) = result {
                    log::error!("Error saving game: {}", e);
                    self.status = Some(format!("Failed to save game: {}", e));
                }
                if self.is_saving() {
                    self.form = None;
                }
                Some(self.list())
            }
            Outcome::Deleted(result) => {
                if let Err(e) = result {
                    log::error!("Error deleting game: {}", e);
                    self.status = Some(format!("Failed to delete game: {}", e));
                }
                Some(self.list())
            }
        }
    }
}
