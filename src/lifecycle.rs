//! The article entity and the events it fires while being persisted.
//!
//! Observers are registered on one `Article` instance for one `ArticleEvent`
//! and are awaited one after another, in registration order, whenever that
//! event fires.
use async_trait::async_trait;
use crate::article_store::ArticleStore;
use crate::domain::{NewArticle, SavedArticle, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleEvent {
    /// Fired by `Article::save` right after the row is inserted.
    AfterInsert,
    /// Only fired through an explicit `Article::trigger`.
    Published,
}

/// What an observer gets to see when an event fires.
#[derive(Debug)]
pub struct ArticleEventContext<'a> {
    pub event: ArticleEvent,
    pub sender: &'a SavedArticle,
}

#[async_trait]
pub trait ArticleObserver: Send + Sync {
    async fn on_event(&self, context: &ArticleEventContext<'_>) -> Result<(), anyhow::Error>;
}

/// Outcome of firing one event: how many observers ran and which of them
/// failed. A failing observer does not stop the ones registered after it.
#[derive(Debug)]
pub struct Dispatch {
    pub event: ArticleEvent,
    pub observers_run: usize,
    pub failures: Vec<anyhow::Error>,
}

impl Dispatch {
    /// Collapses the dispatch into the first observer failure, if any.
    pub fn into_result(self) -> Result<(), anyhow::Error> {
        let failed = self.failures.len();
        match self.failures.into_iter().next() {
            None => Ok(()),
            Some(e) => Err(e.context(format!(
                "{} of {} observers failed on {:?}",
                failed, self.observers_run, self.event
            ))),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("Article failed validation: {0}")]
    Validation(ValidationErrors),
    #[error("Article has already been saved")]
    AlreadySaved,
    #[error("Failed to store the article")]
    Store(#[source] anyhow::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum TriggerError {
    #[error("Cannot fire {0:?} on an article that has not been saved")]
    NotSaved(ArticleEvent),
}

enum State {
    Draft,
    Saved(SavedArticle),
}

pub struct Article<'o> {
    name: String,
    description: String,
    observers: Vec<(ArticleEvent, &'o dyn ArticleObserver)>,
    state: State,
}

impl<'o> Article<'o> {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            observers: Vec::new(),
            state: State::Draft,
        }
    }

    pub fn on(&mut self, event: ArticleEvent, observer: &'o dyn ArticleObserver) -> &mut Self {
        self.observers.push((event, observer));
        self
    }

    pub fn validate(&self) -> Result<NewArticle, ValidationErrors> {
        NewArticle::parse(self.name.clone(), self.description.clone())
    }

    pub fn saved(&self) -> Option<&SavedArticle> {
        match &self.state {
            State::Draft => None,
            State::Saved(article) => Some(article),
        }
    }

    /// Validates and inserts the article, then fires `AfterInsert`.
    ///
    /// Nothing is written and no observer runs when validation fails.
    #[tracing::instrument(
        name = "Saving article",
        skip(self, store),
        fields(article_name = %self.name),
    )]
    pub async fn save(&mut self, store: &dyn ArticleStore) -> Result<Dispatch, SaveError> {
        if self.saved().is_some() {
            return Err(SaveError::AlreadySaved);
        }
        let new_article = self.validate().map_err(SaveError::Validation)?;
        let saved = store.insert(&new_article).await.map_err(SaveError::Store)?;
        tracing::info!(article_id = %saved.id, created_at = %saved.created_at, "Article saved");
        self.state = State::Saved(saved);

        Ok(self.fire(ArticleEvent::AfterInsert).await)
    }

    pub async fn trigger(&self, event: ArticleEvent) -> Result<Dispatch, TriggerError> {
        if self.saved().is_none() {
            return Err(TriggerError::NotSaved(event));
        }
        Ok(self.fire(event).await)
    }

    async fn fire(&self, event: ArticleEvent) -> Dispatch {
        let mut dispatch = Dispatch { event, observers_run: 0, failures: Vec::new() };
        let State::Saved(sender) = &self.state else {
            return dispatch;
        };
        let context = ArticleEventContext { event, sender };
        for (_, observer) in self.observers.iter().filter(|(bound, _)| *bound == event) {
            dispatch.observers_run += 1;
            if let Err(e) = observer.on_event(&context).await {
                tracing::error!(error.cause_chain = ?e, ?event, "Article observer failed");
                dispatch.failures.push(e);
            }
        }
        dispatch
    }
}
