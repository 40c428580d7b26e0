use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use crate::article_store::ArticleStore;
use crate::domain::{MailingList, ValidationErrors};
use crate::email_client::EmailClient;
use crate::lifecycle::{Article, ArticleEvent, SaveError};
use crate::notify_subscribers::NotifySubscribers;

#[derive(serde::Deserialize)]
pub struct FormData {
    name: String,
    description: String,
}

/// When subscribers hear about a new article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// As part of the save, through `ArticleEvent::AfterInsert`.
    OnInsert,
    /// Once the save has returned, by triggering `ArticleEvent::Published`.
    OnPublish,
}

impl Announcement {
    pub fn event(self) -> ArticleEvent {
        match self {
            Announcement::OnInsert => ArticleEvent::AfterInsert,
            Announcement::OnPublish => ArticleEvent::Published,
        }
    }

    pub fn confirmation(self) -> &'static str {
        match self {
            Announcement::OnInsert => "Email sent successfully!",
            Announcement::OnPublish => "Emails have been sent",
        }
    }
}

#[derive(thiserror::Error)]
pub enum SubmitArticleError {
    #[error("Article failed validation: {0}")]
    ValidationError(ValidationErrors),
    #[error("Failed to notify subscribers")]
    NotificationError(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmitArticleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        super::error_chain_fmt(self, f)
    }
}

impl From<SaveError> for SubmitArticleError {
    fn from(e: SaveError) -> Self {
        match e {
            SaveError::Validation(errors) => SubmitArticleError::ValidationError(errors),
            e => SubmitArticleError::UnexpectedError(e.into()),
        }
    }
}

impl ResponseError for SubmitArticleError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitArticleError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubmitArticleError::NotificationError(_) | SubmitArticleError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SubmitArticleError::ValidationError(errors) => HttpResponse::BadRequest().json(errors),
            _ => HttpResponse::build(self.status_code()).finish(),
        }
    }
}

/// Build an article, hook the subscriber notification onto it, and save it.
///
/// Returns the confirmation to show the caller once every subscriber has
/// been notified.
#[tracing::instrument(
    name = "Announcing a new article",
    skip(name, description, store, email_client, mailing_list),
    fields(article_name = %name),
)]
pub async fn announce_article(
    name: String,
    description: String,
    announcement: Announcement,
    store: &dyn ArticleStore,
    email_client: &EmailClient,
    mailing_list: &MailingList,
) -> Result<&'static str, SubmitArticleError> {
    let hook = NotifySubscribers::new(email_client, mailing_list);
    let mut article = Article::new(name, description);
    article.on(announcement.event(), &hook);

    let dispatch = article.save(store).await?;
    let dispatch = match announcement {
        Announcement::OnInsert => dispatch,
        Announcement::OnPublish => article
            .trigger(ArticleEvent::Published)
            .await
            .context("Failed to publish a saved article")?,
    };
    dispatch.into_result().map_err(SubmitArticleError::NotificationError)?;

    Ok(announcement.confirmation())
}

#[tracing::instrument(
    name = "Submitting a new article",
    skip(form, store, email_client, mailing_list),
)]
pub async fn submit_article(
    form: web::Form<FormData>,
    store: web::Data<dyn ArticleStore>,
    email_client: web::Data<EmailClient>,
    mailing_list: web::Data<MailingList>,
) -> Result<HttpResponse, SubmitArticleError> {
    let FormData { name, description } = form.into_inner();
    let confirmation = announce_article(
        name,
        description,
        Announcement::OnInsert,
        store.get_ref(),
        &email_client,
        &mailing_list,
    )
    .await?;
    Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(confirmation))
}

#[tracing::instrument(
    name = "Publishing a new article",
    skip(form, store, email_client, mailing_list),
)]
pub async fn publish_article(
    form: web::Form<FormData>,
    store: web::Data<dyn ArticleStore>,
    email_client: web::Data<EmailClient>,
    mailing_list: web::Data<MailingList>,
) -> Result<HttpResponse, SubmitArticleError> {
    let FormData { name, description } = form.into_inner();
    let confirmation = announce_article(
        name,
        description,
        Announcement::OnPublish,
        store.get_ref(),
        &email_client,
        &mailing_list,
    )
    .await?;
    Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(confirmation))
}
