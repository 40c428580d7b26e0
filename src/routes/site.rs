use actix_web::{web, HttpResponse};
use crate::article_store::ArticleStore;
use crate::domain::MailingList;
use crate::email_client::EmailClient;
use super::{announce_article, Announcement, SubmitArticleError};

pub const TEST_ARTICLE_NAME: &str =
    "День Святого Валентина приближается ? Вот дерьмо!Я забыл снова завести девушку!";
pub const TEST_ARTICLE_DESCRIPTION: &str =
    "Бендер злится на Фрая за то, что он встречается с роботом. Держись подальше от наших женщин. У тебя металлическая лихорадка, парень. Лихорадка металла";

pub const TEST_NEW_ARTICLE_NAME: &str =
    "Valentine's Day's coming? Aw crap! I forgot to get a girlfriend again!";
pub const TEST_NEW_ARTICLE_DESCRIPTION: &str =
    "Bender is angry at Fry for dating a robot. Stay away from our women. You've got metal fever, boy . Metal fever";

/// Saves a fixed article and notifies subscribers from its insert hook.
#[tracing::instrument(name = "Site test action", skip(store, email_client, mailing_list))]
pub async fn site_test(
    store: web::Data<dyn ArticleStore>,
    email_client: web::Data<EmailClient>,
    mailing_list: web::Data<MailingList>,
) -> Result<HttpResponse, SubmitArticleError> {
    let confirmation = announce_article(
        TEST_ARTICLE_NAME.to_string(),
        TEST_ARTICLE_DESCRIPTION.to_string(),
        Announcement::OnInsert,
        store.get_ref(),
        &email_client,
        &mailing_list,
    )
    .await?;
    Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(confirmation))
}

/// Saves a fixed article, then publishes it explicitly to notify subscribers.
#[tracing::instrument(name = "Site test-new action", skip(store, email_client, mailing_list))]
pub async fn site_test_new(
    store: web::Data<dyn ArticleStore>,
    email_client: web::Data<EmailClient>,
    mailing_list: web::Data<MailingList>,
) -> Result<HttpResponse, SubmitArticleError> {
    let confirmation = announce_article(
        TEST_NEW_ARTICLE_NAME.to_string(),
        TEST_NEW_ARTICLE_DESCRIPTION.to_string(),
        Announcement::OnPublish,
        store.get_ref(),
        &email_client,
        &mailing_list,
    )
    .await?;
    Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(confirmation))
}
