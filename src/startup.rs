use std::net::TcpListener;
use std::sync::Arc;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;
use crate::article_store::{ArticleStore, PgArticleStore};
use crate::configuration::{DatabaseSettings, Settings};
use crate::domain::{ArticleDescription, ArticleName, MailingList};
use crate::email_client::EmailClient;
use crate::routes::{health_check, publish_article, site_test, site_test_new, submit_article};


pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(configuration.with_db())
}

/// Largest urlencoded article form accepted: every grapheme of a maximal
/// name and description at 4 UTF-8 bytes, each escaped as `%XX`, plus room
/// for the field names.
pub const ARTICLE_FORM_LIMIT: usize =
    (ArticleName::MAX_LENGTH + ArticleDescription::MAX_LENGTH) * 4 * 3 + 1024;

pub fn run(
    listener: TcpListener,
    store: Arc<dyn ArticleStore>,
    email_client: EmailClient,
    mailing_list: MailingList,
) -> std::io::Result<Server> {
    let store: web::Data<dyn ArticleStore> = web::Data::from(store);
    let email_client = web::Data::new(email_client);
    let mailing_list = web::Data::new(mailing_list);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::FormConfig::default().limit(ARTICLE_FORM_LIMIT))
            .route("/health_check", web::get().to(health_check))
            .route("/articles", web::post().to(submit_article))
            .route("/articles/publish", web::post().to(publish_article))
            .route("/site/test", web::get().to(site_test))
            .route("/site/test-new", web::get().to(site_test_new))
            .app_data(store.clone())
            .app_data(email_client.clone())
            .app_data(mailing_list.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Application, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let store = Arc::new(PgArticleStore::new(connection_pool));

        let mailing_list = configuration
            .notifications
            .mailing_list()
            .map_err(anyhow::Error::msg)
            .context("Invalid notification settings")?;
        let email_client = configuration
            .email_client
            .client()
            .context("Failed to build the email client")?;

        let address = format!("{}:{}", configuration.application.host, configuration.application.port);
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();

        let server = run(listener, store, email_client, mailing_list)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
