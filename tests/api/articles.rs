use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};
use article_hooks::domain::{ArticleDescription, ArticleName, NewArticle};
use crate::helpers::spawn_app;

#[tokio::test]
async fn submitting_a_valid_article_returns_200_and_saves_it() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let response = app.post_articles("name=Test%20Subject&description=Test%20Body".into()).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!("Email sent successfully!", response.text().await.unwrap());
    let saved = app.store.articles();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name.as_ref(), "Test Subject");
    assert_eq!(saved[0].description.as_ref(), "Test Body");
}

#[tokio::test]
async fn submitting_a_valid_article_notifies_every_subscriber_in_order() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&app.email_server)
        .await;

    app.post_articles("name=Test%20Subject&description=Test%20Body".into()).await;

    let sent = app.sent_emails().await;
    let recipients: Vec<String> = sent.iter().map(|email| email.to.clone()).collect();
    assert_eq!(recipients, app.subscribers());
    assert_eq!(
        recipients,
        vec!["john2@teleworm.us", "shivawhite@cuvox.de", "kate@dayrep.com"]
    );
    for email in sent {
        assert_eq!(email.from, "techblog@teleworm.us");
        assert_eq!(email.subject, "Test Subject");
        assert_eq!(email.text_body, "Test Body");
    }
}

#[tokio::test]
async fn submitting_an_article_with_an_empty_name_returns_the_error_map() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_articles("name=&description=Test%20Body".into()).await;

    assert_eq!(400, response.status().as_u16());
    let errors: serde_json::Value = response.json().await.unwrap();
    assert_eq!(errors["name"][0], "Name cannot be blank.");
    assert!(errors.get("description").is_none());
    assert!(app.store.articles().is_empty());
}

#[tokio::test]
async fn the_longest_valid_multibyte_article_is_accepted() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&app.email_server)
        .await;
    let name = "😀".repeat(ArticleName::MAX_LENGTH);
    let description = "😀".repeat(ArticleDescription::MAX_LENGTH);
    assert!(NewArticle::parse(name.clone(), description.clone()).is_ok());

    let response = app.post_article_fields(&name, &description).await;

    assert_eq!(200, response.status().as_u16());
    let saved = app.store.articles();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].description.as_ref(), description.as_str());
}

#[tokio::test]
async fn a_long_cyrillic_description_is_accepted() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let response = app.post_article_fields("Test Subject", &"я".repeat(3000)).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.store.articles().len(), 1);
}

#[tokio::test]
async fn submitting_returns_a_400_when_data_is_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("name=Test%20Subject", "missing the description"),
        ("description=Test%20Body", "missing the name"),
        ("", "missing both name and description"),
    ];

    for (body, message) in test_cases {
        let response = app.post_articles(body.into()).await;
        assert_eq!(400, response.status().as_u16(), "The API did not fail with 400 when the payload was {}.", message);
    }
}

#[tokio::test]
async fn submitting_returns_a_400_when_fields_are_invalid() {
    let app = spawn_app().await;
    let long_name = "a".repeat(256);
    let test_cases = vec![
        ("name=%20%20&description=Test%20Body".to_string(), "blank name"),
        ("name=Test%20Subject&description=".to_string(), "empty description"),
        (format!("name={}&description=Test%20Body", long_name), "overlong name"),
    ];

    for (body, description) in test_cases {
        let response = app.post_articles(body).await;
        assert_eq!(400, response.status().as_u16(), "The API did not fail with 400 when the payload was {}.", description);
    }
    assert!(app.sent_emails().await.is_empty());
}

#[tokio::test]
async fn submitting_the_same_article_twice_sends_two_rounds_of_notifications() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(6)
        .mount(&app.email_server)
        .await;

    let body = "name=Test%20Subject&description=Test%20Body";
    app.post_articles(body.into()).await;
    app.post_articles(body.into()).await;

    let saved = app.store.articles();
    assert_eq!(saved.len(), 2);
    assert_ne!(saved[0].id, saved[1].id);
}

#[tokio::test]
async fn a_failing_email_api_returns_500_after_trying_every_subscriber() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&app.email_server)
        .await;

    let response = app.post_articles("name=Test%20Subject&description=Test%20Body".into()).await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(app.store.articles().len(), 1);
}

#[tokio::test]
async fn publishing_an_article_notifies_subscribers_after_the_save() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&app.email_server)
        .await;

    let response = app.post_publish("name=Test%20Subject&description=Test%20Body".into()).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!("Emails have been sent", response.text().await.unwrap());
    assert_eq!(app.store.articles().len(), 1);
    for email in app.sent_emails().await {
        assert_eq!(email.subject, "Test Subject");
        assert_eq!(email.text_body, "Test Body");
    }
}

#[tokio::test]
async fn publishing_an_invalid_article_sends_nothing() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_publish("name=&description=".into()).await;

    assert_eq!(400, response.status().as_u16());
    let errors: serde_json::Value = response.json().await.unwrap();
    assert!(errors.get("name").is_some());
    assert!(errors.get("description").is_some());
}
