use wiremock::matchers::path;
use wiremock::{Mock, ResponseTemplate};
use article_hooks::routes::{
    TEST_ARTICLE_DESCRIPTION, TEST_ARTICLE_NAME, TEST_NEW_ARTICLE_DESCRIPTION, TEST_NEW_ARTICLE_NAME,
};
use crate::helpers::spawn_app;

#[tokio::test]
async fn site_test_saves_the_fixed_article_and_notifies_subscribers() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&app.email_server)
        .await;

    let response = app.get("site/test").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!("Email sent successfully!", response.text().await.unwrap());
    let sent = app.sent_emails().await;
    assert_eq!(sent.iter().map(|e| e.to.clone()).collect::<Vec<_>>(), app.subscribers());
    for email in sent {
        assert_eq!(email.subject, TEST_ARTICLE_NAME);
        assert_eq!(email.text_body, TEST_ARTICLE_DESCRIPTION);
    }
}

#[tokio::test]
async fn site_test_new_publishes_the_fixed_article() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&app.email_server)
        .await;

    let response = app.get("site/test-new").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!("Emails have been sent", response.text().await.unwrap());
    for email in app.sent_emails().await {
        assert_eq!(email.subject, TEST_NEW_ARTICLE_NAME);
        assert_eq!(email.text_body, TEST_NEW_ARTICLE_DESCRIPTION);
    }
}

#[tokio::test]
async fn calling_site_test_twice_saves_two_articles() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(6)
        .mount(&app.email_server)
        .await;

    app.get("site/test").await;
    app.get("site/test").await;

    assert_eq!(app.store.articles().len(), 2);
}
