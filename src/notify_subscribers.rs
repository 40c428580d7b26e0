use async_trait::async_trait;
use crate::domain::MailingList;
use crate::email_client::{Notification, Notifier};
use crate::lifecycle::{ArticleEventContext, ArticleObserver};

/// Emails every subscriber on the mailing list about the article that fired
/// the event: the article name becomes the subject, its description the body.
///
/// Subscribers are notified one at a time, in list order. A failed send is
/// logged and the remaining subscribers are still attempted. The completion
/// message is logged once the whole list has been walked, after which the
/// observer reports an error if any send failed.
pub struct NotifySubscribers<'a> {
    notifier: &'a dyn Notifier,
    mailing_list: &'a MailingList,
}

impl<'a> NotifySubscribers<'a> {
    pub fn new(notifier: &'a dyn Notifier, mailing_list: &'a MailingList) -> Self {
        Self { notifier, mailing_list }
    }
}

#[async_trait]
impl ArticleObserver for NotifySubscribers<'_> {
    #[tracing::instrument(
        name = "Notify subscribers about an article",
        skip(self, context),
        fields(article_id = %context.sender.id, event = ?context.event),
    )]
    async fn on_event(&self, context: &ArticleEventContext<'_>) -> Result<(), anyhow::Error> {
        let article = context.sender;
        let subscribers = self.mailing_list.subscribers();
        let mut failed: Vec<&str> = Vec::new();

        for subscriber in subscribers {
            let notification = Notification {
                from: self.mailing_list.sender(),
                to: subscriber,
                subject: article.name.as_ref(),
                body: article.description.as_ref(),
            };
            if let Err(e) = self.notifier.send(&notification).await {
                tracing::error!(
                    error.cause_chain = ?e,
                    subscriber = %subscriber,
                    "Failed to notify a subscriber",
                );
                failed.push(subscriber.as_ref());
            }
        }

        tracing::info!(
            notified = subscribers.len() - failed.len(),
            failed = failed.len(),
            "Emails have been sent",
        );
        if !failed.is_empty() {
            anyhow::bail!(
                "Failed to notify {} of {} subscribers: {}",
                failed.len(),
                subscribers.len(),
                failed.join(", ")
            );
        }
        Ok(())
    }
}
