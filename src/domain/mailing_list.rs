use crate::domain::SubscriberEmail;

/// The address notifications come from and the ordered list of subscribers
/// they go to.
#[derive(Debug, Clone)]
pub struct MailingList {
    sender: SubscriberEmail,
    subscribers: Vec<SubscriberEmail>,
}

impl MailingList {
    pub fn parse(sender: String, subscribers: Vec<String>) -> Result<Self, String> {
        let sender = SubscriberEmail::parse(sender)?;
        let subscribers = subscribers
            .into_iter()
            .map(SubscriberEmail::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sender, subscribers })
    }

    pub fn sender(&self) -> &SubscriberEmail {
        &self.sender
    }

    pub fn subscribers(&self) -> &[SubscriberEmail] {
        &self.subscribers
    }
}
