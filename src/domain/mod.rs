mod article_description;
mod article_id;
mod article_name;
mod mailing_list;
mod new_article;
mod saved_article;
mod subscriber_email;
mod validation_errors;

pub use article_description::ArticleDescription;
pub use article_id::ArticleId;
pub use article_name::ArticleName;
pub use mailing_list::MailingList;
pub use new_article::NewArticle;
pub use saved_article::SavedArticle;
pub use subscriber_email::SubscriberEmail;
pub use validation_errors::ValidationErrors;
