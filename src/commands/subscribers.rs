use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use crate::client::CmsClient;
use crate::error::Result;
use crate::output;
use crate::render;
use crate::types::Subscriber;

const SUBSCRIBE_PATH: &str = "/api/subscribe";

#[derive(Serialize)]
struct Subscription<'a> {
    email: &'a str,
}

#[derive(Tabled)]
struct SubscriberRow {
    #[tabled(rename = "Email")]
    email: String,
}

impl From<&Subscriber> for SubscriberRow {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            email: subscriber.email.clone(),
        }
    }
}

pub async fn fetch(client: &CmsClient) -> Result<Vec<Subscriber>> {
    client.get_list(SUBSCRIBE_PATH).await
}

pub async fn list(client: &CmsClient) -> Result<()> {
    let subscribers = fetch(client).await?;
    output::print_list(&subscribers, |s| SubscriberRow::from(s), render::subscribers)
}

/// Subscribe an email. Blank input is ignored without contacting the API;
/// anything else is sent as entered.
pub async fn subscribe(client: &CmsClient, email: &str) -> Result<()> {
    if email.trim().is_empty() {
        debug!("empty email, nothing to subscribe");
        return Ok(());
    }

    // Already-subscribed emails are accepted by the API as a no-op
    let ack = client
        .post_json(SUBSCRIBE_PATH, &Subscription { email })
        .await?;
    info!(message = %ack.message, "subscribed");

    output::print_message("Subscribed successfully!");
    Ok(())
}
