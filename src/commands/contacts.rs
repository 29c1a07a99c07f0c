use tabled::Tabled;
use tracing::info;

use crate::cli::ContactSubmitArgs;
use crate::client::CmsClient;
use crate::commands::form::{required, validate_email};
use crate::error::Result;
use crate::output;
use crate::render;
use crate::types::Contact;

const CONTACT_PATH: &str = "/api/contact";

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Full Name")]
    full_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Mobile")]
    mobile: String,
    #[tabled(rename = "City")]
    city: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            full_name: contact.full_name.clone(),
            email: contact.email.clone(),
            mobile: contact.mobile.clone(),
            city: contact.city.clone(),
        }
    }
}

pub async fn fetch(client: &CmsClient) -> Result<Vec<Contact>> {
    client.get_list(CONTACT_PATH).await
}

pub async fn list(client: &CmsClient) -> Result<()> {
    let contacts = fetch(client).await?;
    output::print_list(&contacts, |c| ContactRow::from(c), render::contacts)
}

impl TryFrom<ContactSubmitArgs> for Contact {
    type Error = crate::error::CmsError;

    fn try_from(args: ContactSubmitArgs) -> Result<Self> {
        required("full_name", &args.full_name)?;
        required("email", &args.email)?;
        validate_email(&args.email)?;
        required("mobile", &args.mobile)?;
        required("city", &args.city)?;

        Ok(Contact {
            full_name: args.full_name,
            email: args.email,
            mobile: args.mobile,
            city: args.city,
        })
    }
}

pub async fn submit(client: &CmsClient, args: ContactSubmitArgs) -> Result<()> {
    let contact = Contact::try_from(args)?;
    let ack = client.post_json(CONTACT_PATH, &contact).await?;
    info!(message = %ack.message, "contact query sent");

    output::print_message("Thank you! We will contact you soon.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    use crate::error::CmsError;

    fn client_for(server: &MockServer) -> CmsClient {
        CmsClient::new(Url::parse(&server.base_url()).unwrap())
    }

    fn args() -> ContactSubmitArgs {
        ContactSubmitArgs {
            full_name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            mobile: "5550100".to_string(),
            city: "Pune".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_posts_four_fields_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact").json_body(json!({
                    "full_name": "Sam Lee",
                    "email": "sam@example.com",
                    "mobile": "5550100",
                    "city": "Pune"
                }));
                then.status(201).json_body(json!({"message": "Query received!"}));
            })
            .await;

        submit(&client_for(&server), args()).await.unwrap();

        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_submit_sends_values_as_entered() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact").json_body(json!({
                    "full_name": " Sam Lee ",
                    "email": "sam@example.com",
                    "mobile": " 555 ",
                    "city": "Pune "
                }));
                then.status(201).json_body(json!({"message": "Query received!"}));
            })
            .await;

        let padded = ContactSubmitArgs {
            full_name: " Sam Lee ".to_string(),
            email: "sam@example.com".to_string(),
            mobile: " 555 ".to_string(),
            city: "Pune ".to_string(),
        };
        submit(&client_for(&server), padded).await.unwrap();

        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_submit_invalid_email_sends_nothing() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact");
                then.status(201);
            })
            .await;

        let mut bad = args();
        bad.email = "not-an-email".to_string();
        let result = submit(&client_for(&server), bad).await;

        assert!(matches!(result, Err(CmsError::InvalidEmail(_))));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_fetch_contacts_keeps_server_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/contact");
                then.status(200).json_body(json!([
                    {"full_name": "Newest", "email": "n@example.com", "mobile": "1", "city": "A"},
                    {"full_name": "Oldest", "email": "o@example.com", "mobile": "2", "city": "B"}
                ]));
            })
            .await;

        let contacts = fetch(&client_for(&server)).await.unwrap();
        assert_eq!(contacts[0].full_name, "Newest");
        assert_eq!(contacts[1].full_name, "Oldest");
    }

    #[test]
    fn test_try_from_requires_city() {
        let mut missing = args();
        missing.city = String::new();
        assert!(matches!(
            Contact::try_from(missing),
            Err(CmsError::MissingField("city"))
        ));
    }
}
