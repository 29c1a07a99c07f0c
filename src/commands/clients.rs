use reqwest::multipart::Form;
use tabled::Tabled;
use tracing::info;

use crate::cli::{ClientAddArgs, OutputFormat};
use crate::client::CmsClient;
use crate::commands::form::{image_part, required};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, truncate};
use crate::render;
use crate::types::Client;

const CLIENTS_PATH: &str = "/api/clients";

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Designation")]
    designation: String,
    #[tabled(rename = "Testimonial")]
    description: String,
    #[tabled(rename = "Image")]
    image: String,
}

impl From<&Client> for ClientRow {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            designation: client.designation.clone(),
            description: truncate(&client.description, 50),
            image: client.image.clone(),
        }
    }
}

pub async fn fetch(client: &CmsClient) -> Result<Vec<Client>> {
    client.get_list(CLIENTS_PATH).await
}

fn format_clients(format: OutputFormat, clients: &[Client], config: &Config) -> String {
    let uploads = config.uploads_path();
    output::format_list(format, clients, |c| ClientRow::from(c), |items| {
        render::clients(items, &uploads)
    })
}

pub async fn list(client: &CmsClient, config: &Config) -> Result<()> {
    let clients = fetch(client).await?;
    output::print_text(&format_clients(output::format(), &clients, config))
}

fn build_form(args: &ClientAddArgs) -> Result<Form> {
    let name = required("name", &args.name)?;
    let description = required("description", &args.description)?;
    let designation = required("designation", &args.designation)?;
    let image = image_part(&args.image)?;

    Ok(Form::new()
        .text("name", name.to_string())
        .text("description", description.to_string())
        .text("designation", designation.to_string())
        .part("image", image))
}

pub async fn add(client: &CmsClient, config: &Config, args: ClientAddArgs) -> Result<()> {
    let form = build_form(&args)?;
    let ack = client.post_multipart(CLIENTS_PATH, form).await?;
    info!(message = %ack.message, "client uploaded");

    output::print_message_before_list("Client Added");
    list(client, config).await
}
