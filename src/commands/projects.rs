use reqwest::multipart::Form;
use tabled::Tabled;
use tracing::info;

use crate::cli::{OutputFormat, ProjectAddArgs};
use crate::client::CmsClient;
use crate::commands::form::{image_part, required};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, truncate};
use crate::render;
use crate::types::Project;

const PROJECTS_PATH: &str = "/api/projects";

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Image")]
    image: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: truncate(&project.description, 60),
            image: project.image.clone(),
        }
    }
}

pub async fn fetch(client: &CmsClient) -> Result<Vec<Project>> {
    client.get_list(PROJECTS_PATH).await
}

fn format_projects(format: OutputFormat, projects: &[Project], config: &Config) -> String {
    let uploads = config.uploads_path();
    output::format_list(format, projects, |p| ProjectRow::from(p), |items| {
        render::projects(items, &uploads)
    })
}

pub async fn list(client: &CmsClient, config: &Config) -> Result<()> {
    let projects = fetch(client).await?;
    output::print_text(&format_projects(output::format(), &projects, config))
}

fn build_form(args: &ProjectAddArgs) -> Result<Form> {
    let name = required("name", &args.name)?;
    let description = required("description", &args.description)?;
    let image = image_part(&args.image)?;

    Ok(Form::new()
        .text("name", name.to_string())
        .text("description", description.to_string())
        .part("image", image))
}

pub async fn add(client: &CmsClient, config: &Config, args: ProjectAddArgs) -> Result<()> {
    let form = build_form(&args)?;
    let ack = client.post_multipart(PROJECTS_PATH, form).await?;
    info!(message = %ack.message, "project uploaded");

    output::print_message_before_list("Project Added");
    list(client, config).await
}
