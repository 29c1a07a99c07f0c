//! HTML fragments for the site's list containers.
//!
//! Each function returns markup meant to replace the contents of one
//! container element (`project-list`, `client-list`, `contactTable`,
//! `subList`). Record values are escaped before interpolation.

use crate::types::{Client, Contact, Project, Subscriber};

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn image_src(uploads_path: &str, image: &str) -> String {
    escape_html(&format!("{uploads_path}{image}"))
}

pub fn project_card(project: &Project, uploads_path: &str) -> String {
    format!(
        r#"
        <div class="col-md-4">
            <div class="card h-100">
                <img src="{src}" class="card-img-top">
                <div class="card-body">
                    <h5 class="card-title">{name}</h5>
                    <p class="card-text text-muted">{description}</p>
                    <button class="btn btn-sm btn-outline-primary">Read More</button>
                </div>
            </div>
        </div>
    "#,
        src = image_src(uploads_path, &project.image),
        name = escape_html(&project.name),
        description = escape_html(&project.description),
    )
}

pub fn client_card(client: &Client, uploads_path: &str) -> String {
    format!(
        r#"
        <div class="col-md-4">
            <div class="card text-center h-100 p-4">
                <img src="{src}" class="rounded-circle mx-auto d-block mb-3" style="width:100px; height:100px; object-fit:cover;">
                <div class="card-body p-0">
                    <p class="fst-italic text-muted">"{description}"</p>
                    <h6 class="text-primary mt-3 mb-0">{name}</h6>
                    <small class="text-uppercase text-xs fw-bold text-muted">{designation}</small>
                </div>
            </div>
        </div>
    "#,
        src = image_src(uploads_path, &client.image),
        description = escape_html(&client.description),
        name = escape_html(&client.name),
        designation = escape_html(&client.designation),
    )
}

pub fn contact_row(contact: &Contact) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&contact.full_name),
        escape_html(&contact.email),
        escape_html(&contact.mobile),
        escape_html(&contact.city),
    )
}

pub fn subscriber_item(subscriber: &Subscriber) -> String {
    format!(
        r#"<li class="list-group-item">{}</li>"#,
        escape_html(&subscriber.email)
    )
}

pub fn projects(items: &[Project], uploads_path: &str) -> String {
    items.iter().map(|p| project_card(p, uploads_path)).collect()
}

pub fn clients(items: &[Client], uploads_path: &str) -> String {
    items.iter().map(|c| client_card(c, uploads_path)).collect()
}

pub fn contacts(items: &[Contact]) -> String {
    items.iter().map(contact_row).collect()
}

pub fn subscribers(items: &[Subscriber]) -> String {
    items.iter().map(subscriber_item).collect()
}
