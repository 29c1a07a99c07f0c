mod client;
mod contact;
mod message;
mod project;
mod subscriber;

pub use client::Client;
pub use contact::Contact;
pub use message::ApiMessage;
pub use project::Project;
pub use subscriber::Subscriber;
