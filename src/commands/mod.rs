pub mod clients;
pub mod contacts;
pub mod form;
pub mod init;
pub mod projects;
pub mod subscribers;
