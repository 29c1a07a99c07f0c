use std::io::{self, BufRead, Write};

use url::Url;

use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_UPLOADS_PATH};
use crate::error::{CmsError, Result};

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Build the config file contents, falling back to defaults for blank answers.
fn render_config(base_url: &str, uploads_path: &str) -> Result<String> {
    let base_url = if base_url.is_empty() {
        DEFAULT_BASE_URL
    } else {
        base_url
    };
    Url::parse(base_url).map_err(|e| CmsError::InvalidBaseUrl {
        url: base_url.to_string(),
        source: e,
    })?;

    let mut content = format!("base_url = {:?}\n", base_url);
    if !uploads_path.is_empty() && uploads_path != DEFAULT_UPLOADS_PATH {
        content.push_str(&format!("uploads_path = {:?}\n", uploads_path));
    }
    Ok(content)
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if config_path.exists() {
        let answer = prompt(
            &mut input,
            &format!(
                "Config file already exists at {}. Overwrite? [y/N] ",
                config_path.display()
            ),
        )?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("CMS CLI Configuration");
    println!("=====================\n");

    let base_url = prompt(
        &mut input,
        &format!("Enter the site base URL [{DEFAULT_BASE_URL}]: "),
    )?;
    let uploads_path = prompt(
        &mut input,
        &format!("Enter the public uploads path [{DEFAULT_UPLOADS_PATH}]: "),
    )?;

    let config_content = render_config(&base_url, &uploads_path)?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CmsError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, config_content).map_err(|e| CmsError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'cms' commands!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_defaults() {
        let content = render_config("", "").unwrap();
        assert_eq!(content, "base_url = \"http://localhost:5000\"\n");
    }

    #[test]
    fn test_render_config_custom_uploads() {
        let content = render_config("https://example.com", "/media/").unwrap();
        let parsed: toml::Value = toml::from_str(&content).unwrap();
        assert_eq!(parsed["base_url"].as_str(), Some("https://example.com"));
        assert_eq!(parsed["uploads_path"].as_str(), Some("/media/"));
    }

    #[test]
    fn test_render_config_rejects_bad_url() {
        assert!(matches!(
            render_config("example dot com", ""),
            Err(CmsError::InvalidBaseUrl { .. })
        ));
    }
}
