//! Main-menu markup loading.
//!
//! The menu is auxiliary: a missing file or an unreachable server must not
//! stop the game, so [`load_menu_content`] degrades to an empty menu.

use crate::error::PongError;
use crate::options::MenuOptions;

/// Load the menu markup named by `options.source`.
///
/// No source yields an empty string. Failures are logged at error level
/// and also yield an empty string.
#[must_use]
pub fn load_menu_content(options: &MenuOptions) -> String {
    let Some(source) = options.source.as_deref() else {
        return String::new();
    };
    match try_load(source) {
        Ok(content) => {
            log::info!("loaded menu content from {source} ({} bytes)", content.len());
            content
        }
        Err(e) => {
            log::error!("failed to load menu content from {source}: {e}");
            String::new()
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn try_load(source: &str) -> Result<String, PongError> {
    if is_url(source) {
        fetch(source)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<String, PongError> {
    ureq::get(url)
        .call()
        .map_err(|e| PongError::ContentFetch(format!("{url}: {e}")))?
        .into_body()
        .read_to_string()
        .map_err(|e| PongError::ContentFetch(format!("reading {url}: {e}")))
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<String, PongError> {
    Err(PongError::ContentFetch(format!(
        "{url}: built without the `fetch` feature"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_source_is_empty() {
        assert_eq!(load_menu_content(&MenuOptions::default()), "");
    }

    #[test]
    fn reads_file_source() {
        let dir = std::env::temp_dir()
            .join(format!("pong3d-menu-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("main-menu.html");
        std::fs::write(&path, "<h1>Pong</h1>").unwrap();

        let options = MenuOptions {
            source: Some(path.to_string_lossy().into_owned()),
        };
        assert_eq!(load_menu_content(&options), "<h1>Pong</h1>");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let options = MenuOptions {
            source: Some("/definitely/not/here/main-menu.html".into()),
        };
        assert!(matches!(
            try_load("/definitely/not/here/main-menu.html"),
            Err(PongError::Io(_))
        ));
        assert_eq!(load_menu_content(&options), "");
    }

    #[test]
    fn url_detection() {
        assert!(is_url("https://example.com/main-menu.html"));
        assert!(is_url("http://localhost/main-menu.html"));
        assert!(!is_url("assets/main-menu.html"));
    }
}
