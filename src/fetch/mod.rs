// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;
use url::Url;

/// Where the survey CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    /// `http(s)://` is fetched over the network, `file://` and bare paths are read from disk.
    pub fn parse(raw: &str) -> Result<Self> {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(Source::Remote(url)),
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| anyhow::anyhow!("invalid file URL {}", raw))?;
                Ok(Source::Local(path))
            }
            // Windows drive letters parse as a one-letter scheme.
            Ok(url) if url.scheme().len() > 1 => {
                anyhow::bail!("unsupported source scheme `{}` in {}", url.scheme(), raw)
            }
            _ => Ok(Source::Local(PathBuf::from(raw))),
        }
    }
}

/// Fetch the raw CSV bytes. Any failure is fatal for the caller.
pub async fn fetch_source(client: &Client, source: &Source) -> Result<Vec<u8>> {
    let bytes = match source {
        Source::Remote(url) => download(client, url).await?,
        Source::Local(path) => read_local(path).await?,
    };
    info!(bytes = bytes.len(), "fetched survey source");
    Ok(bytes)
}

async fn download(client: &Client, url: &Url) -> Result<Vec<u8>> {
    let resp = client
        .get(url.as_str())
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("GET {}", url))?;
    let bytes = resp
        .bytes()
        .await
        .with_context(|| format!("reading body from {}", url))?;
    Ok(bytes.to_vec())
}

async fn read_local(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_source_kinds() -> Result<()> {
        assert!(matches!(
            Source::parse("https://example.com/gss.csv")?,
            Source::Remote(_)
        ));
        assert_eq!(
            Source::parse("data/gss.csv")?,
            Source::Local(PathBuf::from("data/gss.csv"))
        );
        assert_eq!(
            Source::parse("file:///tmp/gss.csv")?,
            Source::Local(PathBuf::from("/tmp/gss.csv"))
        );
        assert!(Source::parse("ftp://example.com/gss.csv").is_err());
        Ok(())
    }

    #[tokio::test]
    async fn reads_local_file() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"id,sex\n1,male\n")?;

        let source = Source::Local(tmp.path().to_path_buf());
        let bytes = fetch_source(&Client::new(), &source).await?;
        assert_eq!(bytes, b"id,sex\n1,male\n");
        Ok(())
    }

    #[tokio::test]
    async fn missing_local_file_is_an_error() {
        let source = Source::Local(PathBuf::from("/definitely/not/here.csv"));
        let err = fetch_source(&Client::new(), &source).await.unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
