//! Product sources.

use std::path::PathBuf;

use async_trait::async_trait;
use pocketshop_commerce::catalog::{Catalog, Product};

use crate::client::{FetchClient, FetchError};

/// Path of the product listing under the API root.
pub const PRODUCTS_PATH: &str = "/products";

/// Something that can hand over the whole catalog in one call.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product. Called once per screen activation.
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError>;

    /// Short description for logs, e.g. the URL or file path.
    fn describe(&self) -> String;
}

/// The product API over HTTP: `GET {base_url}/products`.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: FetchClient,
}

impl HttpCatalogSource {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self::new(FetchClient::new(base_url))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        self.client.fetch::<Catalog>(PRODUCTS_PATH).await
    }

    fn describe(&self) -> String {
        self.client.url(PRODUCTS_PATH)
    }
}

/// A JSON file holding the same array the API returns.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| FetchError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Catalog::from_json(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A fixed in-memory product list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        Ok(Catalog::new(self.products.clone()))
    }

    fn describe(&self) -> String {
        format!("static ({} products)", self.products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 3, "title": "Mug", "category": "kitchen", "price": 8.5,
                 "rating": {{"rate": 4.1, "count": 9}}}}]"#
        )
        .unwrap();

        let source = FileCatalogSource::new(file.path());
        let catalog = source.fetch_catalog().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].title, "Mug");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileCatalogSource::new("/definitely/not/here.json");
        let err = source.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[tokio::test]
    async fn test_file_source_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FileCatalogSource::new(file.path())
            .fetch_catalog()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Deserialization(_)));
    }

    #[test]
    fn test_http_source_describes_products_url() {
        let source = HttpCatalogSource::from_base_url("https://example.test");
        assert_eq!(source.describe(), "https://example.test/products");
    }
}
