//! Product image upload
//!
//! Multipart POST that carries the bearer token but no JSON content type.

use crate::gateway::ApiGateway;
use champa_core::{
    ProductDraft, ProductId, ProductRecord, ShopError, ShopResult, StorageResultExt,
    labels::normalize_image_path,
};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Largest accepted image
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted file extensions (lowercase)
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Deserialize)]
struct UploadedImage {
    image: String,
}

/// Lowercase extension of `path` when it is an accepted image type
pub fn image_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

fn mime_for(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

/// Check type and size before anything is read or sent
pub async fn check_image(path: &Path) -> ShopResult<String> {
    let Some(ext) = image_extension(path) else {
        return Err(ShopError::field(
            "file",
            "Unsupported file type (png, jpg, jpeg, gif, webp only)",
        ));
    };
    let size = tokio::fs::metadata(path).await.at_path(path)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(ShopError::field("file", "Image must be 5 MB or smaller"));
    }
    Ok(ext)
}

impl ApiGateway {
    /// Upload an image for product `id`; returns the stored image path
    pub async fn upload_product_image(&self, id: ProductId, path: &Path) -> ShopResult<String> {
        let token = self.require_token()?;
        let ext = check_image(path).await?;
        let bytes = tokio::fs::read(path).await.at_path(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for(&ext))
            .map_err(|e| ShopError::internal(e.to_string()))?;
        let form = Form::new().part("file", part);

        let req = self
            .client()
            .post(self.url(&format!("/api/admin/products/{id}/upload-image")))
            .bearer_auth(token)
            .multipart(form);
        let uploaded: UploadedImage = self.send(req).await?;
        info!("Uploaded image for product {id}: {}", uploaded.image);
        Ok(normalize_image_path(Some(&uploaded.image)).unwrap_or(uploaded.image))
    }

    /// Create or update a product, then upload its image when one is given
    ///
    /// Once the record is saved a failed upload no longer fails the call; it
    /// comes back in [`SavedProduct::upload_error`] so callers still reload.
    pub async fn save_product(
        &self,
        existing: Option<ProductId>,
        draft: &ProductDraft,
        image: Option<&Path>,
    ) -> ShopResult<SavedProduct> {
        let mut record = match existing {
            Some(id) => self.update_product(id, draft).await?,
            None => self.create_product(draft).await?,
        };

        let mut upload_error = None;
        if let Some(path) = image {
            match self.upload_product_image(record.id, path).await {
                Ok(image) => record.image = Some(image),
                Err(e) => {
                    warn!("Product {} saved but its image was not: {e}", record.id);
                    upload_error = Some(e);
                }
            }
        }
        Ok(SavedProduct {
            record,
            upload_error,
        })
    }
}

/// A saved product and the outcome of its image upload
#[derive(Debug)]
pub struct SavedProduct {
    pub record: ProductRecord,
    pub upload_error: Option<ShopError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ListController;
    use crate::session::Session;
    use champa_core::{MemoryStorage, SharedStorage, ShopConfig, TOKEN_KEY};
    use serde_json::json;
    use std::io::Write;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn write_file(dir: &tempfile::TempDir, name: &str, len: usize) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![0u8; len]).unwrap();
        path
    }

    fn gateway_for(server: &MockServer, token: Option<&str>) -> (ApiGateway, SharedStorage) {
        let storage = MemoryStorage::shared();
        let session = Session::shared(storage.clone());
        if let Some(token) = token {
            session.set_token(token).unwrap();
        }
        let config = ShopConfig {
            base_url: server.uri(),
            ..ShopConfig::default()
        };
        (ApiGateway::new(&config, session).unwrap(), storage)
    }

    #[test]
    fn test_extension_rules() {
        assert_eq!(image_extension(Path::new("a/shirt.JPG")).as_deref(), Some("jpg"));
        assert_eq!(image_extension(Path::new("shirt.webp")).as_deref(), Some("webp"));
        assert_eq!(image_extension(Path::new("shirt.bmp")), None);
        assert_eq!(image_extension(Path::new("shirt")), None);
    }

    #[tokio::test]
    async fn test_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let small = write_file(&dir, "ok.png", 10);
        assert_eq!(check_image(&small).await.unwrap(), "png");

        let big = write_file(&dir, "big.png", (MAX_UPLOAD_BYTES + 1) as usize);
        assert!(check_image(&big).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_upload_sends_multipart_with_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/products/3/upload-image"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "image": "uploads/product/product_3_1.png"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (gateway, _) = gateway_for(&server, Some("tok"));

        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "shirt.png", 32);
        let image = gateway.upload_product_image(3, &file).await.unwrap();
        assert_eq!(image, "/static/uploads/product/product_3_1.png");

        let requests = server.received_requests().await.unwrap_or_default();
        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("multipart/form-data"));
    }

    #[tokio::test]
    async fn test_upload_without_token_sends_nothing() {
        let server = MockServer::start().await;
        let (gateway, _) = gateway_for(&server, None);

        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "shirt.png", 32);
        let err = gateway.upload_product_image(3, &file).await.unwrap_err();
        assert!(matches!(err, ShopError::AuthMissing));

        let received = server.received_requests().await.unwrap_or_default();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn test_upload_401_clears_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/products/3/upload-image"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Token expired"})))
            .expect(1)
            .mount(&server)
            .await;

        let (gateway, storage) = gateway_for(&server, Some("stale"));
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "shirt.png", 32);

        let err = gateway.upload_product_image(3, &file).await.unwrap_err();
        assert!(err.is_auth());
        assert_eq!(err.user_message(), "Token expired");
        assert_eq!(storage.get(TOKEN_KEY), None);

        let again = gateway.upload_product_image(3, &file).await.unwrap_err();
        assert!(matches!(again, ShopError::AuthMissing));
    }

    #[tokio::test]
    async fn test_failed_upload_after_create_still_reloads() {
        let server = MockServer::start().await;
        let created = json!({"id": 9, "name": "Team Kit", "price": 120000.0, "stock": 4});
        Mock::given(method("POST"))
            .and(path("/api/admin/products"))
            .respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/admin/products/9/upload-image"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Bad image"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/admin/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([created])))
            .expect(1)
            .mount(&server)
            .await;

        let (gateway, _) = gateway_for(&server, Some("tok"));
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "kit.png", 32);
        let draft = ProductDraft {
            name: "Team Kit".into(),
            price: 120000.0,
            stock: Some(4),
            description: None,
            category: None,
            price_type: None,
        };

        let mut list = ListController::<ProductRecord>::new(10);
        let saved = list
            .mutate_then_reload(gateway.save_product(None, &draft, Some(&file)), || {
                gateway.list_products()
            })
            .await
            .unwrap();

        assert_eq!(saved.record.id, 9);
        let upload_error = saved.upload_error.unwrap();
        assert_eq!(upload_error.status(), Some(400));
        assert_eq!(upload_error.user_message(), "Bad image");

        assert_eq!(list.records().len(), 1);
        let received = server.received_requests().await.unwrap_or_default();
        assert!(
            received
                .iter()
                .any(|r| r.method.as_str() == "GET" && r.url.path() == "/api/admin/products")
        );
    }
}
