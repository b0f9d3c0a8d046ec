use crate::domain::model::QuotationDocument;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn catalog_path(&self) -> Option<&str>;
    fn file_prefix(&self) -> &str;
}

#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(&self, document: QuotationDocument) -> Result<Vec<u8>>;
}
