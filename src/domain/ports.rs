use crate::domain::model::{AuditResult, ColorPair, NamedCombination};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn theme_name(&self) -> &str;
    fn colors(&self) -> &HashMap<String, String>;
    fn backgrounds(&self) -> &[String];
    fn foregrounds(&self) -> &[String];
    fn combinations(&self) -> &[NamedCombination];
    fn output_path(&self) -> &str;
    fn report_formats(&self) -> &[String];
    fn large_text(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ColorPair>>;
    async fn evaluate(&self, pairs: Vec<ColorPair>) -> Result<AuditResult>;
    async fn report(&self, result: AuditResult) -> Result<String>;
}
