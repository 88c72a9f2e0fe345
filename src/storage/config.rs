use envmnt::{ExpandOptions, ExpansionType};
use tokio::runtime::Handle;

use crate::error::ModtimesResult;

use super::s3::S3System;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub prefix: String,
}
impl StorageConfig {
    pub fn build_s3(&self, handle: Handle) -> ModtimesResult<S3System> {
        S3System::new(self.expanded_bucket(), self.prefix.clone(), handle)
    }

    // Expand bucket environment variables as appropriate
    fn expanded_bucket(&self) -> String {
        let mut options = ExpandOptions::new();
        options.expansion_type = Some(ExpansionType::Unix);
        envmnt::expand(&self.bucket, Some(options))
    }
}
