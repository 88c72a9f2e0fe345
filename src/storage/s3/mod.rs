
use aws_sdk_s3::output::HeadObjectOutput;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use futures::{Future, TryFutureExt};
use tokio::runtime::Handle;

use super::{ObjectStore, StoredEntry};
use crate::error::{ModtimesErr, ModtimesResult};

pub struct S3System {
    pub bucket: String,
    pub prefix: String,
    client: Client,
    handle: Handle,
}
impl S3System {
    pub fn new(bucket: String, prefix: String, handle: Handle) -> ModtimesResult<Self> {
        let client = {
            let config = handle.block_on(aws_config::from_env().load());
            Client::new(&config)
        };

        Ok(S3System {
            bucket,
            prefix,
            client,
            handle,
        })
    }

    fn head_object_future(
        &self,
        key: &str,
    ) -> impl Future<Output = ModtimesResult<HeadObjectOutput>> {
        self.client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .map_err(Into::<ModtimesErr>::into)
    }

    fn to_instant(key: &str, stamp: &aws_sdk_s3::types::DateTime) -> ModtimesResult<DateTime<Utc>> {
        DateTime::from_timestamp(stamp.secs(), stamp.subsec_nanos()).ok_or_else(|| {
            ModtimesErr::SystemError(format!(
                "Last modified of {} out of range: {:?}",
                key, stamp
            ))
        })
    }
}
impl ObjectStore for S3System {
    fn list_under_prefix(&self) -> ModtimesResult<Vec<StoredEntry>> {
        let list_output = self.handle.block_on(
            self.client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(&self.prefix)
                .send()
                .map_err(Into::<ModtimesErr>::into),
        )?;

        // Only the first page of the listing is consumed.
        if list_output.is_truncated {
            log::warn!(
                "Listing of {}/{} truncated after {} keys; later objects are not reported",
                &self.bucket,
                &self.prefix,
                list_output.key_count
            );
        }

        list_output
            .contents
            .unwrap_or_default()
            .into_iter()
            .map(|obj| {
                let key = obj
                    .key
                    .ok_or_else(|| ModtimesErr::SystemError("Listed object with no key".into()))?;
                Ok(StoredEntry {
                    key,
                    size: obj.size,
                })
            })
            .collect()
    }

    fn last_modified(&self, key: &str) -> ModtimesResult<DateTime<Utc>> {
        let head_output = self.handle.block_on(self.head_object_future(key))?;

        let stamp = head_output.last_modified.ok_or_else(|| {
            ModtimesErr::SystemError(format!("No last modified in metadata of {}", key))
        })?;

        Self::to_instant(key, &stamp)
    }
}
