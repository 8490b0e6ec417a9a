// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Server-side encryption with Cloud KMS keys.

use crate::bucket_name;
use anyhow::Context;
use google_cloud_storage::client::{Storage, StorageControl};
use google_cloud_storage::model::{Bucket, Object};
use google_cloud_wkt::FieldMask;
use std::path::Path;

/// Sets the key used to encrypt new objects that do not name one.
pub async fn enable_default_key(
    client: &StorageControl,
    bucket_id: &str,
    kms_key: &str,
) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let encryption = bucket
        .encryption
        .clone()
        .unwrap_or_default()
        .set_default_kms_key(kms_key);
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_encryption(encryption))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["encryption.default_kms_key"]))
        .send()
        .await?;
    println!("The default KMS key for the bucket {bucket_id} has been set to {kms_key}");
    Ok(bucket)
}

pub async fn upload<T>(
    client: &Storage<T>,
    bucket: &str,
    object: &str,
    source: &Path,
    kms_key: &str,
) -> anyhow::Result<Object>
where
    T: google_cloud_storage::stub::Storage + 'static,
{
    let payload = tokio::fs::read(source)
        .await
        .with_context(|| format!("cannot read {}", source.display()))?;
    let object = client
        .write_object(bucket_name(bucket), object, bytes::Bytes::from(payload))
        .set_kms_key(kms_key)
        .send_unbuffered()
        .await?;
    println!(
        "Uploaded {} to gs://{bucket}/{} using encryption key {kms_key}",
        source.display(),
        object.name
    );
    Ok(object)
}
