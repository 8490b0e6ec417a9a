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

//! Requester pays buckets.
//!
//! Requests against these buckets are billed to the caller's project. The
//! clients used here are created with that project as their quota project.

use crate::bucket_name;
use google_cloud_storage::client::{Storage, StorageControl};
use google_cloud_storage::model::{Bucket, bucket::Billing};
use google_cloud_wkt::FieldMask;
use std::path::Path;

/// Turns requester pays on or off.
pub async fn set(
    client: &StorageControl,
    bucket_id: &str,
    enabled: bool,
) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_billing(Billing::new().set_requester_pays(enabled)))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["billing"]))
        .send()
        .await?;
    println!(
        "Requester pays has been {} for {bucket_id}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(bucket)
}

/// Prints and returns whether requester pays is enabled.
pub async fn status(client: &StorageControl, bucket_id: &str) -> anyhow::Result<bool> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let enabled = bucket.billing.is_some_and(|b| b.requester_pays);
    println!(
        "Requester Pays is {} for {bucket_id}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(enabled)
}

pub async fn download<T>(
    client: &Storage<T>,
    bucket: &str,
    object: &str,
    destination: &Path,
) -> anyhow::Result<u64>
where
    T: google_cloud_storage::stub::Storage + 'static,
{
    let size = crate::objects::save(client, bucket, object, destination, None).await?;
    println!(
        "Downloaded gs://{bucket}/{object} to {} using requester-pays requests",
        destination.display()
    );
    Ok(size)
}
