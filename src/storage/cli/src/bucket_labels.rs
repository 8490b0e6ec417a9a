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

use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Bucket;
use google_cloud_wkt::FieldMask;
use std::collections::HashMap;

/// Prints the bucket labels, one `key: value` pair per line.
pub async fn print(
    client: &StorageControl,
    bucket_id: &str,
) -> anyhow::Result<HashMap<String, String>> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let mut keys = bucket.labels.keys().collect::<Vec<_>>();
    keys.sort();
    for key in keys {
        println!("{key}: {}", bucket.labels[key]);
    }
    Ok(bucket.labels)
}

pub async fn add(
    client: &StorageControl,
    bucket_id: &str,
    label: &str,
    value: &str,
) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let mut labels = bucket.labels.clone();
    labels.insert(label.to_string(), value.to_string());

    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_labels(labels))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["labels"]))
        .send()
        .await?;
    println!("Added label {label} ({value}) to {bucket_id}");
    Ok(bucket)
}

pub async fn remove(
    client: &StorageControl,
    bucket_id: &str,
    label: &str,
) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let mut labels = bucket.labels.clone();
    labels.remove(label);

    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_labels(labels))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["labels"]))
        .send()
        .await?;
    println!("Removed label {label} from {bucket_id}");
    Ok(bucket)
}
