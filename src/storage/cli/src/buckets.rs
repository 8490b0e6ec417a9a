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

//! List, create, and delete buckets.

use crate::bucket_name;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_storage::{client::StorageControl, model::Bucket};

/// Prints the name of every bucket in `project_id`.
pub async fn list(client: &StorageControl, project_id: &str) -> anyhow::Result<Vec<String>> {
    let mut buckets = client
        .list_buckets()
        .set_parent(format!("projects/{project_id}"))
        .by_item();
    let mut names = Vec::new();
    while let Some(bucket) = buckets.next().await.transpose()? {
        let name = bucket
            .name
            .strip_prefix("projects/_/buckets/")
            .unwrap_or(&bucket.name)
            .to_string();
        println!("{name}");
        names.push(name);
    }
    Ok(names)
}

pub async fn create(
    client: &StorageControl,
    project_id: &str,
    bucket_id: &str,
) -> anyhow::Result<Bucket> {
    let bucket = client
        .create_bucket()
        .set_parent("projects/_")
        .set_bucket_id(bucket_id)
        .set_bucket(Bucket::new().set_project(format!("projects/{project_id}")))
        .send()
        .await?;
    println!("Bucket {bucket_id} created.");
    tracing::info!("created bucket {bucket:?}");
    Ok(bucket)
}

pub async fn delete(client: &StorageControl, bucket_id: &str) -> anyhow::Result<()> {
    client
        .delete_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    println!("Bucket {bucket_id} deleted.");
    Ok(())
}
