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

//! Upload, download, copy, move, and inspect objects.

use crate::bucket_name;
use anyhow::Context;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_storage::builder_ext::RewriteObjectExt;
use google_cloud_storage::client::{Storage, StorageControl};
use google_cloud_storage::model::{Object, ObjectAccessControl};
use google_cloud_storage::model_ext::KeyAes256;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Prints the name of each object in the bucket.
///
/// Only objects starting with `prefix` are listed when it is present.
pub async fn list(
    client: &StorageControl,
    bucket: &str,
    prefix: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    let mut objects = client
        .list_objects()
        .set_parent(bucket_name(bucket))
        .set_prefix(prefix.unwrap_or_default())
        .by_item();
    let mut names = Vec::new();
    while let Some(object) = objects.next().await.transpose()? {
        println!("Object: {}", object.name);
        names.push(object.name);
    }
    Ok(names)
}

pub async fn upload<T>(
    client: &Storage<T>,
    bucket: &str,
    object: &str,
    source: &Path,
) -> anyhow::Result<Object>
where
    T: google_cloud_storage::stub::Storage + 'static,
{
    let payload = tokio::fs::read(source)
        .await
        .with_context(|| format!("cannot read {}", source.display()))?;
    let object = client
        .write_object(bucket_name(bucket), object, bytes::Bytes::from(payload))
        .send_unbuffered()
        .await?;
    println!(
        "Uploaded {} to gs://{bucket}/{}",
        source.display(),
        object.name
    );
    Ok(object)
}

/// Streams the object contents into `destination`, returning the number of
/// bytes written.
pub async fn download<T>(
    client: &Storage<T>,
    bucket: &str,
    object: &str,
    destination: &Path,
) -> anyhow::Result<u64>
where
    T: google_cloud_storage::stub::Storage + 'static,
{
    let size = save(client, bucket, object, destination, None).await?;
    println!(
        "Downloaded gs://{bucket}/{object} to {}",
        destination.display()
    );
    Ok(size)
}

/// Streams an object into `destination`, returning the number of bytes written.
///
/// Objects written with a customer-supplied key can only be read with `key`.
pub(crate) async fn save<T>(
    client: &Storage<T>,
    bucket: &str,
    object: &str,
    destination: &Path,
    key: Option<KeyAes256>,
) -> anyhow::Result<u64>
where
    T: google_cloud_storage::stub::Storage + 'static,
{
    let mut request = client.read_object(bucket_name(bucket), object);
    if let Some(key) = key {
        request = request.set_key(key);
    }
    let mut reader = request.send().await?;
    let mut file = tokio::fs::File::create(destination)
        .await
        .with_context(|| format!("cannot create {}", destination.display()))?;
    let mut size = 0_u64;
    while let Some(data) = reader.next().await.transpose()? {
        file.write_all(&data).await?;
        size += data.len() as u64;
    }
    file.flush().await?;
    Ok(size)
}

async fn rewrite(
    client: &StorageControl,
    bucket: &str,
    object: &str,
    destination: &str,
) -> anyhow::Result<Object> {
    let copied = client
        .rewrite_object()
        .set_source_bucket(bucket_name(bucket))
        .set_source_object(object)
        .set_destination_bucket(bucket_name(bucket))
        .set_destination_name(destination)
        .rewrite_until_done()
        .await?;
    Ok(copied)
}

/// Copies `object` to `destination` in the same bucket.
pub async fn copy(
    client: &StorageControl,
    bucket: &str,
    object: &str,
    destination: &str,
) -> anyhow::Result<Object> {
    let copied = rewrite(client, bucket, object, destination).await?;
    println!("Copied gs://{bucket}/{object} to gs://{bucket}/{destination}");
    Ok(copied)
}

/// Renames `object` to `destination`.
///
/// The object is copied first, the source is deleted only after the copy
/// completes.
pub async fn rename(
    client: &StorageControl,
    bucket: &str,
    object: &str,
    destination: &str,
) -> anyhow::Result<Object> {
    let moved = rewrite(client, bucket, object, destination).await?;
    client
        .delete_object()
        .set_bucket(bucket_name(bucket))
        .set_object(object)
        .send()
        .await?;
    println!("Moved gs://{bucket}/{object} to gs://{bucket}/{destination}");
    Ok(moved)
}

/// Grants `allUsers` read access to the object.
pub async fn make_public(
    client: &StorageControl,
    bucket: &str,
    object: &str,
) -> anyhow::Result<Object> {
    const ALL_USERS: &str = "allUsers";
    let current = crate::object_acl::get(client, bucket, object).await?;
    let mut acl = current.acl.clone();
    acl.retain(|x| x.entity != ALL_USERS);
    acl.push(
        ObjectAccessControl::new()
            .set_entity(ALL_USERS)
            .set_role("READER"),
    );
    let updated = crate::object_acl::update(client, current, acl).await?;
    println!("gs://{bucket}/{object} is now public");
    Ok(updated)
}

pub async fn delete(client: &StorageControl, bucket: &str, object: &str) -> anyhow::Result<()> {
    client
        .delete_object()
        .set_bucket(bucket_name(bucket))
        .set_object(object)
        .send()
        .await?;
    println!("Deleted gs://{bucket}/{object}");
    Ok(())
}

/// Prints the object metadata.
pub async fn metadata(
    client: &StorageControl,
    bucket: &str,
    object: &str,
) -> anyhow::Result<Object> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket))
        .set_object(object)
        .send()
        .await?;
    println!("Blob: {}", object.name);
    println!("Bucket: {}", object.bucket);
    println!("Storage class: {}", object.storage_class);
    println!("Size: {}", object.size);
    println!("Generation: {}", object.generation);
    println!("Metageneration: {}", object.metageneration);
    println!("Content-type: {}", object.content_type);
    println!("Content-encoding: {}", object.content_encoding);
    println!("Content-language: {}", object.content_language);
    println!("Cache-control: {}", object.cache_control);
    if !object.kms_key.is_empty() {
        println!("KMS key: {}", object.kms_key);
    }
    if let Some(created) = &object.create_time {
        println!("Created: {created:?}");
    }
    if let Some(updated) = &object.update_time {
        println!("Updated: {updated:?}");
    }
    for (key, value) in &object.metadata {
        println!("Metadata: {key}={value}");
    }
    Ok(object)
}
