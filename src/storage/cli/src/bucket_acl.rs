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

//! Manage the access control list of a bucket.

use crate::args::AclRole;
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::{Bucket, BucketAccessControl};
use google_cloud_wkt::FieldMask;

/// Prints and returns every entry in the bucket ACL.
pub async fn print(
    client: &StorageControl,
    bucket: &str,
) -> anyhow::Result<Vec<BucketAccessControl>> {
    let bucket = client.get_bucket().set_name(bucket_name(bucket)).send().await?;
    for entry in &bucket.acl {
        println!("{}: {}", entry.entity, entry.role);
    }
    Ok(bucket.acl)
}

/// Prints and returns the bucket ACL entry for `entity`, if any.
pub async fn print_for_entity(
    client: &StorageControl,
    bucket_id: &str,
    entity: &str,
) -> anyhow::Result<Option<BucketAccessControl>> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let found = bucket.acl.into_iter().find(|x| x.entity == entity);
    match &found {
        Some(entry) => println!("{}: {}", entry.entity, entry.role),
        None => println!("ACL entry for {entity} not found in bucket {bucket_id}"),
    }
    Ok(found)
}

/// Grants `role` to `entity` in the bucket ACL.
pub async fn add(
    client: &StorageControl,
    bucket_id: &str,
    entity: &str,
    role: AclRole,
) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let mut acl = bucket.acl.clone();
    acl.retain(|x| x.entity != entity);
    acl.push(
        BucketAccessControl::new()
            .set_entity(entity)
            .set_role(role.as_str()),
    );
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["acl"]))
        .send()
        .await?;
    println!(
        "Added {entity} ({}) to gs://{bucket_id} ACL",
        role.as_str()
    );
    Ok(bucket)
}

/// Removes the entries for `entity` from the bucket ACL.
///
/// Returns `None`, without updating the bucket, when there is no such entry.
pub async fn delete(
    client: &StorageControl,
    bucket_id: &str,
    entity: &str,
) -> anyhow::Result<Option<Bucket>> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let mut acl = bucket.acl.clone();
    acl.retain(|x| x.entity != entity);
    if acl.len() == bucket.acl.len() {
        println!("ACL entry for {entity} not found in bucket {bucket_id}");
        return Ok(None);
    }
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["acl"]))
        .send()
        .await?;
    println!("Deleted {entity} from gs://{bucket_id} ACL");
    Ok(Some(bucket))
}
