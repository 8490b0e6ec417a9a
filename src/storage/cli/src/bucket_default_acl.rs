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

//! Manage the default object ACL of a bucket.
//!
//! New objects in the bucket receive these entries when the upload does not
//! supply an ACL of its own.

use crate::args::AclRole;
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::{Bucket, ObjectAccessControl};
use google_cloud_wkt::FieldMask;

const MASK: &str = "defaultObjectAcl";

pub async fn print(
    client: &StorageControl,
    bucket: &str,
) -> anyhow::Result<Vec<ObjectAccessControl>> {
    let bucket = client.get_bucket().set_name(bucket_name(bucket)).send().await?;
    for entry in &bucket.default_object_acl {
        println!("{}: {}", entry.entity, entry.role);
    }
    Ok(bucket.default_object_acl)
}

pub async fn print_for_entity(
    client: &StorageControl,
    bucket_id: &str,
    entity: &str,
) -> anyhow::Result<Option<ObjectAccessControl>> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let found = bucket
        .default_object_acl
        .into_iter()
        .find(|x| x.entity == entity);
    match &found {
        Some(entry) => println!("{}: {}", entry.entity, entry.role),
        None => println!("Default ACL entry for {entity} not found in bucket {bucket_id}"),
    }
    Ok(found)
}

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
    let mut acl = bucket.default_object_acl.clone();
    acl.retain(|x| x.entity != entity);
    acl.push(
        ObjectAccessControl::new()
            .set_entity(entity)
            .set_role(role.as_str()),
    );
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_default_object_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths([MASK]))
        .send()
        .await?;
    println!(
        "Added {entity} ({}) to gs://{bucket_id} default ACL",
        role.as_str()
    );
    Ok(bucket)
}

/// Returns `None`, without updating the bucket, when `entity` has no entry.
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
    let mut acl = bucket.default_object_acl.clone();
    acl.retain(|x| x.entity != entity);
    if acl.len() == bucket.default_object_acl.len() {
        println!("Default ACL entry for {entity} not found in bucket {bucket_id}");
        return Ok(None);
    }
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_default_object_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths([MASK]))
        .send()
        .await?;
    println!("Deleted {entity} from gs://{bucket_id} default ACL");
    Ok(Some(bucket))
}
