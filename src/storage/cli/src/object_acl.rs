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

//! Manage the access control list of an object.

use crate::args::AclRole;
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::{Object, ObjectAccessControl};
use google_cloud_wkt::FieldMask;

/// Fetches the object including its ACL, which the service omits by default.
pub(crate) async fn get(
    client: &StorageControl,
    bucket: &str,
    object: &str,
) -> anyhow::Result<Object> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket))
        .set_object(object)
        .set_read_mask(FieldMask::default().set_paths(["*"]))
        .send()
        .await?;
    Ok(object)
}

/// Sends `acl` as the new ACL of `object`, conditional on its metageneration.
pub(crate) async fn update(
    client: &StorageControl,
    object: Object,
    acl: Vec<ObjectAccessControl>,
) -> anyhow::Result<Object> {
    let metageneration = object.metageneration;
    let object = client
        .update_object()
        .set_object(object.set_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["acl"]))
        .send()
        .await?;
    Ok(object)
}

pub async fn print(
    client: &StorageControl,
    bucket: &str,
    object: &str,
) -> anyhow::Result<Vec<ObjectAccessControl>> {
    let object = get(client, bucket, object).await?;
    for entry in &object.acl {
        println!("{}: {}", entry.entity, entry.role);
    }
    Ok(object.acl)
}

pub async fn print_for_entity(
    client: &StorageControl,
    bucket: &str,
    object: &str,
    entity: &str,
) -> anyhow::Result<Option<ObjectAccessControl>> {
    let found = get(client, bucket, object)
        .await?
        .acl
        .into_iter()
        .find(|x| x.entity == entity);
    match &found {
        Some(entry) => println!("{}: {}", entry.entity, entry.role),
        None => println!("ACL entry for {entity} not found in gs://{bucket}/{object}"),
    }
    Ok(found)
}

pub async fn add(
    client: &StorageControl,
    bucket: &str,
    object: &str,
    entity: &str,
    role: AclRole,
) -> anyhow::Result<Object> {
    let current = get(client, bucket, object).await?;
    let mut acl = current.acl.clone();
    acl.retain(|x| x.entity != entity);
    acl.push(
        ObjectAccessControl::new()
            .set_entity(entity)
            .set_role(role.as_str()),
    );
    let updated = update(client, current, acl).await?;
    println!(
        "Added {entity} ({}) to gs://{bucket}/{object} ACL",
        role.as_str()
    );
    Ok(updated)
}

/// Returns `None`, without updating the object, when `entity` has no entry.
pub async fn delete(
    client: &StorageControl,
    bucket: &str,
    object: &str,
    entity: &str,
) -> anyhow::Result<Option<Object>> {
    let current = get(client, bucket, object).await?;
    let mut acl = current.acl.clone();
    acl.retain(|x| x.entity != entity);
    if acl.len() == current.acl.len() {
        println!("ACL entry for {entity} not found in gs://{bucket}/{object}");
        return Ok(None);
    }
    let updated = update(client, current, acl).await?;
    println!("Deleted {entity} from gs://{bucket}/{object} ACL");
    Ok(Some(updated))
}
