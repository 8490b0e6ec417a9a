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

//! Object lifecycle management for a bucket.

use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::bucket::Lifecycle;
use google_cloud_storage::model::{
    Bucket,
    bucket::lifecycle::{
        Rule,
        rule::{Action, Condition},
    },
};
use google_cloud_wkt::FieldMask;

/// Prints the lifecycle rules of a bucket.
pub async fn view(client: &StorageControl, bucket_id: &str) -> anyhow::Result<Option<Lifecycle>> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    match &bucket.lifecycle {
        Some(lifecycle) if !lifecycle.rule.is_empty() => {
            println!("Lifecycle rules for bucket {bucket_id}:");
            for rule in &lifecycle.rule {
                println!("{rule:?}");
            }
        }
        _ => println!("Lifecycle management is not enabled for bucket {bucket_id}"),
    }
    Ok(bucket.lifecycle)
}

/// Replaces the lifecycle configuration with a single rule deleting objects
/// older than `age_days`.
pub async fn enable(
    client: &StorageControl,
    bucket_id: &str,
    age_days: i32,
) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let rule = Rule::new()
        .set_action(Action::new().set_type("Delete"))
        .set_condition(Condition::new().set_age_days(age_days));
    let lifecycle = Lifecycle::new().set_rule(vec![rule]);
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_lifecycle(lifecycle))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["lifecycle"]))
        .send()
        .await?;
    println!("Lifecycle management is enabled for bucket {bucket_id} and the rules are:");
    if let Some(lifecycle) = &bucket.lifecycle {
        for rule in &lifecycle.rule {
            println!("{rule:?}");
        }
    }
    Ok(bucket)
}

/// Removes all lifecycle rules from the bucket.
pub async fn disable(client: &StorageControl, bucket_id: &str) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let metageneration = bucket.metageneration;
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_or_clear_lifecycle(None::<Lifecycle>))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["lifecycle"]))
        .send()
        .await?;
    println!("Lifecycle management is disabled for bucket {bucket_id}.");
    Ok(bucket)
}
