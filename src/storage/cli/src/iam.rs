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

//! Manage the IAM policy of a bucket.

use crate::bucket_name;
use google_cloud_iam_v1::model::{Binding, GetPolicyOptions, Policy};
use google_cloud_storage::client::StorageControl;

async fn get_policy(client: &StorageControl, bucket_id: &str) -> anyhow::Result<Policy> {
    let policy = client
        .get_iam_policy()
        .set_resource(bucket_name(bucket_id))
        .set_options(GetPolicyOptions::new().set_requested_policy_version(3))
        .send()
        .await?;
    Ok(policy)
}

async fn set_policy(
    client: &StorageControl,
    bucket_id: &str,
    policy: Policy,
) -> anyhow::Result<Policy> {
    let policy = client
        .set_iam_policy()
        .set_resource(bucket_name(bucket_id))
        .set_policy(policy)
        .send()
        .await?;
    Ok(policy)
}

/// Prints each role in the bucket policy followed by its members.
pub async fn view(client: &StorageControl, bucket_id: &str) -> anyhow::Result<Policy> {
    let policy = get_policy(client, bucket_id).await?;
    println!("Printing Bucket IAM members for Bucket: {bucket_id}");
    for binding in &policy.bindings {
        println!("Role: {}", binding.role);
        println!("Members:");
        for member in &binding.members {
            println!("  {member}");
        }
        if let Some(condition) = &binding.condition {
            println!("  with condition: {}", condition.expression);
        }
        println!();
    }
    Ok(policy)
}

/// Grants `role` to `member` on the bucket.
///
/// Conditional bindings are left untouched, the member is added to the
/// unconditional binding for `role`.
pub async fn add_member(
    client: &StorageControl,
    bucket_id: &str,
    role: &str,
    member: &str,
) -> anyhow::Result<Policy> {
    let mut policy = get_policy(client, bucket_id).await?;
    match policy
        .bindings
        .iter_mut()
        .find(|b| b.role == role && b.condition.is_none())
    {
        Some(binding) if binding.members.iter().any(|m| m == member) => {}
        Some(binding) => binding.members.push(member.to_string()),
        None => policy
            .bindings
            .push(Binding::new().set_role(role).set_members([member])),
    }
    let policy = set_policy(client, bucket_id, policy).await?;
    println!("Added {member} with role {role} to {bucket_id}");
    Ok(policy)
}

/// Revokes `role` from `member`, dropping the binding when it becomes empty.
///
/// Only the unconditional binding for `role` is changed.
pub async fn remove_member(
    client: &StorageControl,
    bucket_id: &str,
    role: &str,
    member: &str,
) -> anyhow::Result<Policy> {
    let mut policy = get_policy(client, bucket_id).await?;
    let Some(binding) = policy
        .bindings
        .iter_mut()
        .find(|b| {
            b.role == role && b.condition.is_none() && b.members.iter().any(|m| m == member)
        })
    else {
        println!("Member {member} with role {role} not found in {bucket_id}");
        return Ok(policy);
    };
    binding.members.retain(|m| m != member);
    policy.bindings.retain(|b| !b.members.is_empty());
    let policy = set_policy(client, bucket_id, policy).await?;
    println!("Removed {member} with role {role} from {bucket_id}");
    Ok(policy)
}
