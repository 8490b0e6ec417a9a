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

//! Manage Cloud Storage buckets and objects from the command line.
//!
//! The command line is parsed into an [Args][args::Args], validated into an
//! [Operation], and then [run] against the Cloud Storage clients.

pub mod args;
pub mod bucket_acl;
pub mod bucket_default_acl;
pub mod bucket_labels;
pub mod bucket_lifecycle;
pub mod buckets;
pub mod encryption;
pub mod error;
pub mod iam;
pub mod kms;
pub mod object_acl;
pub mod objects;
pub mod operation;
pub mod requester_pays;

#[cfg(test)]
mod mocks;

pub use error::ArgsError;
pub use operation::Operation;

use google_cloud_storage::client::{Storage, StorageControl};

pub const DESCRIPTION: &str = concat!(
    "Manage Cloud Storage buckets, objects, and their access controls.",
    " Credentials are found using Application Default Credentials."
);

/// The fully qualified name of a bucket, as used in requests.
pub(crate) fn bucket_name(bucket: &str) -> String {
    format!("projects/_/buckets/{bucket}")
}

/// Runs a validated operation.
pub async fn run<T>(
    op: Operation,
    control: &StorageControl,
    storage: &Storage<T>,
) -> anyhow::Result<()>
where
    T: google_cloud_storage::stub::Storage + 'static,
{
    tracing::info!("running {op:?}");
    match op {
        Operation::PrintBucketAcl { bucket } => {
            bucket_acl::print(control, &bucket).await?;
        }
        Operation::PrintBucketAclForEntity { bucket, entity } => {
            bucket_acl::print_for_entity(control, &bucket, &entity).await?;
        }
        Operation::AddBucketAcl {
            bucket,
            entity,
            role,
        } => {
            bucket_acl::add(control, &bucket, &entity, role).await?;
        }
        Operation::DeleteBucketAcl { bucket, entity } => {
            bucket_acl::delete(control, &bucket, &entity).await?;
        }

        Operation::PrintBucketDefaultAcl { bucket } => {
            bucket_default_acl::print(control, &bucket).await?;
        }
        Operation::PrintBucketDefaultAclForEntity { bucket, entity } => {
            bucket_default_acl::print_for_entity(control, &bucket, &entity).await?;
        }
        Operation::AddBucketDefaultAcl {
            bucket,
            entity,
            role,
        } => {
            bucket_default_acl::add(control, &bucket, &entity, role).await?;
        }
        Operation::DeleteBucketDefaultAcl { bucket, entity } => {
            bucket_default_acl::delete(control, &bucket, &entity).await?;
        }

        Operation::PrintBucketLabels { bucket } => {
            bucket_labels::print(control, &bucket).await?;
        }
        Operation::AddBucketLabel {
            bucket,
            label,
            value,
        } => {
            bucket_labels::add(control, &bucket, &label, &value).await?;
        }
        Operation::RemoveBucketLabel { bucket, label } => {
            bucket_labels::remove(control, &bucket, &label).await?;
        }

        Operation::ViewLifecycle { bucket } => {
            bucket_lifecycle::view(control, &bucket).await?;
        }
        Operation::EnableLifecycle { bucket, age_days } => {
            bucket_lifecycle::enable(control, &bucket, age_days).await?;
        }
        Operation::DisableLifecycle { bucket } => {
            bucket_lifecycle::disable(control, &bucket).await?;
        }

        Operation::ListBuckets { project } => {
            buckets::list(control, &project).await?;
        }
        Operation::CreateBucket { project, bucket } => {
            buckets::create(control, &project, &bucket).await?;
        }
        Operation::DeleteBucket { bucket } => {
            buckets::delete(control, &bucket).await?;
        }

        Operation::GenerateEncryptionKey => {
            encryption::generate_key();
        }
        Operation::UploadEncryptedObject {
            bucket,
            object,
            source,
            key,
        } => {
            encryption::upload(storage, &bucket, &object, &source, &key).await?;
        }
        Operation::DownloadEncryptedObject {
            bucket,
            object,
            destination,
            key,
        } => {
            encryption::download(storage, &bucket, &object, &destination, &key).await?;
        }
        Operation::RotateEncryptionKey {
            bucket,
            object,
            key,
            new_key,
        } => {
            encryption::rotate_key(control, &bucket, &object, &key, &new_key).await?;
        }

        Operation::ViewIamMembers { bucket } => {
            iam::view(control, &bucket).await?;
        }
        Operation::AddIamMember {
            bucket,
            role,
            member,
        } => {
            iam::add_member(control, &bucket, &role, &member).await?;
        }
        Operation::RemoveIamMember {
            bucket,
            role,
            member,
        } => {
            iam::remove_member(control, &bucket, &role, &member).await?;
        }

        Operation::PrintObjectAcl { bucket, object } => {
            object_acl::print(control, &bucket, &object).await?;
        }
        Operation::PrintObjectAclForEntity {
            bucket,
            object,
            entity,
        } => {
            object_acl::print_for_entity(control, &bucket, &object, &entity).await?;
        }
        Operation::AddObjectAcl {
            bucket,
            object,
            entity,
            role,
        } => {
            object_acl::add(control, &bucket, &object, &entity, role).await?;
        }
        Operation::DeleteObjectAcl {
            bucket,
            object,
            entity,
        } => {
            object_acl::delete(control, &bucket, &object, &entity).await?;
        }

        Operation::ListObjects { bucket, prefix } => {
            objects::list(control, &bucket, prefix.as_deref()).await?;
        }
        Operation::UploadObject {
            bucket,
            object,
            source,
        } => {
            objects::upload(storage, &bucket, &object, &source).await?;
        }
        Operation::DownloadObject {
            bucket,
            object,
            destination,
        } => {
            objects::download(storage, &bucket, &object, &destination).await?;
        }
        Operation::MoveObject {
            bucket,
            object,
            destination,
        } => {
            objects::rename(control, &bucket, &object, &destination).await?;
        }
        Operation::CopyObject {
            bucket,
            object,
            destination,
        } => {
            objects::copy(control, &bucket, &object, &destination).await?;
        }
        Operation::MakePublic { bucket, object } => {
            objects::make_public(control, &bucket, &object).await?;
        }
        Operation::DeleteObject { bucket, object } => {
            objects::delete(control, &bucket, &object).await?;
        }
        Operation::ObjectMetadata { bucket, object } => {
            objects::metadata(control, &bucket, &object).await?;
        }

        Operation::DownloadRequesterPays {
            bucket,
            object,
            destination,
            ..
        } => {
            requester_pays::download(storage, &bucket, &object, &destination).await?;
        }
        Operation::EnableRequesterPays { bucket, .. } => {
            requester_pays::set(control, &bucket, true).await?;
        }
        Operation::DisableRequesterPays { bucket, .. } => {
            requester_pays::set(control, &bucket, false).await?;
        }
        Operation::RequesterPaysStatus { bucket, .. } => {
            requester_pays::status(control, &bucket).await?;
        }

        Operation::EnableDefaultKmsKey {
            bucket, kms_key, ..
        } => {
            kms::enable_default_key(control, &bucket, &kms_key).await?;
        }
        Operation::UploadWithKmsKey {
            bucket,
            object,
            source,
            kms_key,
            ..
        } => {
            kms::upload(storage, &bucket, &object, &source, &kms_key).await?;
        }
    }
    Ok(())
}
