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

//! Objects protected with customer-supplied encryption keys.
//!
//! The service never stores these keys. Every read or write of an encrypted
//! object must present the same key that was used to write it.

use crate::bucket_name;
use crate::operation::EncryptionKey;
use anyhow::Context;
use base64::{Engine as _, engine::general_purpose};
use google_cloud_storage::builder_ext::RewriteObjectExt;
use google_cloud_storage::client::{Storage, StorageControl};
use google_cloud_storage::model::{CommonObjectRequestParams, Object};
use google_cloud_storage::model_ext::KeyAes256;
use rand::RngCore;
use std::path::Path;

/// Generates a random 256-bit key and prints its base64 encoding.
pub fn generate_key() -> String {
    let mut key = [0u8; 32];
    rand::rng().fill_bytes(&mut key);
    let key = general_purpose::STANDARD.encode(key);
    println!("Your encryption key: {key}");
    key
}

fn to_aes256(key: &EncryptionKey) -> anyhow::Result<KeyAes256> {
    Ok(KeyAes256::new(key.as_bytes())?)
}

pub async fn upload<T>(
    client: &Storage<T>,
    bucket: &str,
    object: &str,
    source: &Path,
    key: &EncryptionKey,
) -> anyhow::Result<Object>
where
    T: google_cloud_storage::stub::Storage + 'static,
{
    let payload = tokio::fs::read(source)
        .await
        .with_context(|| format!("cannot read {}", source.display()))?;
    let object = client
        .write_object(bucket_name(bucket), object, bytes::Bytes::from(payload))
        .set_key(to_aes256(key)?)
        .send_unbuffered()
        .await?;
    println!(
        "Uploaded encrypted object {} to gs://{bucket}/{}",
        source.display(),
        object.name
    );
    Ok(object)
}

pub async fn download<T>(
    client: &Storage<T>,
    bucket: &str,
    object: &str,
    destination: &Path,
    key: &EncryptionKey,
) -> anyhow::Result<u64>
where
    T: google_cloud_storage::stub::Storage + 'static,
{
    let size =
        crate::objects::save(client, bucket, object, destination, Some(to_aes256(key)?)).await?;
    println!(
        "Encrypted object gs://{bucket}/{object} downloaded to {}",
        destination.display()
    );
    Ok(size)
}

/// Rewrites the object in place, decrypting with `key` and encrypting with
/// `new_key`.
pub async fn rotate_key(
    client: &StorageControl,
    bucket: &str,
    object: &str,
    key: &EncryptionKey,
    new_key: &EncryptionKey,
) -> anyhow::Result<Object> {
    let old: CommonObjectRequestParams = to_aes256(key)?.into();
    let updated = client
        .rewrite_object()
        .set_source_bucket(bucket_name(bucket))
        .set_source_object(object)
        .set_copy_source_encryption_algorithm(old.encryption_algorithm)
        .set_copy_source_encryption_key_bytes(old.encryption_key_bytes)
        .set_copy_source_encryption_key_sha256_bytes(old.encryption_key_sha256_bytes)
        .set_destination_bucket(bucket_name(bucket))
        .set_destination_name(object)
        .set_common_object_request_params(CommonObjectRequestParams::from(to_aes256(new_key)?))
        .rewrite_until_done()
        .await?;
    println!("Rotated encryption key for object gs://{bucket}/{object}");
    Ok(updated)
}
