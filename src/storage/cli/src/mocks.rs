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

//! Test doubles for the Cloud Storage clients.

use gax::options::RequestOptions;
use gax::response::Response;
use gcs::model::{
    Bucket, CreateBucketRequest, DeleteBucketRequest, DeleteObjectRequest, GetBucketRequest,
    GetObjectRequest, ListBucketsRequest, ListBucketsResponse, ListObjectsRequest,
    ListObjectsResponse, Object, ReadObjectRequest, RewriteObjectRequest, RewriteResponse,
    UpdateBucketRequest, UpdateObjectRequest,
};
use gcs::model_ext::{ObjectHighlights, WriteObjectRequest};
use gcs::read_object::ReadObjectResponse;
use gcs::streaming_source::{Seek, StreamingSource};
use google_cloud_gax as gax;
use google_cloud_iam_v1 as iam_v1;
use google_cloud_storage as gcs;

mockall::mock! {
    #[derive(Debug)]
    pub StorageControl {}
    impl gcs::stub::StorageControl for StorageControl {
        async fn get_bucket(&self, _req: GetBucketRequest, _options: RequestOptions) -> gax::Result<Response<Bucket>>;
        async fn create_bucket(&self, _req: CreateBucketRequest, _options: RequestOptions) -> gax::Result<Response<Bucket>>;
        async fn delete_bucket(&self, _req: DeleteBucketRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
        async fn list_buckets(&self, _req: ListBucketsRequest, _options: RequestOptions) -> gax::Result<Response<ListBucketsResponse>>;
        async fn update_bucket(&self, _req: UpdateBucketRequest, _options: RequestOptions) -> gax::Result<Response<Bucket>>;
        async fn get_iam_policy(&self, _req: iam_v1::model::GetIamPolicyRequest, _options: RequestOptions) -> gax::Result<Response<iam_v1::model::Policy>>;
        async fn set_iam_policy(&self, _req: iam_v1::model::SetIamPolicyRequest, _options: RequestOptions) -> gax::Result<Response<iam_v1::model::Policy>>;
        async fn get_object(&self, _req: GetObjectRequest, _options: RequestOptions) -> gax::Result<Response<Object>>;
        async fn update_object(&self, _req: UpdateObjectRequest, _options: RequestOptions) -> gax::Result<Response<Object>>;
        async fn delete_object(&self, _req: DeleteObjectRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
        async fn list_objects(&self, _req: ListObjectsRequest, _options: RequestOptions) -> gax::Result<Response<ListObjectsResponse>>;
        async fn rewrite_object(&self, _req: RewriteObjectRequest, _options: RequestOptions) -> gax::Result<Response<RewriteResponse>>;
    }
}

mockall::mock! {
    #[derive(Debug)]
    pub Storage {}
    impl gcs::stub::Storage for Storage {
        async fn read_object(&self, _req: ReadObjectRequest, _options: gcs::request_options::RequestOptions) -> gcs::Result<ReadObjectResponse>;
        async fn write_object_buffered<P: StreamingSource + Send + Sync + 'static>(
            &self,
            _payload: P,
            _req: WriteObjectRequest,
            _options: gcs::request_options::RequestOptions,
        ) -> gcs::Result<Object>;
        async fn write_object_unbuffered<P: StreamingSource + Seek + Send + Sync + 'static>(
            &self,
            _payload: P,
            _req: WriteObjectRequest,
            _options: gcs::request_options::RequestOptions,
        ) -> gcs::Result<Object>;
    }
}

/// A control client whose stub expects no calls.
pub fn control() -> gcs::client::StorageControl {
    gcs::client::StorageControl::from_stub(MockStorageControl::new())
}

/// A data client whose stub expects no calls.
pub fn storage() -> gcs::client::Storage<MockStorage> {
    gcs::client::Storage::from_stub(MockStorage::new())
}

pub fn read_response(contents: &'static str) -> ReadObjectResponse {
    ReadObjectResponse::from_source(ObjectHighlights::default(), bytes::Bytes::from(contents))
}

pub fn not_found() -> gax::error::Error {
    use gax::error::rpc::{Code, Status};
    gax::error::Error::service(Status::default().set_code(Code::NotFound))
}


/// True when the request asks for the object ACL, which `get_object` omits by default.
pub fn requests_acl(r: &GetObjectRequest) -> bool {
    r.read_mask
        .as_ref()
        .is_some_and(|m| m.paths.iter().any(|p| p == "*" || p == "acl"))
}
