use super::{resolve_disabled, ApiClient, ResourceEndpoints};
use crate::models::{NewSubject, Subject, Validate, ValidationErrors};
use crate::store::Slice;

pub const ENDPOINTS: ResourceEndpoints = ResourceEndpoints {
    family: "subject",
    list: "SubjectList",
    detail: "Subject",
    create: "createSubject",
};

pub async fn fetch_all(client: &ApiClient, slice: &mut Slice<Vec<Subject>>, school_id: &str) {
    client.fetch_into(&ENDPOINTS.list_path(school_id), slice).await;
}

/// Subjects taught in one class.
pub async fn fetch_for_class(client: &ApiClient, slice: &mut Slice<Vec<Subject>>, class_id: &str) {
    client
        .fetch_into(&format!("ClassSubjects/{}", class_id), slice)
        .await;
}

pub async fn fetch_detail(client: &ApiClient, slice: &mut Slice<Subject>, subject_id: &str) {
    client.fetch_into(&ENDPOINTS.detail_path(subject_id), slice).await;
}

pub async fn create(
    client: &ApiClient,
    slice: &mut Slice<Subject>,
    payload: &NewSubject,
) -> Result<(), ValidationErrors> {
    payload.validate()?;
    client.post_into(ENDPOINTS.create, payload, slice).await;
    Ok(())
}

pub fn delete(slice: &mut Slice<Vec<Subject>>) {
    resolve_disabled(slice);
}
