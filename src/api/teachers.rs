use super::{resolve_disabled, ApiClient, ResourceEndpoints};
use crate::models::{NewTeacher, Teacher, Validate, ValidationErrors};
use crate::store::Slice;

pub const ENDPOINTS: ResourceEndpoints = ResourceEndpoints {
    family: "teacher",
    list: "TeacherList",
    detail: "Teacher",
    create: "createTeacher",
};

pub async fn fetch_all(client: &ApiClient, slice: &mut Slice<Vec<Teacher>>, school_id: &str) {
    client.fetch_into(&ENDPOINTS.list_path(school_id), slice).await;
}

pub async fn fetch_detail(client: &ApiClient, slice: &mut Slice<Teacher>, teacher_id: &str) {
    client.fetch_into(&ENDPOINTS.detail_path(teacher_id), slice).await;
}

pub async fn register(
    client: &ApiClient,
    slice: &mut Slice<Teacher>,
    payload: &NewTeacher,
) -> Result<(), ValidationErrors> {
    payload.validate()?;
    client.post_into(ENDPOINTS.create, payload, slice).await;
    Ok(())
}

pub fn delete(slice: &mut Slice<Vec<Teacher>>) {
    resolve_disabled(slice);
}
