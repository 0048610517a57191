use super::{resolve_disabled, ApiClient, ResourceEndpoints};
use crate::models::{NewNotice, Notice, Validate, ValidationErrors};
use crate::store::Slice;

pub const ENDPOINTS: ResourceEndpoints = ResourceEndpoints {
    family: "notice",
    list: "NoticeList",
    detail: "Notice",
    create: "createNotice",
};

pub async fn fetch_all(client: &ApiClient, slice: &mut Slice<Vec<Notice>>, school_id: &str) {
    client.fetch_into(&ENDPOINTS.list_path(school_id), slice).await;
}

pub async fn publish(
    client: &ApiClient,
    slice: &mut Slice<Notice>,
    payload: &NewNotice,
) -> Result<(), ValidationErrors> {
    payload.validate()?;
    client.post_into(ENDPOINTS.create, payload, slice).await;
    Ok(())
}

pub fn delete(slice: &mut Slice<Vec<Notice>>) {
    resolve_disabled(slice);
}
