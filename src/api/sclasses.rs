use super::{resolve_disabled, ApiClient, ResourceEndpoints};
use crate::models::{NewSclass, Sclass, Validate, ValidationErrors};
use crate::store::Slice;

pub const ENDPOINTS: ResourceEndpoints = ResourceEndpoints {
    family: "sclass",
    list: "SclassList",
    detail: "Sclass",
    create: "createSclass",
};

pub async fn fetch_all(client: &ApiClient, slice: &mut Slice<Vec<Sclass>>, school_id: &str) {
    client.fetch_into(&ENDPOINTS.list_path(school_id), slice).await;
}

pub async fn fetch_detail(client: &ApiClient, slice: &mut Slice<Sclass>, class_id: &str) {
    client.fetch_into(&ENDPOINTS.detail_path(class_id), slice).await;
}

pub async fn create(
    client: &ApiClient,
    slice: &mut Slice<Sclass>,
    payload: &NewSclass,
) -> Result<(), ValidationErrors> {
    payload.validate()?;
    client.post_into(ENDPOINTS.create, payload, slice).await;
    Ok(())
}

pub fn delete(slice: &mut Slice<Vec<Sclass>>) {
    resolve_disabled(slice);
}
