use super::{resolve_disabled, ApiClient, ResourceEndpoints};
use crate::models::{Complaint, NewComplaint, Validate, ValidationErrors};
use crate::store::Slice;

pub const ENDPOINTS: ResourceEndpoints = ResourceEndpoints {
    family: "complain",
    list: "ComplainList",
    detail: "Complain",
    create: "createComplain",
};

pub async fn fetch_all(client: &ApiClient, slice: &mut Slice<Vec<Complaint>>, school_id: &str) {
    client.fetch_into(&ENDPOINTS.list_path(school_id), slice).await;
}

pub async fn submit(
    client: &ApiClient,
    slice: &mut Slice<Complaint>,
    payload: &NewComplaint,
) -> Result<(), ValidationErrors> {
    payload.validate()?;
    client.post_into(ENDPOINTS.create, payload, slice).await;
    Ok(())
}

pub fn delete(slice: &mut Slice<Vec<Complaint>>) {
    resolve_disabled(slice);
}
