use super::{ApiClient, ResourceEndpoints};
use crate::models::AdminUser;
use crate::store::Slice;

// Login and session handling live outside this crate; the user family is
// limited to the signed-in admin's detail record.
pub const ENDPOINTS: ResourceEndpoints = ResourceEndpoints {
    family: "admin",
    list: "AdminList",
    detail: "Admin",
    create: "createAdmin",
};

pub async fn fetch_detail(client: &ApiClient, slice: &mut Slice<AdminUser>, admin_id: &str) {
    client.fetch_into(&ENDPOINTS.detail_path(admin_id), slice).await;
}
