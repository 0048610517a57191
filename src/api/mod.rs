mod client;
mod error;

pub mod complaints;
pub mod notices;
pub mod sclasses;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use client::{classify, ApiClient, BASE_URL_ENV, NETWORK_ERROR};
pub use error::ConfigError;

use crate::store::{Outcome, Slice};

/// Endpoint template for one resource family: `GET {base}/{list}/{id}`,
/// `GET {base}/{detail}/{id}`, `POST {base}/{create}`.
#[derive(Debug, Clone, Copy)]
pub struct ResourceEndpoints {
    pub family: &'static str,
    pub list: &'static str,
    pub detail: &'static str,
    pub create: &'static str,
}

impl ResourceEndpoints {
    pub fn list_path(&self, id: &str) -> String {
        format!("{}/{}", self.list, id)
    }

    pub fn detail_path(&self, id: &str) -> String {
        format!("{}/{}", self.detail, id)
    }
}

/// Delete endpoints exist server-side but are switched off in this build.
pub const DELETE_DISABLED_NOTICE: &str =
    "Sorry, the delete function has been disabled for now.";

/// Resolve a slice with the disabled-feature notice without touching the
/// network. The user gets an explicit message instead of a silent no-op.
pub fn resolve_disabled<T>(slice: &mut Slice<T>) {
    let token = slice.begin();
    slice.resolve(token, Outcome::Rejected(DELETE_DISABLED_NOTICE.to_string()));
}
