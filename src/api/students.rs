use super::{resolve_disabled, ApiClient, ResourceEndpoints};
use crate::models::{AttendanceSubmission, NewStudent, Student, Validate, ValidationErrors};
use crate::store::Slice;

pub const ENDPOINTS: ResourceEndpoints = ResourceEndpoints {
    family: "student",
    list: "StudentList",
    detail: "Student",
    create: "createStudent",
};

/// All students registered under a school.
pub async fn fetch_all(client: &ApiClient, slice: &mut Slice<Vec<Student>>, school_id: &str) {
    client.fetch_into(&ENDPOINTS.list_path(school_id), slice).await;
}

/// Students enrolled in one class.
pub async fn fetch_for_class(client: &ApiClient, slice: &mut Slice<Vec<Student>>, class_id: &str) {
    client
        .fetch_into(&format!("ClassStudents/{}", class_id), slice)
        .await;
}

pub async fn fetch_detail(client: &ApiClient, slice: &mut Slice<Student>, student_id: &str) {
    client.fetch_into(&ENDPOINTS.detail_path(student_id), slice).await;
}

/// Register a new student. Validation failures never reach the wire.
pub async fn register(
    client: &ApiClient,
    slice: &mut Slice<Student>,
    payload: &NewStudent,
) -> Result<(), ValidationErrors> {
    payload.validate()?;
    client.post_into(ENDPOINTS.create, payload, slice).await;
    Ok(())
}

/// Append one attendance mark to a student's history.
pub async fn submit_attendance(
    client: &ApiClient,
    slice: &mut Slice<Student>,
    student_id: &str,
    submission: &AttendanceSubmission,
) -> Result<(), ValidationErrors> {
    submission.validate()?;
    client
        .post_into(&format!("StudentAttendance/{}", student_id), submission, slice)
        .await;
    Ok(())
}

pub fn delete(slice: &mut Slice<Vec<Student>>) {
    resolve_disabled(slice);
}
