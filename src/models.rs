use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typed wire shapes for every resource family. The backend speaks camelCase
/// JSON with Mongo-style `_id` keys; anything it sends that does not fit these
/// shapes is a parse error at the boundary, never a silent `null` downstream.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SclassRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub sclass_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub sub_name: String,
    pub sub_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// One attendance entry as stored on the student document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
    pub sub_name: SubjectRef,
}

/// Flattened attendance row handed to the aggregation code.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub subject_name: String,
    pub subject_code: String,
    pub status: AttendanceStatus,
    pub date: NaiveDate,
}

impl AttendanceEntry {
    pub fn to_record(&self) -> AttendanceRecord {
        AttendanceRecord {
            subject_name: self.sub_name.sub_name.clone(),
            subject_code: self.sub_name.sub_code.clone(),
            status: self.status,
            date: self.date.date_naive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub roll_num: i64,
    pub sclass_name: SclassRef,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

impl Student {
    pub fn attendance_records(&self) -> Vec<AttendanceRecord> {
        self.attendance.iter().map(AttendanceEntry::to_record).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub teach_sclass: SclassRef,
    #[serde(default)]
    pub teach_subject: Option<SubjectRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sclass {
    #[serde(rename = "_id")]
    pub id: String,
    pub sclass_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(rename = "_id")]
    pub id: String,
    pub sub_name: String,
    pub sub_code: String,
    pub sessions: i64,
    pub sclass_name: SclassRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub details: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: UserRef,
    pub complaint: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub school_name: String,
}

// ---- create payloads ----------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

fn describe_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Client-side validation failure. The request carrying the payload is never
/// sent; callers surface these inline next to the offending fields.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", describe_fields(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

fn require_str(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError {
            field,
            message: "is required".to_string(),
        });
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub roll_num: Option<i64>,
    pub sclass_name: String,
    pub school: String,
}

impl Validate for NewStudent {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_str(&mut errors, "name", &self.name);
        if self.roll_num.is_none() {
            errors.push(FieldError {
                field: "rollNum",
                message: "is required".to_string(),
            });
        }
        require_str(&mut errors, "sclassName", &self.sclass_name);
        require_str(&mut errors, "school", &self.school);
        finish(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    pub teach_sclass: String,
    pub teach_subject: Option<String>,
    pub school: String,
}

impl Validate for NewTeacher {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_str(&mut errors, "name", &self.name);
        require_str(&mut errors, "email", &self.email);
        require_str(&mut errors, "teachSclass", &self.teach_sclass);
        require_str(&mut errors, "school", &self.school);
        finish(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSclass {
    pub sclass_name: String,
    pub school: String,
}

impl Validate for NewSclass {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_str(&mut errors, "sclassName", &self.sclass_name);
        require_str(&mut errors, "school", &self.school);
        finish(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub sub_name: String,
    pub sub_code: String,
    pub sessions: i64,
    pub sclass_name: String,
    pub school: String,
}

impl Validate for NewSubject {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_str(&mut errors, "subName", &self.sub_name);
        require_str(&mut errors, "subCode", &self.sub_code);
        if self.sessions < 1 {
            errors.push(FieldError {
                field: "sessions",
                message: "must be at least 1".to_string(),
            });
        }
        require_str(&mut errors, "sclassName", &self.sclass_name);
        require_str(&mut errors, "school", &self.school);
        finish(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotice {
    pub title: String,
    pub details: String,
    pub date: NaiveDate,
    pub school: String,
}

impl Validate for NewNotice {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_str(&mut errors, "title", &self.title);
        require_str(&mut errors, "details", &self.details);
        require_str(&mut errors, "school", &self.school);
        finish(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub user: String,
    pub complaint: String,
    pub date: NaiveDate,
    pub school: String,
}

impl Validate for NewComplaint {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_str(&mut errors, "user", &self.user);
        require_str(&mut errors, "complaint", &self.complaint);
        require_str(&mut errors, "school", &self.school);
        finish(errors)
    }
}

/// One attendance mark for a student, submitted by an admin or teacher.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubmission {
    pub sub_name: String,
    pub status: AttendanceStatus,
    pub date: NaiveDate,
}

impl Validate for AttendanceSubmission {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_str(&mut errors, "subName", &self.sub_name);
        finish(errors)
    }
}
