use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use schoolhub::api::{self, ApiClient, NETWORK_ERROR};
use schoolhub::models::{NewComplaint, Student};
use schoolhub::store::{Phase, Slice};

/// One-shot HTTP responder: accepts a single connection, reads the request
/// headers, replies with a canned response, and hangs up.
fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut seen: Vec<u8> = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
            if seen.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush response");
    });
    format!("http://{}", addr)
}

const STUDENT_BODY: &str = r#"{
    "_id": "s-1",
    "name": "Dipesh Awasthi",
    "rollNum": 4,
    "sclassName": { "_id": "c-1", "sclassName": "10A" },
    "attendance": [
        {
            "date": "2024-09-02T00:00:00Z",
            "status": "Present",
            "subName": { "_id": "sub-1", "subName": "Math", "subCode": "MAT" }
        },
        {
            "date": "2024-09-03T00:00:00Z",
            "status": "Absent",
            "subName": { "_id": "sub-1", "subName": "Math", "subCode": "MAT" }
        }
    ]
}"#;

#[tokio::test]
async fn detail_fetch_settles_in_succeeded() {
    let base = serve_once("200 OK", STUDENT_BODY);
    let client = ApiClient::new(base);
    let mut slice: Slice<Student> = Slice::new();

    api::students::fetch_detail(&client, &mut slice, "s-1").await;

    let student = slice.phase().data().expect("succeeded");
    assert_eq!(student.roll_num, 4);
    let records = student.attendance_records();
    assert_eq!(records.len(), 2);
    assert_eq!(schoolhub::calc::overall_percentage(&records), 50.0);
}

#[tokio::test]
async fn http_500_settles_in_error() {
    let base = serve_once("500 Internal Server Error", "boom");
    let client = ApiClient::new(base);
    let mut slice: Slice<Student> = Slice::new();

    api::students::fetch_detail(&client, &mut slice, "s-1").await;
    assert_eq!(*slice.phase(), Phase::Error(NETWORK_ERROR.to_string()));
}

#[tokio::test]
async fn unreachable_backend_settles_in_error() {
    // Bind then drop, so the port is very likely unoccupied.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr")
    };
    let client = ApiClient::new(format!("http://{}", addr));
    let mut slice: Slice<Student> = Slice::new();

    api::students::fetch_detail(&client, &mut slice, "s-1").await;
    assert_eq!(*slice.phase(), Phase::Error(NETWORK_ERROR.to_string()));
}

#[tokio::test]
async fn business_rejection_settles_in_failed_with_exact_message() {
    let base = serve_once("200 OK", r#"{"message":"already exists"}"#);
    let client = ApiClient::new(base);
    let mut slice = Slice::new();

    let payload = NewComplaint {
        user: "u-1".to_string(),
        complaint: "The projector in room 4 is broken.".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date"),
        school: "sch-1".to_string(),
    };
    api::complaints::submit(&client, &mut slice, &payload)
        .await
        .expect("payload is valid");

    assert_eq!(*slice.phase(), Phase::Failed("already exists".to_string()));
}
