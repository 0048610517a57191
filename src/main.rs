use anyhow::{bail, Context, Result};

use schoolhub::api::{self, ApiClient};
use schoolhub::calc;
use schoolhub::store::{Phase, Slice};

const USAGE: &str = "usage: schoolhub <attendance|students|notices|complaints> <id>";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let command = args.next().context(USAGE)?;
    let id = args.next().context(USAGE)?;
    let client = ApiClient::from_env()?;

    match command.as_str() {
        "attendance" => attendance_report(&client, &id).await,
        "students" => list_students(&client, &id).await,
        "notices" => list_notices(&client, &id).await,
        "complaints" => list_complaints(&client, &id).await,
        other => bail!("unknown command: {other}\n{USAGE}"),
    }
}

fn settled<T>(phase: &Phase<T>) -> Result<&T> {
    match phase {
        Phase::Succeeded(data) => Ok(data),
        Phase::Failed(message) => bail!("request rejected: {message}"),
        Phase::Error(message) => bail!("{message}"),
        Phase::Idle | Phase::Loading => bail!("request did not settle"),
    }
}

async fn attendance_report(client: &ApiClient, student_id: &str) -> Result<()> {
    let mut slice = Slice::new();
    api::students::fetch_detail(client, &mut slice, student_id).await;
    let student = settled(slice.phase())?;

    let records = student.attendance_records();
    println!(
        "Attendance for {} (roll {}, class {})",
        student.name, student.roll_num, student.sclass_name.sclass_name
    );
    if records.is_empty() {
        println!("  no attendance recorded");
        return Ok(());
    }
    for summary in calc::group_by_subject(&records).values() {
        println!(
            "  {:<24} {:>3}/{:<3} {:>6.1}%",
            format!("{} ({})", summary.subject_name, summary.subject_code),
            summary.present_count,
            summary.total_sessions,
            summary.percentage()
        );
    }
    let overall = calc::overall_attendance(&records);
    println!(
        "  overall: {:.1}% present, {:.1}% absent",
        overall.present_percentage, overall.absent_percentage
    );
    Ok(())
}

async fn list_students(client: &ApiClient, class_id: &str) -> Result<()> {
    let mut slice = Slice::new();
    api::students::fetch_for_class(client, &mut slice, class_id).await;
    for student in settled(slice.phase())? {
        println!("{:>6}  {}", student.roll_num, student.name);
    }
    Ok(())
}

async fn list_notices(client: &ApiClient, school_id: &str) -> Result<()> {
    let mut slice = Slice::new();
    api::notices::fetch_all(client, &mut slice, school_id).await;
    for notice in settled(slice.phase())? {
        println!("{}  {}\n    {}", notice.date.date_naive(), notice.title, notice.details);
    }
    Ok(())
}

async fn list_complaints(client: &ApiClient, school_id: &str) -> Result<()> {
    let mut slice = Slice::new();
    api::complaints::fetch_all(client, &mut slice, school_id).await;
    for complaint in settled(slice.phase())? {
        println!(
            "{}  {}: {}",
            complaint.date.date_naive(),
            complaint.user.name,
            complaint.complaint
        );
    }
    Ok(())
}
