use crate::infra::{
    parse_date, parse_stream, InMemoryAccountDirectory, InMemoryStudentRepository,
    RecordingMailer,
};
use campus_portal::error::AppError;
use campus_portal::signup::{
    NoticeConfig, SignUpService, SignUpSubmission, Stream, StudentRepository,
};
use chrono::NaiveDate;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Full name for the demo registration
    #[arg(long, default_value = "Asha Rao")]
    pub(crate) full_name: String,
    /// Submitter email address
    #[arg(long, default_value = "asha@example.com")]
    pub(crate) email: String,
    /// Contact number (must end in ten digits)
    #[arg(long, default_value = "9876543210")]
    pub(crate) contact: String,
    /// Stream code: CSE, CE, ME, IT, or ECE
    #[arg(long, default_value = "CSE", value_parser = parse_stream)]
    pub(crate) stream: Stream,
    /// Date of joining (YYYY-MM-DD)
    #[arg(long, default_value = "2021-08-01", value_parser = parse_date)]
    pub(crate) jyear: NaiveDate,
    /// Date of passing (YYYY-MM-DD)
    #[arg(long, default_value = "2025-05-01", value_parser = parse_date)]
    pub(crate) pyear: NaiveDate,
    /// Mailbox seeded as the administrative account
    #[arg(long, default_value = "admin@portal.example")]
    pub(crate) admin_mailbox: String,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        full_name,
        email,
        contact,
        stream,
        jyear,
        pyear,
        admin_mailbox,
    } = args;

    println!("Student sign-up demo");

    let students = Arc::new(InMemoryStudentRepository::default());
    let directory = Arc::new(InMemoryAccountDirectory::with_admin(admin_mailbox));
    let mailer = Arc::new(RecordingMailer::default());
    let service = SignUpService::new(
        students.clone(),
        directory,
        mailer.clone(),
        NoticeConfig::default(),
    );

    let submission = SignUpSubmission {
        full_name,
        email,
        passcode: "demo-passcode".to_string(),
        contact,
        stream,
        jyear,
        pyear,
    };

    match service.submit(submission.clone()) {
        Ok(receipt) => {
            println!(
                "- {} -> student id {} (admin notified: {})",
                receipt.message, receipt.student_id.0, receipt.admin_notified
            );
        }
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    }

    match students.find_first_by_email(&submission.email) {
        Ok(Some(record)) => match serde_json::to_string_pretty(&record.view()) {
            Ok(json) => println!("  Stored registration:\n{json}"),
            Err(err) => println!("  Stored registration unavailable: {err}"),
        },
        Ok(None) => println!("  Store lookup returned no row"),
        Err(err) => println!("  Store unavailable: {err}"),
    }

    let sent = mailer.sent();
    if sent.is_empty() {
        println!("  Notices: none dispatched");
    } else {
        println!("  Notices:");
        for envelope in sent {
            println!(
                "    - template={} langcode={} -> {}",
                envelope.template, envelope.langcode, envelope.recipient
            );
        }
    }

    println!("\nRejected submission sample (short phone number)");
    let mut short_contact = submission;
    short_contact.contact = "12345".to_string();
    match service.submit(short_contact) {
        Err(err) => println!("  Rejected as expected: {err}"),
        Ok(receipt) => println!(
            "  Unexpectedly accepted as student id {}",
            receipt.student_id.0
        ),
    }

    Ok(())
}
