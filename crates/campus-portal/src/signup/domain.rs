use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned to a student row by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub i64);

/// Identifier within the account directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub i64);

/// Engineering streams offered on the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stream {
    Cse,
    Ce,
    Me,
    It,
    Ece,
}

impl Stream {
    pub const fn label(self) -> &'static str {
        match self {
            Stream::Cse => "CSE",
            Stream::Ce => "CE",
            Stream::Me => "ME",
            Stream::It => "IT",
            Stream::Ece => "ECE",
        }
    }

    /// All streams in the order they appear on the form.
    pub const fn options() -> [Stream; 5] {
        [Stream::Cse, Stream::Ce, Stream::Me, Stream::It, Stream::Ece]
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stream {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CSE" => Ok(Stream::Cse),
            "CE" => Ok(Stream::Ce),
            "ME" => Ok(Stream::Me),
            "IT" => Ok(Stream::It),
            "ECE" => Ok(Stream::Ece),
            other => Err(format!(
                "unknown stream '{other}' (expected CSE, CE, ME, IT, or ECE)"
            )),
        }
    }
}

/// Raw submission as posted from the sign-up form. Unknown keys in the
/// payload are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpSubmission {
    pub full_name: String,
    pub email: String,
    pub passcode: String,
    pub contact: String,
    pub stream: Stream,
    pub jyear: NaiveDate,
    pub pyear: NaiveDate,
}

/// A submission that has passed both intake checks. Only the intake guard
/// produces these, so every persisted registration was validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub full_name: String,
    pub email: String,
    pub passcode: String,
    pub contact: String,
    pub stream: Stream,
    pub jyear: NaiveDate,
    pub pyear: NaiveDate,
}

/// Stored registration row plus its generated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub registration: StudentRegistration,
}

impl StudentRecord {
    pub fn view(&self) -> RegistrationView {
        RegistrationView {
            id: self.id,
            full_name: self.registration.full_name.clone(),
            email: self.registration.email.clone(),
            contact: self.registration.contact.clone(),
            stream: self.registration.stream.label(),
            jyear: self.registration.jyear,
            pyear: self.registration.pyear,
        }
    }
}

/// Sanitized representation of a registration for API responses. The
/// passcode never leaves the store.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationView {
    pub id: StudentId,
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub stream: &'static str,
    pub jyear: NaiveDate,
    pub pyear: NaiveDate,
}

/// Input widget backing a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Telephone,
    Select,
    Date,
}

/// Declarative description of one sign-up input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

impl FieldDescriptor {
    fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            options: Vec::new(),
        }
    }
}

/// The full sign-up form: seven mandatory inputs and a submit action.
#[derive(Debug, Clone, Serialize)]
pub struct FormDescriptor {
    pub fields: Vec<FieldDescriptor>,
    pub submit_label: &'static str,
}

/// Render contract for the sign-up surface. No field carries a default and
/// building the description has no side effects.
pub fn signup_form() -> FormDescriptor {
    let mut stream = FieldDescriptor::required("stream", "Select Your Stream", FieldKind::Select);
    stream.options = Stream::options().iter().map(|option| option.label()).collect();

    FormDescriptor {
        fields: vec![
            FieldDescriptor::required("full_name", "Full Name", FieldKind::Text),
            FieldDescriptor::required("email", "Email Address", FieldKind::Email),
            FieldDescriptor::required("passcode", "Password", FieldKind::Password),
            FieldDescriptor::required("contact", "Phone Number", FieldKind::Telephone),
            stream,
            FieldDescriptor::required("jyear", "Date of Joining", FieldKind::Date),
            FieldDescriptor::required("pyear", "Date of Passing", FieldKind::Date),
        ],
        submit_label: "Save",
    }
}
