use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ValidationIssue;
use crate::models::NewSubmission;

const NAME_MAX: usize = 80;
const MESSAGE_MAX: usize = 500;

/// Accepted attribution keys; anything else in `metadata` is stripped.
const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Deserialize)]
struct WaitlistRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "companyWebsite", alias = "company_website")]
    company_website: Option<String>,
    #[serde(default)]
    metadata: Option<Value>,
}

/// A request that passed validation. The honeypot value is carried through
/// untouched so the pipeline can decide what to do with it.
#[derive(Debug)]
pub struct WaitlistInput {
    pub submission: NewSubmission,
    pub company_website: Option<String>,
}

/// Validate a parsed request body into a storable submission.
///
/// Empty optional fields are treated as omitted so plain HTML form posts
/// (which always send every input) behave like JSON posts that leave the
/// field out. For form posts the `utm_*` keys arrive at the top level and
/// are lifted into `metadata`.
pub fn parse(raw: &Value) -> Result<WaitlistInput, Vec<ValidationIssue>> {
    let req: WaitlistRequest = serde_json::from_value(raw.clone())
        .map_err(|e| vec![ValidationIssue::new("", &e.to_string())])?;

    let mut issues = Vec::new();

    let email = match req.email.as_deref() {
        None => {
            issues.push(ValidationIssue::new("email", "Required"));
            String::new()
        }
        Some(e) if !EMAIL_RE.is_match(e) => {
            issues.push(ValidationIssue::new("email", "Invalid email"));
            String::new()
        }
        Some(e) => e.to_string(),
    };

    let name = match req.name.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(n) if n.chars().count() > NAME_MAX => {
            issues.push(ValidationIssue::new(
                "name",
                "Must be at most 80 characters",
            ));
            None
        }
        Some(n) => Some(n.to_string()),
    };

    let message = match req.message.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(m) if m.chars().count() > MESSAGE_MAX => {
            issues.push(ValidationIssue::new(
                "message",
                "Must be at most 500 characters",
            ));
            None
        }
        Some(m) => Some(m.to_string()),
    };

    let metadata = match req.metadata {
        Some(Value::Object(map)) => collect_utm(&map, "metadata.", &mut issues),
        Some(Value::Null) | None => {
            // Form posts carry utm_* keys at the top level.
            match raw.as_object() {
                Some(map) => collect_utm(map, "", &mut issues),
                None => None,
            }
        }
        Some(_) => {
            issues.push(ValidationIssue::new("metadata", "Must be an object"));
            None
        }
    };

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(WaitlistInput {
        submission: NewSubmission {
            email,
            name,
            message,
            metadata,
        },
        company_website: req.company_website,
    })
}

fn collect_utm(
    map: &Map<String, Value>,
    path_prefix: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Value> {
    let mut out = Map::new();

    for key in UTM_KEYS {
        match map.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => {
                if !s.is_empty() {
                    out.insert(key.to_string(), Value::String(s.clone()));
                }
            }
            Some(_) => {
                issues.push(ValidationIssue::new(
                    &format!("{path_prefix}{key}"),
                    "Must be a string",
                ));
            }
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(Value::Object(out))
    }
}
