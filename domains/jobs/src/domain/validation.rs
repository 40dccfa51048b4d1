//! Payload validation for the Jobs domain
//!
//! Same collect-all-errors contract as account validation: every
//! offending field is reported, in schema declaration order.

use serde::Deserialize;
use vagas_common::de::{lenient_f64, lenient_string};

/// Payload for `POST /criar-vaga` and `PUT /editar-vaga/{id}`
///
/// Fields deserialize leniently: a wrong-typed value ends up in the
/// validation field list instead of rejecting the whole payload.
#[derive(Debug, Deserialize)]
pub struct JobRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub enterprise: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
}

/// A fully validated job payload
#[derive(Debug)]
pub struct JobFields {
    pub title: String,
    pub salary: f64,
    pub content: String,
    pub enterprise: String,
    pub kind: String,
    pub location: String,
}

impl JobRequest {
    /// Validate against the job schema.
    ///
    /// Returns the offending field names in schema order:
    /// title, salary, content, enterprise, type, location.
    pub fn validate(self) -> Result<JobFields, Vec<String>> {
        let mut invalid = Vec::new();

        let required = |value: Option<String>, field: &str, invalid: &mut Vec<String>| match value
        {
            Some(s) if !s.is_empty() => Some(s),
            _ => {
                invalid.push(field.to_string());
                None
            }
        };

        let title = required(self.title, "title", &mut invalid);

        let salary = match self.salary {
            Some(s) => Some(s),
            None => {
                invalid.push("salary".to_string());
                None
            }
        };

        let content = required(self.content, "content", &mut invalid);
        let enterprise = required(self.enterprise, "enterprise", &mut invalid);
        let kind = required(self.kind, "type", &mut invalid);
        let location = required(self.location, "location", &mut invalid);

        match (title, salary, content, enterprise, kind, location) {
            (Some(title), Some(salary), Some(content), Some(enterprise), Some(kind), Some(location)) => {
                Ok(JobFields {
                    title,
                    salary,
                    content,
                    enterprise,
                    kind,
                    location,
                })
            }
            _ => Err(invalid),
        }
    }
}
