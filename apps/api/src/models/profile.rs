//! ProfileRecord — the canonical structured representation of a candidate's
//! résumé data. Produced by the extractor, mutated by the editing layer,
//! consumed by the export preparer.
//!
//! Defaulting rules live at this serde boundary: every missing or `null` key
//! becomes an empty string or empty list, so downstream consumers never see
//! `null` and never need ad hoc fallbacks.

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts `null` or a missing key as an empty string.
fn de_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `null` or a missing key as an empty list. The extraction prompt
/// permits the model to return `null` for any empty collection.
fn de_null_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `null`, a list of strings, or a single legacy string
/// (older records stored tasks as one free-text blob).
fn de_task_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tasks {
        List(Vec<String>),
        Single(String),
    }

    Ok(match Option::<Tasks>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Tasks::List(list)) => list,
        Some(Tasks::Single(s)) if s.is_empty() => Vec::new(),
        Some(Tasks::Single(s)) => vec![s],
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    #[serde(default, deserialize_with = "de_null_string")]
    pub name: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub position: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub city: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub birth_year: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub availability: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub summary: String,
    /// Base64-encoded photo, if one was supplied by the editing layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "de_null_string")]
    pub email: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub address: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "de_null_string")]
    pub position: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub company: String,
    /// MM/YYYY convention, not validated. "Heute" and its synonyms mark an
    /// ongoing entry and are treated as opaque text everywhere downstream.
    #[serde(default, deserialize_with = "de_null_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub end_date: String,
    /// Bullet items, display order significant.
    #[serde(default, deserialize_with = "de_task_list")]
    pub tasks: Vec<String>,
    /// Legacy single-blob job description. Accepted on read for older
    /// records, never written back; renderers fall back to it when `tasks`
    /// is empty.
    #[serde(default, deserialize_with = "de_null_string", skip_serializing)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "de_null_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub institution: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default, deserialize_with = "de_null_string")]
    pub name: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub issuer: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, deserialize_with = "de_null_string")]
    pub name: String,
    /// A1..C2 or "Muttersprache" by form convention; kept as an opaque
    /// string because the extractor is not guaranteed to stay in that set.
    #[serde(default, deserialize_with = "de_null_string")]
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub personal: Personal,
    #[serde(default, deserialize_with = "de_null_vec")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "de_null_vec")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "de_null_vec")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "de_null_vec")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "de_null_vec")]
    pub languages: Vec<Language>,
}

impl ProfileRecord {
    /// Required-field check applied by the editing workflow, never by the
    /// extractor. Returns one message per missing field.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.personal.name.trim().is_empty() {
            errors.push("Name ist ein Pflichtfeld".to_string());
        }
        if self.personal.city.trim().is_empty() {
            errors.push("Stadt/Wohnort ist ein Pflichtfeld".to_string());
        }
        for (i, exp) in self.experience.iter().enumerate() {
            if exp.position.trim().is_empty() {
                errors.push(format!("Position bei Berufserfahrung #{} fehlt", i + 1));
            }
            if exp.company.trim().is_empty() {
                errors.push(format!("Unternehmen bei Berufserfahrung #{} fehlt", i + 1));
            }
        }
        for (i, edu) in self.education.iter().enumerate() {
            if edu.degree.trim().is_empty() {
                errors.push(format!("Abschluss bei Ausbildung #{} fehlt", i + 1));
            }
            if edu.institution.trim().is_empty() {
                errors.push(format!("Institution bei Ausbildung #{} fehlt", i + 1));
            }
        }
        errors
    }

    /// Moves an experience entry into education, remapping
    /// position→degree, company→institution, tasks→description (joined by
    /// newline). Returns false if the index is out of range.
    pub fn move_experience_to_education(&mut self, index: usize) -> bool {
        if index >= self.experience.len() {
            return false;
        }
        let exp = self.experience.remove(index);
        let description = if exp.tasks.is_empty() {
            exp.description
        } else {
            exp.tasks.join("\n")
        };
        self.education.push(EducationEntry {
            degree: exp.position,
            institution: exp.company,
            start_date: exp.start_date,
            end_date: exp.end_date,
            description,
        });
        true
    }

    /// Moves an education entry into experience, remapping degree→position,
    /// institution→company, description→tasks (split on newlines).
    pub fn move_education_to_experience(&mut self, index: usize) -> bool {
        if index >= self.education.len() {
            return false;
        }
        let edu = self.education.remove(index);
        let tasks = edu
            .description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        self.experience.push(ExperienceEntry {
            position: edu.degree,
            company: edu.institution,
            start_date: edu.start_date,
            end_date: edu.end_date,
            tasks,
            description: String::new(),
        });
        true
    }

    /// Swaps an experience entry with its predecessor. List order is the
    /// display order, so reordering must survive every pipeline stage.
    pub fn move_experience_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.experience.len() {
            return false;
        }
        self.experience.swap(index, index - 1);
        true
    }

    pub fn move_experience_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.experience.len() {
            return false;
        }
        self.experience.swap(index, index + 1);
        true
    }

    pub fn move_education_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.education.len() {
            return false;
        }
        self.education.swap(index, index - 1);
        true
    }

    pub fn move_education_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.education.len() {
            return false;
        }
        self.education.swap(index, index + 1);
        true
    }
}
