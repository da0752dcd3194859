//! Form Validation
//!
//! Field checks run before anything is sent to the API. Each form yields
//! `FieldErrors` keyed by field name; an empty map means the form is valid.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::constants::{category_name, CATEGORIES, METHODS};
use crate::models::{Gender, LoginRequest, SignupRequest, Study, StudyCreateDto, StudyUpdateDto};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid email pattern"));

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_CAPACITY: u32 = 2;
pub const DEFAULT_CAPACITY: u32 = 5;

/// Key for errors that belong to the whole form
pub const SUBMIT: &str = "submit";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form-level failure, e.g. a rejected request
    pub fn submit(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(SUBMIT, message);
        errors
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.insert("email", "이메일을 입력해주세요");
    } else if !EMAIL_RE.is_match(email) {
        errors.insert("email", "올바른 이메일 형식");
    }
}

// ========================
// Login
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let email = self.email.trim();
        let password = self.password.trim();

        let mut errors = FieldErrors::new();
        check_email(&mut errors, email);
        if password.is_empty() {
            errors.insert("password", "비밀번호를 입력해주세요");
        }

        if errors.is_empty() {
            Ok(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

// ========================
// Signup
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub gender: Option<Gender>,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();

        let mut errors = FieldErrors::new();
        if name.is_empty() {
            errors.insert("name", "이름을 입력해주세요");
        }
        check_email(&mut errors, email);
        if self.gender.is_none() {
            errors.insert("gender", "성별을 선택해주세요");
        }
        if self.password.is_empty() {
            errors.insert("password", "비밀번호를 입력해주세요");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert("password", "6자 이상 입력");
        }
        if self.password != self.confirm_password {
            errors.insert("confirmPassword", "비밀번호가 일치하지 않습니다");
        }

        match (errors.is_empty(), self.gender) {
            (true, Some(gender)) => Ok(SignupRequest {
                user_name: name.to_string(),
                password: self.password.trim().to_string(),
                email: email.to_string(),
                gender,
            }),
            _ => Err(errors),
        }
    }
}

// ========================
// Study create / edit
// ========================

/// Raw study form inputs as typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct StudyFormState {
    pub title: String,
    pub goal: String,
    pub description: String,
    pub category_id: String,
    pub max_participants: String,
    pub method: String,
    /// `YYYY-MM-DD` from `<input type="date">`
    pub duration_start: String,
    pub duration_end: String,
    pub deadline: String,
}

impl Default for StudyFormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            goal: String::new(),
            description: String::new(),
            category_id: CATEGORIES[0].id.to_string(),
            max_participants: DEFAULT_CAPACITY.to_string(),
            method: METHODS[0].to_string(),
            duration_start: String::new(),
            duration_end: String::new(),
            deadline: String::new(),
        }
    }
}

fn date_input(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_date_input(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl StudyFormState {
    /// Prefill the edit form
    pub fn from_study(study: &Study) -> Self {
        Self {
            title: study.title.clone(),
            goal: study.goal.clone(),
            description: study.description.clone(),
            category_id: study.category_id.to_string(),
            max_participants: study.max_participants.to_string(),
            method: study.method.clone(),
            duration_start: date_input(study.duration_start),
            duration_end: date_input(study.duration_end),
            deadline: date_input(study.deadline),
        }
    }

    pub fn validate(&self) -> Result<StudyDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        let goal = self.goal.trim();
        let description = self.description.trim();
        if title.is_empty() {
            errors.insert("title", "제목 필수");
        }
        if goal.is_empty() {
            errors.insert("goal", "목표 필수");
        }
        if description.is_empty() {
            errors.insert("description", "설명 필수");
        }

        let category_id = self
            .category_id
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|id| category_name(*id).is_some());
        if category_id.is_none() {
            errors.insert("categoryId", "카테고리 선택");
        }

        let method = self.method.trim();
        if method.is_empty() {
            errors.insert("method", "모임방식 선택");
        }

        let capacity = self
            .max_participants
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= MIN_CAPACITY);
        if capacity.is_none() {
            errors.insert("maxParticipants", "2명 이상");
        }

        let start = parse_date_input(&self.duration_start);
        let end = parse_date_input(&self.duration_end);
        if start.is_none() || end.is_none() {
            errors.insert("durationStart", "기간 입력");
        }
        let deadline = parse_date_input(&self.deadline);
        if deadline.is_none() {
            errors.insert("deadline", "신청마감 입력");
        }

        match (category_id, capacity, start, end, deadline) {
            (Some(category_id), Some(max_participants), Some(duration_start), Some(duration_end), Some(deadline))
                if errors.is_empty() =>
            {
                Ok(StudyDraft {
                    category_id,
                    title: title.to_string(),
                    goal: goal.to_string(),
                    description: description.to_string(),
                    max_participants,
                    method: method.to_string(),
                    duration_start,
                    duration_end,
                    deadline,
                })
            }
            _ => Err(errors),
        }
    }
}

/// A study form that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct StudyDraft {
    pub category_id: u32,
    pub title: String,
    pub goal: String,
    pub description: String,
    pub max_participants: u32,
    pub method: String,
    pub duration_start: DateTime<Utc>,
    pub duration_end: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

impl StudyDraft {
    pub fn into_create(self, creator_id: u64) -> StudyCreateDto {
        StudyCreateDto {
            creator_id,
            category_id: self.category_id,
            title: self.title,
            goal: self.goal,
            description: self.description,
            max_participants: self.max_participants,
            method: self.method,
            duration_start: self.duration_start,
            duration_end: self.duration_end,
            deadline: self.deadline,
        }
    }

    pub fn into_update(self) -> StudyUpdateDto {
        StudyUpdateDto {
            category_id: Some(self.category_id),
            title: Some(self.title),
            goal: Some(self.goal),
            description: Some(self.description),
            max_participants: Some(self.max_participants),
            method: Some(self.method),
            duration_start: Some(self.duration_start),
            duration_end: Some(self.duration_end),
            deadline: Some(self.deadline),
        }
    }
}
