//! Frontend Models
//!
//! Data structures matching the study API.
//!
//! Request bodies are always camelCase. Responses are read as camelCase but
//! also accept the snake_case spellings some endpoints return.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Study listing (matches backend response)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(alias = "creator_id", deserialize_with = "lenient_id")]
    pub creator_id: u64,
    #[serde(alias = "category_id")]
    pub category_id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goal: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(alias = "max_participants")]
    pub max_participants: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub method: String,
    #[serde(default, alias = "duration_start", deserialize_with = "timestamp::deserialize_opt")]
    pub duration_start: Option<DateTime<Utc>>,
    #[serde(default, alias = "duration_end", deserialize_with = "timestamp::deserialize_opt")]
    pub duration_end: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, alias = "created_at", deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updated_at", deserialize_with = "timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<Participant>,
}

impl Study {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_full(&self) -> bool {
        self.participant_count() >= self.max_participants as usize
    }

    pub fn has_participant(&self, user_id: u64) -> bool {
        self.participants.iter().any(|p| p.id == user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Participant {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    pub nickname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
        }
    }
}

/// Signed-in member, persisted alongside the token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
}

// ========================
// Auth DTOs
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(alias = "user_name")]
    pub user_name: String,
    pub email: String,
    pub gender: Gender,
}

impl LoginResponse {
    pub fn user(&self) -> User {
        User {
            id: self.id,
            name: self.user_name.clone(),
            email: self.email.clone(),
            gender: self.gender,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_name: String,
    pub password: String,
    pub email: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(alias = "user_name")]
    pub user_name: String,
    pub email: String,
}

// ========================
// Study DTOs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyCreateDto {
    pub creator_id: u64,
    pub category_id: u32,
    pub title: String,
    pub goal: String,
    pub description: String,
    pub max_participants: u32,
    pub method: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub duration_start: DateTime<Utc>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub duration_end: DateTime<Utc>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub deadline: DateTime<Utc>,
}

/// Partial update; `None` fields are left out of the body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize_opt")]
    pub duration_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize_opt")]
    pub duration_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize_opt")]
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub study_id: u64,
    pub applicant_id: u64,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub participant_id: u64,
}

/// Error body some endpoints send alongside non-2xx statuses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Serde helpers
// ========================

/// Ids arrive as numbers from most endpoints and as strings from a few.
fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {text:?}"))),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub mod timestamp {
    //! Lenient ISO-8601 parsing and millisecond RFC 3339 output.

    use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Accepts RFC 3339, naive date-times (read as UTC) and bare dates.
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn serialize_opt<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_study_accepts_mixed_field_names() {
        let json = r#"{
            "id": 7,
            "creatorId": "3",
            "category_id": 2,
            "title": "CS 스터디",
            "goal": "운영체제 완독",
            "description": "매주 한 챕터",
            "max_participants": 4,
            "method": "온라인",
            "durationStart": "2024-03-01T00:00:00.000Z",
            "duration_end": "2024-04-01T09:30:00",
            "deadline": "2024-02-25",
            "createdAt": "",
            "participants": null
        }"#;

        let study: Study = serde_json::from_str(json).unwrap();
        assert_eq!(study.id, 7);
        assert_eq!(study.creator_id, 3);
        assert_eq!(study.category_id, 2);
        assert_eq!(study.max_participants, 4);
        assert_eq!(study.duration_start, Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()));
        assert_eq!(study.duration_end, Some(Utc.with_ymd_and_hms(2024, 4, 1, 9, 30, 0).unwrap()));
        assert_eq!(study.deadline, Some(Utc.with_ymd_and_hms(2024, 2, 25, 0, 0, 0).unwrap()));
        assert_eq!(study.created_at, None);
        assert!(study.participants.is_empty());
    }

    #[test]
    fn test_study_membership() {
        let json = r#"{
            "id": 1, "creatorId": 1, "categoryId": 1, "title": "t", "maxParticipants": 2,
            "participants": [
                {"id": "10", "nickname": "민수"},
                {"id": 11, "nickname": "지호", "avatar": "https://img/11.png"}
            ]
        }"#;
        let study: Study = serde_json::from_str(json).unwrap();
        assert!(study.is_full());
        assert!(study.has_participant(10));
        assert!(!study.has_participant(12));
        assert_eq!(study.participants[0].avatar, "");
    }

    #[test]
    fn test_null_text_fields_read_as_empty() {
        let json = r#"[{
            "id": 4, "creatorId": 1, "categoryId": 3, "title": "알고리즘", "maxParticipants": 5,
            "goal": null, "description": null, "method": null,
            "participants": [{"id": 2, "nickname": "민수", "avatar": null}]
        }]"#;
        let studies: Vec<Study> = serde_json::from_str(json).unwrap();
        let study = &studies[0];
        assert_eq!(study.goal, "");
        assert_eq!(study.description, "");
        assert_eq!(study.method, "");
        assert_eq!(study.participants[0].avatar, "");
        assert!(crate::avatar::avatar_url(&study.participants[0]).starts_with("https://api.dicebear.com/"));
    }

    #[test]
    fn test_create_dto_body() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let dto = StudyCreateDto {
            creator_id: 1,
            category_id: 3,
            title: "알고리즘".into(),
            goal: "골드 달성".into(),
            description: "백준".into(),
            max_participants: 5,
            method: "혼합".into(),
            duration_start: start,
            duration_end: start,
            deadline: start,
        };
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body["creatorId"], 1);
        assert_eq!(body["maxParticipants"], 5);
        assert_eq!(body["durationStart"], "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn test_update_dto_skips_unset_fields() {
        let dto = StudyUpdateDto {
            title: Some("새 제목".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&dto).unwrap(), r#"{"title":"새 제목"}"#);
    }

    #[test]
    fn test_login_response_to_user() {
        let json = r#"{"token":"abc","id":5,"userName":"홍길동","email":"a@b.co","gender":"F"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let user = response.user();
        assert_eq!(user.name, "홍길동");
        assert_eq!(user.gender, Gender::Female);
        assert_eq!(response.token, "abc");
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        assert!(timestamp::parse("next tuesday").is_none());
        let json = r#"{"id":1,"creatorId":1,"categoryId":1,"title":"t","maxParticipants":2,"deadline":"soon"}"#;
        assert!(serde_json::from_str::<Study>(json).is_err());
    }
}
