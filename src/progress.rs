//! Study Schedule
//!
//! Progress percentage, lifecycle status and join availability. Everything
//! takes `now` explicitly.

use chrono::{DateTime, Utc};

use crate::constants::{
    LABEL_FINISHED, LABEL_FULL, LABEL_JOIN, LABEL_LEAVE, STATUS_FINISHED, STATUS_IN_PROGRESS,
    STATUS_NOT_STARTED,
};
use crate::models::Study;

/// Elapsed share of the study period, 0..=100
pub fn progress_percent(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> u8 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    if now <= start {
        return 0;
    }
    if now >= end {
        return 100;
    }
    // start < now < end here, so the period is non-empty
    let total = (end - start).num_milliseconds() as f64;
    let elapsed = (now - start).num_milliseconds() as f64;
    (elapsed / total * 100.0).floor().clamp(0.0, 100.0) as u8
}

pub fn study_progress(study: &Study, now: DateTime<Utc>) -> u8 {
    progress_percent(study.duration_start, study.duration_end, now)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyStatus {
    NotStarted,
    InProgress,
    Finished,
}

impl StudyStatus {
    pub fn at(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match (start, end) {
            (Some(_), Some(end)) if now >= end => StudyStatus::Finished,
            (Some(start), Some(_)) if now > start => StudyStatus::InProgress,
            _ => StudyStatus::NotStarted,
        }
    }

    pub fn of(study: &Study, now: DateTime<Utc>) -> Self {
        Self::at(study.duration_start, study.duration_end, now)
    }

    pub fn label(self) -> &'static str {
        match self {
            StudyStatus::NotStarted => STATUS_NOT_STARTED,
            StudyStatus::InProgress => STATUS_IN_PROGRESS,
            StudyStatus::Finished => STATUS_FINISHED,
        }
    }

    /// Progress bar modifier class
    pub fn css_class(self) -> &'static str {
        match self {
            StudyStatus::NotStarted => "not-started",
            StudyStatus::InProgress => "in-progress",
            StudyStatus::Finished => "finished",
        }
    }
}

/// What the detail page offers the current member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinState {
    Joined,
    Full,
    Finished,
    Open,
}

impl JoinState {
    pub fn for_study(study: &Study, user_id: Option<u64>, now: DateTime<Utc>) -> Self {
        if user_id.is_some_and(|id| study.has_participant(id)) {
            JoinState::Joined
        } else if study.is_full() {
            JoinState::Full
        } else if StudyStatus::of(study, now) == StudyStatus::Finished {
            JoinState::Finished
        } else {
            JoinState::Open
        }
    }

    pub fn can_join(self) -> bool {
        self == JoinState::Open
    }

    pub fn label(self) -> &'static str {
        match self {
            JoinState::Joined => LABEL_LEAVE,
            JoinState::Full => LABEL_FULL,
            JoinState::Finished => LABEL_FINISHED,
            JoinState::Open => LABEL_JOIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;
    use chrono::{TimeDelta, TimeZone};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    fn study(max: u32, participant_ids: &[u64]) -> Study {
        Study {
            id: 1,
            creator_id: 1,
            category_id: 1,
            title: "백엔드 스터디".into(),
            goal: String::new(),
            description: String::new(),
            max_participants: max,
            method: "온라인".into(),
            duration_start: Some(day(1)),
            duration_end: Some(day(11)),
            deadline: Some(day(1)),
            created_at: None,
            updated_at: None,
            participants: participant_ids
                .iter()
                .map(|&id| Participant { id, nickname: format!("user{id}"), avatar: String::new() })
                .collect(),
        }
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(progress_percent(Some(day(5)), Some(day(10)), day(1)), 0);
        assert_eq!(progress_percent(Some(day(5)), Some(day(10)), day(5)), 0);
        assert_eq!(progress_percent(Some(day(5)), Some(day(10)), day(10)), 100);
        assert_eq!(progress_percent(Some(day(5)), Some(day(10)), day(20)), 100);
    }

    #[test]
    fn test_progress_linear() {
        assert_eq!(progress_percent(Some(day(1)), Some(day(11)), day(2)), 10);
        assert_eq!(progress_percent(Some(day(1)), Some(day(11)), day(6)), 50);
        // 1/3 of the period floors to 33
        let start = day(1);
        let end = start + TimeDelta::hours(3);
        assert_eq!(progress_percent(Some(start), Some(end), start + TimeDelta::hours(1)), 33);
    }

    #[test]
    fn test_progress_degenerate_periods() {
        assert_eq!(progress_percent(Some(day(3)), Some(day(3)), day(2)), 0);
        assert_eq!(progress_percent(Some(day(3)), Some(day(3)), day(3)), 0);
        assert_eq!(progress_percent(Some(day(3)), Some(day(3)), day(4)), 100);
        assert_eq!(progress_percent(Some(day(9)), Some(day(3)), day(5)), 0);
        assert_eq!(progress_percent(None, Some(day(3)), day(5)), 0);
    }

    #[test]
    fn test_status() {
        assert_eq!(StudyStatus::at(Some(day(2)), Some(day(4)), day(1)), StudyStatus::NotStarted);
        assert_eq!(StudyStatus::at(Some(day(2)), Some(day(4)), day(3)), StudyStatus::InProgress);
        assert_eq!(StudyStatus::at(Some(day(2)), Some(day(4)), day(4)), StudyStatus::Finished);
        assert_eq!(StudyStatus::at(None, None, day(4)), StudyStatus::NotStarted);
        assert_eq!(StudyStatus::Finished.label(), "완료");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(StudyStatus::NotStarted.label(), STATUS_NOT_STARTED);
        assert_eq!(StudyStatus::InProgress.label(), "진행 중");
        assert_eq!(StudyStatus::Finished.label(), STATUS_FINISHED);
    }

    #[test]
    fn test_join_disabled_at_capacity() {
        let now = day(3);
        assert_eq!(JoinState::for_study(&study(2, &[7]), Some(1), now), JoinState::Open);
        assert_eq!(JoinState::for_study(&study(2, &[7, 8]), Some(1), now), JoinState::Full);
        assert!(!JoinState::Full.can_join());
        assert_eq!(JoinState::Full.label(), "모집 마감");
    }

    #[test]
    fn test_join_state_priority() {
        // a member of a full study can still leave
        assert_eq!(JoinState::for_study(&study(2, &[1, 8]), Some(1), day(3)), JoinState::Joined);
        assert_eq!(JoinState::for_study(&study(5, &[]), Some(1), day(20)), JoinState::Finished);
        assert_eq!(JoinState::for_study(&study(5, &[]), None, day(3)), JoinState::Open);
    }
}
