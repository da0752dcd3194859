//! Static option tables and UI labels

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: 1, name: "백엔드" },
    Category { id: 2, name: "CS" },
    Category { id: 3, name: "알고리즘" },
    Category { id: 4, name: "면접" },
    Category { id: 5, name: "자격증" },
    Category { id: 6, name: "영어" },
];

pub const METHODS: &[&str] = &["온라인", "오프라인", "혼합"];

pub fn category_name(id: u32) -> Option<&'static str> {
    CATEGORIES.iter().find(|c| c.id == id).map(|c| c.name)
}

pub const LABEL_JOIN: &str = "참여하기";
pub const LABEL_LEAVE: &str = "탈퇴하기";
pub const LABEL_DELETE: &str = "삭제";
pub const LABEL_PROCESSING: &str = "처리중...";
pub const LABEL_FULL: &str = "모집 마감";
pub const LABEL_FINISHED: &str = "종료된 스터디";

pub const STATUS_NOT_STARTED: &str = "시작 전";
pub const STATUS_IN_PROGRESS: &str = "진행 중";
pub const STATUS_FINISHED: &str = "완료";

/// How long the join confirmation stays up
pub const MODAL_DURATION_MS: u32 = 2000;
/// Pause on the success panel before leaving the auth forms
pub const REDIRECT_DELAY_MS: u32 = 1200;

/// Participants shown as avatars before collapsing into "+N"
pub const AVATAR_PREVIEW: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_name(3), Some("알고리즘"));
        assert_eq!(category_name(0), None);
    }
}
