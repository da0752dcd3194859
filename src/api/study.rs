//! Study Endpoints

use reqwest::Method;

use super::{Access, ApiClient};
use crate::error::ApiError;
use crate::models::{JoinRequest, LeaveRequest, Study, StudyCreateDto, StudyUpdateDto};
use crate::storage::{self, LocalStorage};

/// Applications are auto-approved by the client
const APPLICATION_STATUS: &str = "APPROVED";

impl ApiClient {
    pub async fn list_studies(&self) -> Result<Vec<Study>, ApiError> {
        self.get_json("/api/v1/studies", "스터디 목록을 불러오는데 실패했습니다.").await
    }

    pub async fn get_study(&self, id: u64) -> Result<Study, ApiError> {
        self.get_json(&format!("/api/v1/studies/{id}"), "스터디 정보를 불러오는데 실패했습니다.")
            .await
    }

    pub async fn create_study(&self, study: &StudyCreateDto) -> Result<Study, ApiError> {
        let request = self.request(Method::POST, "/api/v1/studies").json(study);
        let response = self.execute(request, Access::Authorized, "스터디 생성에 실패했습니다.").await?;
        Ok(response.json().await?)
    }

    pub async fn update_study(&self, id: u64, study: &StudyUpdateDto) -> Result<Study, ApiError> {
        let request = self.request(Method::PUT, &format!("/api/v1/studies/{id}")).json(study);
        let response = self.execute(request, Access::Authorized, "스터디 수정에 실패했습니다.").await?;
        Ok(response.json().await?)
    }

    pub async fn delete_study(&self, id: u64) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/v1/studies/{id}"));
        self.execute(request, Access::Authorized, "스터디 삭제에 실패했습니다.").await?;
        Ok(())
    }

    /// Apply to a study on behalf of `applicant_id`. Requires a stored token.
    pub async fn join_study(&self, study_id: u64, applicant_id: u64) -> Result<(), ApiError> {
        if storage::load_token(&LocalStorage).is_none() {
            return Err(ApiError::MissingToken);
        }
        let body = JoinRequest {
            study_id,
            applicant_id,
            status: APPLICATION_STATUS,
        };
        let request = self
            .request(Method::POST, &format!("/api/v1/applications/study/{study_id}/apply"))
            .json(&body);
        self.execute(request, Access::Authorized, "스터디 참가에 실패했습니다.").await?;
        Ok(())
    }

    pub async fn leave_study(&self, study_id: u64, participant_id: u64) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, &format!("/api/v1/studies/{study_id}/leave"))
            .json(&LeaveRequest { participant_id });
        self.execute(request, Access::Authorized, "스터디 탈퇴에 실패했습니다.").await?;
        Ok(())
    }
}
