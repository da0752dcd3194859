//! Auth Endpoints

use reqwest::Method;

use super::{Access, ApiClient};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

impl ApiClient {
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::debug!("login {}", credentials.email);
        let request = self.request(Method::POST, "/api/v1/login").json(credentials);
        let response = self.execute(request, Access::Public, "로그인에 실패했습니다.").await?;
        Ok(response.json().await?)
    }

    pub async fn signup(&self, member: &SignupRequest) -> Result<SignupResponse, ApiError> {
        log::debug!("signup {}", member.email);
        let request = self.request(Method::POST, "/api/v1/member/sign").json(member);
        let response = self.execute(request, Access::Public, "회원가입에 실패했습니다.").await?;
        Ok(response.json().await?)
    }
}
