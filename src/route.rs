//! Routes
//!
//! Path <-> page mapping for the history-based navigation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Signup,
    Login,
    Studies,
    CreateStudy,
    EditStudy(u64),
    StudyDetail(u64),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["signup"] => Route::Signup,
            ["login"] => Route::Login,
            ["studies"] => Route::Studies,
            ["create-study"] => Route::CreateStudy,
            ["edit-study", id] => id.parse().map(Route::EditStudy).unwrap_or(Route::NotFound),
            ["study", id] => id.parse().map(Route::StudyDetail).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Signup => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Studies => "/studies".to_string(),
            Route::CreateStudy => "/create-study".to_string(),
            Route::EditStudy(id) => format!("/edit-study/{id}"),
            Route::StudyDetail(id) => format!("/study/{id}"),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Studies | Route::CreateStudy | Route::EditStudy(_) | Route::StudyDetail(_)
        )
    }

    /// Signed-out visitors are sent to the signup page
    pub fn guard(self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            Route::Signup
        } else {
            self
        }
    }

    /// Route for the browser's current location
    pub fn current() -> Route {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::parse(&path))
            .unwrap_or(Route::Signup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Route::Signup);
        assert_eq!(Route::parse("/signup"), Route::Signup);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/studies/"), Route::Studies);
        assert_eq!(Route::parse("/study/12?tab=info"), Route::StudyDetail(12));
        assert_eq!(Route::parse("/edit-study/3"), Route::EditStudy(3));
        assert_eq!(Route::parse("/study/abc"), Route::NotFound);
        assert_eq!(Route::parse("/admin"), Route::NotFound);
    }

    #[test]
    fn test_path_parses_back() {
        for route in [
            Route::Login,
            Route::Studies,
            Route::CreateStudy,
            Route::EditStudy(9),
            Route::StudyDetail(4),
            Route::Signup,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(Route::StudyDetail(1).guard(false), Route::Signup);
        assert_eq!(Route::StudyDetail(1).guard(true), Route::StudyDetail(1));
        assert_eq!(Route::Login.guard(false), Route::Login);
    }
}
