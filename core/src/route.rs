/// Which browser bundle serves a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppKind {
    Landing,
    Auth,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    BlogList,
    BlogDetail(String),
    BlogCreate,
    Dashboard,
    Login,
    Signup,
    PasswordReset,
    PasswordChange,
    NotFound,
}

impl Route {
    /// Accepts a full URL or a bare path; query and fragment are ignored.
    pub fn from_url(url: &str) -> Self {
        let path = match url::Url::parse(url) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
        };
        Self::from_path(&path)
    }

    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["blog"] => Route::BlogList,
            ["blog", "create"] => Route::BlogCreate,
            ["blog", id] => Route::BlogDetail(id.to_string()),
            ["dashboard"] => Route::Dashboard,
            ["auth", "login"] => Route::Login,
            ["auth", "signup"] => Route::Signup,
            ["auth", "password-reset"] => Route::PasswordReset,
            ["auth", "password-change"] => Route::PasswordChange,
            _ => {
                log::debug!("No route match for path: {}", path);
                Route::NotFound
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::BlogList => "/blog".to_string(),
            Route::BlogDetail(id) => format!("/blog/{}", id),
            Route::BlogCreate => "/blog/create".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Login => "/auth/login".to_string(),
            Route::Signup => "/auth/signup".to_string(),
            Route::PasswordReset => "/auth/password-reset".to_string(),
            Route::PasswordChange => "/auth/password-change".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn app(&self) -> AppKind {
        match self {
            Route::Login | Route::Signup | Route::PasswordReset | Route::PasswordChange => {
                AppKind::Auth
            }
            _ => AppKind::Landing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Home)]
    #[case("", Route::Home)]
    #[case("/blog", Route::BlogList)]
    #[case("/blog/", Route::BlogList)]
    #[case("/blog/create", Route::BlogCreate)]
    #[case("/blog/42", Route::BlogDetail("42".to_string()))]
    #[case("/blog/hello-world?ref=home", Route::BlogDetail("hello-world".to_string()))]
    #[case("/dashboard#top", Route::Dashboard)]
    #[case("/auth/login", Route::Login)]
    #[case("/auth/password-change/", Route::PasswordChange)]
    #[case("/auth", Route::NotFound)]
    #[case("/blog/1/edit", Route::NotFound)]
    #[case("http://localhost:8080/auth/signup?next=/", Route::Signup)]
    fn parses_urls(#[case] url: &str, #[case] expected: Route) {
        assert_eq!(Route::from_url(url), expected);
    }

    #[test]
    fn paths_parse_back_to_their_route() {
        let routes = [
            Route::Home,
            Route::BlogList,
            Route::BlogDetail("7".to_string()),
            Route::BlogCreate,
            Route::Dashboard,
            Route::Login,
            Route::Signup,
            Route::PasswordReset,
            Route::PasswordChange,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn auth_pages_belong_to_the_auth_bundle() {
        assert_eq!(Route::Signup.app(), AppKind::Auth);
        assert_eq!(Route::BlogDetail("1".into()).app(), AppKind::Landing);
        assert_eq!(Route::Dashboard.app(), AppKind::Landing);
    }
}
