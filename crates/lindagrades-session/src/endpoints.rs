//! LINDA QIS endpoint URLs.

/// Public LINDA host.
pub const DEFAULT_BASE_URL: &str = "https://linda.hs-heilbronn.de";

/// Placeholder in the grade URL template that receives the session token.
pub const TOKEN_PLACEHOLDER: &str = "{asi}";

const LOGIN_PATH: &str = "/qisstudent/rds?state=user&type=1&category=auth.login&startpage=portal.vm&breadCrumbSource=portal";
const OVERVIEW_PATH: &str = "/qisstudent/rds?state=change&type=1&moduleParameter=studyPOSMenu&nextdir=change&next=menu.vm&subdir=applications&xml=menu&purge=y&navigationPosition=functions%2CstudyPOSMenu&breadcrumb=studyPOSMenu&topitem=functions&subitem=studyPOSMenu";
const GRADES_PATH: &str = "/qisstudent/rds?state=notenspiegelStudent&next=list.vm&nextdir=qispos/notenspiegel/student&createInfos=Y&struct=auswahlBaum&nodeID=auswahlBaum%7Cabschluss%3Aabschl%3D84%2Cstgnr%3D1&expand=0&asi={asi}";

/// The three URLs a session talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Form-encoded log-in target.
    pub login: String,
    /// Study menu page that embeds the `asi` token in its links.
    pub overview: String,
    /// Grade listing, with [`TOKEN_PLACEHOLDER`] where the token goes.
    pub grades_template: String,
}

impl Endpoints {
    /// Endpoints on `base_url` (scheme and host, no trailing path).
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            login: format!("{base}{LOGIN_PATH}"),
            overview: format!("{base}{OVERVIEW_PATH}"),
            grades_template: format!("{base}{GRADES_PATH}"),
        }
    }

    /// Grade listing URL with `token` substituted verbatim.
    pub fn grades(&self, token: &str) -> String {
        self.grades_template.replace(TOKEN_PLACEHOLDER, token)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_linda() {
        let endpoints = Endpoints::default();
        assert!(endpoints
            .login
            .starts_with("https://linda.hs-heilbronn.de/qisstudent/rds?state=user"));
        assert!(endpoints.overview.contains("moduleParameter=studyPOSMenu"));
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(
            Endpoints::new("http://127.0.0.1:8080/"),
            Endpoints::new("http://127.0.0.1:8080")
        );
    }

    #[test]
    fn token_is_substituted_verbatim() {
        let endpoints = Endpoints::new("http://localhost");
        let url = endpoints.grades("abc%2F123");
        assert!(url.ends_with("&expand=0&asi=abc%2F123"));
        assert!(!url.contains(TOKEN_PLACEHOLDER));
        assert!(url.starts_with("http://localhost/qisstudent/rds?state=notenspiegelStudent"));
    }
}
