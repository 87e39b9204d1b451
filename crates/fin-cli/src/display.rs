use fin_auth::{GuardDecision, Session};

use serde::Serialize;

/// Header initials: first letter of the first and last words, upper-cased.
/// `"U"` when there is no usable name.
pub fn user_initials(name: Option<&str>) -> String {
    let words: Vec<&str> = name.unwrap_or_default().split_whitespace().collect();

    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };

    let initials: String = first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        String::from("U")
    } else {
        initials
    }
}

/// Default file name for a fetched avatar. Path separators in the storage
/// key are replaced so the file lands in the working directory.
pub fn avatar_file_name(key: &str) -> String {
    let name: String = key
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("avatar-{name}")
}

/// What `fin status` prints. The token itself is never shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub authenticated: bool,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub avatar_key: Option<String>,
    pub initials: String,
    pub access: &'static str,
}

impl SessionView {
    pub fn new(session: &Session, decision: GuardDecision) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            user_name: session.user_name.clone(),
            user_email: session.user_email.clone(),
            avatar_key: session.visible_avatar_key().map(String::from),
            initials: user_initials(session.user_name.as_deref()),
            access: match decision {
                GuardDecision::Allow => "allow",
                GuardDecision::RedirectToLogin => "login required",
            },
        }
    }
}
