use serde::Serialize;

/// Dashboard view a session is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    LoginView,
    UserView,
    CollectionPointView,
    FactoryView,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginView => "login",
            Self::UserView => "user",
            Self::CollectionPointView => "collection-point",
            Self::FactoryView => "factory",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
