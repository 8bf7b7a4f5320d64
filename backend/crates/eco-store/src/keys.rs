pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "ecochain-username";
pub const LANGUAGE_KEY: &str = "ecochain-lang";
pub const COLLECTIONS_KEY: &str = "ecochain-collections";
