use crate::types::repository::Repository;

pub fn to_json(repositories: &[Repository]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(repositories)
}
