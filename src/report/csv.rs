use crate::error::Result;
use crate::types::repository::Repository;

const HEADER: [&str; 6] = [
    "Name",
    "Additions",
    "Deletions",
    "TotalLinesChanged",
    "Files",
    "Score",
];

pub fn to_csv(repositories: &[Repository]) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new().from_writer(Vec::new());
    if repositories.is_empty() {
        writer.write_record(HEADER)?;
    }
    for repository in repositories {
        writer.serialize(repository)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
