use crate::structs::railway_project::RailwayProject;

/// Pairs a GitHub repository with a Railway project by case-insensitive
/// exact name equality. First match wins when the project list contains
/// duplicates differing only in case.
pub fn find_matching_project<'a>(
    repo_name: &str,
    projects: &'a [RailwayProject],
) -> Option<&'a RailwayProject> {
    let repo_lower = repo_name.to_lowercase();
    projects.iter().find(|project| project.name.to_lowercase() == repo_lower)
}
