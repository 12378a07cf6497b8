// hackhub-service/src/routes/mod.rs
pub mod auth_routes;
pub mod hackathon_routes;
pub mod invitation_routes;
pub mod team_routes;
pub mod user_routes;

// Split a comma-separated tag filter parameter
pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
