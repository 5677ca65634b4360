/// Production Docker Compose stack for the Node.js application.
///
/// Embedded verbatim at build time and never inspected at runtime.
pub const COMPOSE_DOCUMENT: &str = include_str!("templates/docker-compose.yml");

/// Generate the Docker Compose file contents
pub fn generate() -> &'static str {
    COMPOSE_DOCUMENT
}
