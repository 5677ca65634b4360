pub mod compose_gen;

pub use compose_gen::COMPOSE_DOCUMENT;

/// Default file name the compose document is written to
pub const COMPOSE_FILE_NAME: &str = "docker-compose.yml";

/// Return the Docker Compose document
pub fn generate_compose() -> &'static str {
    compose_gen::generate()
}
