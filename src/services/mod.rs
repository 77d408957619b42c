/// OpenAPI documentation generation.
pub mod documentation;
/// Player listing and creation against the datastore.
pub mod player_service;
/// Story generation through the completion API.
pub mod story_service;
