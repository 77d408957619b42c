/// Player listing and creation payloads.
pub mod player;
/// Liveness payload.
pub mod status;
/// Story generation payload.
pub mod story;
