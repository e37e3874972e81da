// Per-entity animation playback and region queries
//
// One Playback instance per live entity; instances own only their frame
// cursor and share the clip definitions read-only. advance() is meant to
// be called once per simulation tick from that entity's update step.

mod player;
mod query;

pub use player::Playback;
pub use query::{query_at_point, query_by_class, query_by_name};

/// Playback setup errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    #[error("cannot start playback of a clip with zero frames")]
    InvalidClip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_error_display() {
        let err = PlaybackError::InvalidClip;
        assert_eq!(
            err.to_string(),
            "cannot start playback of a clip with zero frames"
        );
    }
}
