//! Configurable limits for bounded decoding.

/// Limits applied to lengths read from a replay stream.
///
/// These are enforced before any allocation sized by the stream, so a
/// corrupted count fails fast instead of exhausting memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of ticks in one replay.
    pub max_ticks: usize,

    /// Maximum number of chunks in one chunk sequence of a tick.
    pub max_chunks_per_sequence: usize,

    /// Maximum number of entity templates in one prefab placement.
    pub max_prefab_templates: usize,

    /// Maximum number of brushes in one entity template.
    pub max_template_brushes: usize,

    /// Maximum length of a NUL-terminated string, excluding the terminator.
    pub max_string_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_ticks: 4 * 1024 * 1024,
            max_chunks_per_sequence: 4096,
            max_prefab_templates: 64 * 1024,
            max_template_brushes: 64 * 1024,
            max_string_len: 4096,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_ticks: 1024,
            max_chunks_per_sequence: 8,
            max_prefab_templates: 64,
            max_template_brushes: 64,
            max_string_len: 256,
        }
    }

    /// Creates limits that never reject a stream; for trusted local files.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_ticks: usize::MAX,
            max_chunks_per_sequence: usize::MAX,
            max_prefab_templates: usize::MAX,
            max_template_brushes: usize::MAX,
            max_string_len: usize::MAX,
        }
    }
}
