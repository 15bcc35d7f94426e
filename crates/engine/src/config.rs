use derive_builder::Builder;

/// Default `BufReader` capacity used while counting.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// When the byte size is read from the filesystem relative to the counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeProbe {
    /// Query size once counting has finished. A file growing during the read
    /// can then report a size that disagrees with the line count.
    #[default]
    AfterCount,
    /// Query size before the file is opened.
    BeforeCount,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    #[builder(default)]
    pub size_probe: SizeProbe,
    #[builder(default = "DEFAULT_BUFFER_CAPACITY")]
    pub buffer_capacity: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size_probe: SizeProbe::AfterCount,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default_impl() {
        let built = RunConfigBuilder::default().build().unwrap();
        let default = RunConfig::default();

        assert_eq!(built.size_probe, default.size_probe);
        assert_eq!(built.buffer_capacity, default.buffer_capacity);
    }

    #[test]
    fn builder_overrides() {
        let config = RunConfigBuilder::default()
            .size_probe(SizeProbe::BeforeCount)
            .buffer_capacity(16usize)
            .build()
            .unwrap();

        assert_eq!(config.size_probe, SizeProbe::BeforeCount);
        assert_eq!(config.buffer_capacity, 16);
    }
}
