/// CSV reader configuration.
pub struct ReaderConfig {
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 64 * 1024,
        }
    }
}

impl ReaderConfig {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_default() {
        let config = ReaderConfig::default();
        assert_eq!(config.batch_size, 65536);
    }

    #[test]
    fn test_reader_with_batch_size() {
        let config = ReaderConfig::default().with_batch_size(1024);
        assert_eq!(config.batch_size, 1024);
    }
}
