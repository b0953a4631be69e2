#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Logger that accepts every call, for tests that do not assert on logging.
#[cfg(test)]
pub fn silent_logger() -> std::sync::Arc<dyn Logger> {
    let mut logger = MockLogger::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    std::sync::Arc::new(logger)
}
