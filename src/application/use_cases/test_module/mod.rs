//! Test Module Use Cases
//!
//! Placeholder resource produced from the CRUD template. Every operation answers
//! with a description of what it would do and never touches storage.

/// Placeholder service for the test-module resource
#[derive(Debug, Clone, Copy, Default)]
pub struct TestModuleService;

impl TestModuleService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn create(&self) -> String {
        "This action adds a new testModule".to_string()
    }

    #[must_use]
    pub fn find_all(&self) -> String {
        "This action returns all testModule".to_string()
    }

    #[must_use]
    pub fn find_one(&self, id: i64) -> String {
        format!("This action returns a #{id} testModule")
    }

    #[must_use]
    pub fn update(&self, id: i64) -> String {
        format!("This action updates a #{id} testModule")
    }

    #[must_use]
    pub fn remove(&self, id: i64) -> String {
        format!("This action removes a #{id} testModule")
    }
}
