/// Integration test suite root
///
/// Runs the store and the action layer against real temporary directories,
/// the same way the CLI drives them.

mod workflow_tests;
