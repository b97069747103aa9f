// End-to-end tests for the BrandPulse Backend API
//
// Each test gets its own freshly migrated database inside a single shared
// testcontainers PostgreSQL instance, and its own RSS stub server standing
// in for Google News. The application under test is the real router wired
// with the real feed client and Postgres repository.
//
// Architecture:
// - One shared PostgreSQL container for the entire test suite
// - Each test creates a unique database (watchlist_<uuid>) and feed stub via
//   test-context setup
// - Teardown closes the shared pool and drops the database
