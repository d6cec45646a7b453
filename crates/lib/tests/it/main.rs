/*! Integration tests for portalgate.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - backend: FileStore durability across reopen
 * - store: seeding and session persistence across fresh loads
 * - directory: uniqueness, protection and self-deletion rules
 * - sync: export/import round trips and malformed import safety
 * - portal: end-to-end login, management and logout flows
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("portalgate=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod backend;
mod directory;
mod portal;
mod store;
