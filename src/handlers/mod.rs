// handlers/mod.rs - Two-tier handler layout
//
// Public (no session) → Protected (gate + verified session)
//
// Protected handlers are only reachable under the prefixes in the configured
// protected path set; the route gate redirects cookie-less requests before
// they get here, and each handler verifies the token itself.
pub mod protected;
pub mod public;
