// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the concrete chat adapter.
// - Wire everything into the router.

pub mod http;
pub mod state;
