// Public library surface for integration tests (and potential reuse).

pub mod api;
