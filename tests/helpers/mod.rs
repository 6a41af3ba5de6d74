//! Shared helpers for integration tests.


use liby::Context;

/// Build a context from in-memory units, named `unit0.y`, `unit1.y`, ...
pub fn context_from(sources: &[&str]) -> Context {
    let mut ctx = Context::new();
    for (i, source) in sources.iter().enumerate() {
        ctx.load_source(format!("unit{i}.y"), *source)
            .unwrap_or_else(|e| panic!("fixture {i} should load: {e}"));
    }
    ctx
}
