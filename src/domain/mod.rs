// Domain layer: request/outcome model shared by the engine and the CLI.
// No I/O and no external state beyond std/serde.

pub mod model;
