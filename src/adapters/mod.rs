// Adapters layer: in-process implementations of the domain ports.
// Local file and DynamoDB stores live next to their configs under src/config.

pub mod memory;
