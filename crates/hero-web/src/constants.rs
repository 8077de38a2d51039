// Page wiring for the web front-end

/// Id of the canvas element the hero renders into.
pub const CANVAS_ID: &str = "hero-canvas";

