// src/aggregate/render.rs
// =============================================================================
// Formats fetched files into one clipboard-ready text.
//
// Each file becomes a block like this:
//
//   ################################################ (80 '#')
//   # src/app.py
//   ################################################
//
//   <file content>
//
// and blocks are joined with "\n", which leaves a blank line between them.
// =============================================================================

const BANNER_WIDTH: usize = 80;

pub fn render_block(path: &str, content: &str) -> String {
    let banner = "#".repeat(BANNER_WIDTH);
    format!("{banner}\n# {path}\n{banner}\n\n{content}\n\n")
}

pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join("\n")
}
