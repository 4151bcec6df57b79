use crate::types::{Block, BlockType, ExtractedLine};

/// Flatten OCR blocks into the line-level text the front-end displays.
///
/// Non-line blocks are dropped. Missing text becomes `""` and missing
/// confidence becomes `0`, so this never fails.
pub fn map_blocks(blocks: &[Block]) -> Vec<ExtractedLine> {
    blocks
        .iter()
        .filter(|block| block.block_type == BlockType::Line)
        .map(|block| ExtractedLine {
            text: block.text.clone().unwrap_or_default(),
            confidence: block.confidence.unwrap_or(0.0),
        })
        .collect()
}
