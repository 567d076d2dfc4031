/// Block glyphs from sparsest to densest.
pub const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const FLOOR_DBM: f64 = -100.0;
const SPAN_DBM: f64 = 80.0;

/// Maps a dBm reading onto `0..=7`, with -100 dBm at 0 and -20 dBm at 7.
pub fn level(sample: i32) -> usize {
    let top = (GLYPHS.len() - 1) as f64;
    let scaled = ((f64::from(sample) - FLOOR_DBM) * top / SPAN_DBM).round();
    scaled.clamp(0.0, top) as usize
}

/// One glyph per sample. No samples, empty string.
pub fn render(samples: impl IntoIterator<Item = i32>) -> String {
    samples.into_iter().map(|s| GLYPHS[level(s)]).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
