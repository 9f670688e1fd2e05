/// Renders a centred triangle of `height` rows, row `y` holding `2y + 1` copies of `fill`.
///
/// Returns `None` when the rendered tree would not fit in memory.
///
/// ```
/// use pairsum::puzzles::tree::christmas_tree;
///
/// assert_eq!(christmas_tree(3, "#").as_deref(), Some("  #\n ###\n#####\n"));
/// ```
pub fn christmas_tree(height: usize, fill: &str) -> Option<String> {
    let mut result = String::new();
    result.try_reserve_exact(rendered_len(height, fill.len())?).ok()?;

    for y in 0..height {
        result.push_str(&" ".repeat(height - y - 1));
        result.push_str(&fill.repeat(y * 2 + 1));
        result.push('\n');
    }
    Some(result)
}

/// Byte length of the rendered tree: `h(h-1)/2` spaces, `h²` fills and `h` newlines.
fn rendered_len(height: usize, fill_len: usize) -> Option<usize> {
    let spaces = height.checked_mul(height.saturating_sub(1))? / 2;
    let fills = height.checked_mul(height)?.checked_mul(fill_len)?;
    let total = spaces.checked_add(fills)?.checked_add(height)?;
    (total <= isize::MAX as usize).then_some(total)
}
