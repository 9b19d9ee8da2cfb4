use crate::core::Word;

/// Exactly one sort mode is active at a time. `ByDate` means "whatever order
/// the backing source returned" (the backend sorts by recency); the state
/// never re-derives a date order locally, so switching back to `ByDate` is a
/// reload owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    ByDate,
    ByAlphabet,
}

/// Sorts the visible projection in place, case-insensitively by the english
/// form. Stable so that equal keys keep their prior relative order.
pub fn sort_indices(indices: &mut [usize], words: &[Word], mode: SortMode) {
    match mode {
        SortMode::ByDate => {} // source order, nothing to do locally
        SortMode::ByAlphabet => {
            indices.sort_by(|&lhs, &rhs| {
                let left = words[lhs].english.to_lowercase();
                let right = words[rhs].english.to_lowercase();
                left.cmp(&right)
            });
        }
    }
}
