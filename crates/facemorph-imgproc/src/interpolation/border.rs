/// How resampling treats coordinates outside the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderMode {
    /// Clamp to the nearest edge pixel.
    Replicate,
    /// Mirror across the edge without repeating the edge pixel,
    /// i.e. `gfedcb|abcdefgh|gfedcba`.
    Reflect101,
}

/// Map a possibly out-of-range index into `0..len` under the border mode.
pub(crate) fn map_border_index(i: i64, len: usize, border: BorderMode) -> usize {
    debug_assert!(len > 0);
    let len_i = len as i64;
    match border {
        BorderMode::Replicate => i.clamp(0, len_i - 1) as usize,
        BorderMode::Reflect101 => {
            if len == 1 {
                return 0;
            }
            let period = 2 * (len_i - 1);
            let mut i = i.rem_euclid(period);
            if i >= len_i {
                i = period - i;
            }
            i as usize
        }
    }
}
