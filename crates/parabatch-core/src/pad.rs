//! Fixed-width padding and truncation of id sequences.

/// Pad or truncate `seq` to exactly `max_len` elements.
///
/// The first `min(seq.len(), max_len)` elements are copied front-aligned;
/// any remainder is filled with `pad_id`. Longer sequences are truncated
/// to the first `max_len` elements with no end marker added or removed.
///
/// The returned effective length is the count of elements in the padded
/// output that differ from `pad_id`. Since id 0 is reserved for `<pad>`
/// at vocabulary construction, no legitimate token collides with the
/// default pad id and the count equals the unpadded length.
///
/// # Examples
/// ```
/// use parabatch_core::pad_to;
///
/// assert_eq!(pad_to(&[1, 3], 5, 0), (vec![1, 3, 0, 0, 0], 2));
/// ```
pub fn pad_to(seq: &[u32], max_len: usize, pad_id: u32) -> (Vec<u32>, usize) {
    let mut padded = vec![pad_id; max_len];
    let copy = seq.len().min(max_len);
    padded[..copy].copy_from_slice(&seq[..copy]);

    let effective = padded.iter().filter(|&&id| id != pad_id).count();

    (padded, effective)
}
